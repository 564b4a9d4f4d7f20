use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, row, scrollable, slider, text, text_input, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme,
};
use serde::Deserialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tastecore::journal::{reduce, ReviewDraft, ReviewRecord, WizardAction, WizardStep};
use tastecore::prelude::{ChartFrame, Point as ChartPoint, ValueScale};
use tastecore::profile::{AxisPreset, TasteVector};
use tastecore::radar::{compute_radar_layout, slider_percent_to_value, value_to_slider_percent};

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Kuchisabishii Taste Radar".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(1)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    chart: Option<ChartPayload>,
    /// Working copy of the axis values edited through the sliders.
    draft_values: Vec<f32>,
    wizard: ReviewDraft,
    tag_input: String,
    photo_input: String,
    review_seq: u64,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    ChartFetched(Result<ChartPayload, String>),
    SliderChanged(usize, f32),
    SubmitProfile,
    ProfileSubmitted(Result<String, String>),
    Wizard(WizardAction),
    TagInputChanged(String),
    PhotoInputChanged(String),
    AddTag,
    AddPhoto,
    SubmitReview,
    ReviewSubmitted(Result<String, String>),
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                chart: None,
                draft_values: Vec::new(),
                wizard: ReviewDraft::new(AxisPreset::Full),
                tag_input: String::new(),
                photo_input: String::new(),
                review_seq: 100,
                status: "Waiting for the journal bridge...".into(),
                history: Vec::new(),
            },
            Task::perform(fetch_chart(), Message::ChartFetched),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_chart(), Message::ChartFetched),
            Message::ChartFetched(Ok(payload)) => {
                if state.draft_values.len() != payload.values.len() {
                    state.draft_values = payload.values.clone();
                    state.wizard = ReviewDraft::new(payload.preset);
                    state.push_history(format!(
                        "Chart: {} axes on a {:.0}-{:.0} scale",
                        payload.axis_labels.len(),
                        payload.scale_min,
                        payload.scale_max
                    ));
                }
                state.status = format!("Chart received: {} axes", payload.axis_labels.len());
                state.chart = Some(payload);
                Task::none()
            }
            Message::ChartFetched(Err(err)) => {
                state.status = format!("Chart error: {err}");
                Task::none()
            }
            Message::SliderChanged(index, percent) => {
                if let Some(chart) = &state.chart {
                    let scale = ValueScale::new(chart.scale_min, chart.scale_max);
                    if let Ok(value) = slider_percent_to_value(percent, scale) {
                        if let Some(slot) = state.draft_values.get_mut(index) {
                            *slot = value;
                        }
                    }
                }
                Task::none()
            }
            Message::SubmitProfile => match &state.chart {
                Some(chart) => {
                    let vector = TasteVector::from_preset(chart.preset, &state.draft_values);
                    Task::perform(post_profile(vector), Message::ProfileSubmitted)
                }
                None => Task::none(),
            },
            Message::ProfileSubmitted(Ok(message)) => {
                state.status = message;
                state.push_history("Profile submitted".into());
                Task::none()
            }
            Message::ProfileSubmitted(Err(err)) => {
                state.status = format!("Profile error: {err}");
                Task::none()
            }
            Message::Wizard(action) => {
                state.wizard = reduce(state.wizard.clone(), action);
                Task::none()
            }
            Message::TagInputChanged(value) => {
                state.tag_input = value;
                Task::none()
            }
            Message::PhotoInputChanged(value) => {
                state.photo_input = value;
                Task::none()
            }
            Message::AddTag => {
                let tag = std::mem::take(&mut state.tag_input);
                state.wizard = reduce(state.wizard.clone(), WizardAction::AddTag(tag));
                Task::none()
            }
            Message::AddPhoto => {
                let reference = std::mem::take(&mut state.photo_input);
                if !reference.trim().is_empty() {
                    state.wizard = reduce(state.wizard.clone(), WizardAction::AddPhoto(reference));
                }
                Task::none()
            }
            Message::SubmitReview => {
                state.review_seq += 1;
                let timestamp = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|elapsed| elapsed.as_secs_f64())
                    .unwrap_or(0.0);
                match state.wizard.finalize(state.review_seq, timestamp) {
                    Ok(record) => Task::perform(post_review(record), Message::ReviewSubmitted),
                    Err(err) => {
                        state.status = format!("Review error: {err}");
                        Task::none()
                    }
                }
            }
            Message::ReviewSubmitted(Ok(message)) => {
                state.status = message;
                state.push_history("Review saved".into());
                let preset = state
                    .chart
                    .as_ref()
                    .map(|chart| chart.preset)
                    .unwrap_or(AxisPreset::Full);
                state.wizard = ReviewDraft::new(preset);
                Task::none()
            }
            Message::ReviewSubmitted(Err(err)) => {
                state.status = format!("Review error: {err}");
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let mut editor = Column::new()
            .spacing(6)
            .push(text("Taste Profile").size(26));
        if let Some(chart) = &state.chart {
            let scale = ValueScale::new(chart.scale_min, chart.scale_max);
            for (index, label) in chart.axis_labels.iter().enumerate() {
                let value = state
                    .draft_values
                    .get(index)
                    .copied()
                    .unwrap_or(chart.scale_min);
                let percent = value_to_slider_percent(value, scale).unwrap_or(0.0);
                editor = editor.push(
                    row![
                        text(label.clone()).size(13).width(Length::Fixed(76.0)),
                        slider(0.0..=100.0, percent, move |position| {
                            Message::SliderChanged(index, position)
                        }),
                        text(format!("{:.1}", value)).size(13),
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center),
                );
            }
            editor = editor.push(
                button("POST profile")
                    .on_press(Message::SubmitProfile)
                    .padding(8),
            );
        } else {
            editor = editor.push(text("No chart yet").size(14));
        }

        let scale_max = state
            .chart
            .as_ref()
            .map(|chart| chart.scale_max)
            .unwrap_or(10.0);
        let wizard_body: Element<Message> = match state.wizard.step {
            WizardStep::Basics => column![
                text_input("Dish", &state.wizard.dish)
                    .on_input(|value| Message::Wizard(WizardAction::SetDish(value)))
                    .padding(6),
                text_input("Place", &state.wizard.place)
                    .on_input(|value| Message::Wizard(WizardAction::SetPlace(value)))
                    .padding(6),
            ]
            .spacing(6)
            .into(),
            WizardStep::Experience => column![
                text(format!(
                    "Craving (kuchisabishii): {}",
                    state.wizard.kuchisabishii
                ))
                .size(14),
                slider(1.0..=5.0, state.wizard.kuchisabishii as f32, |value| {
                    Message::Wizard(WizardAction::SetKuchisabishii(value.round() as u8))
                }),
                text(format!("Stars: {:.1}", state.wizard.stars)).size(14),
                slider(0.0..=5.0, state.wizard.stars, |value| {
                    Message::Wizard(WizardAction::SetStars(value))
                }),
                text_input("Notes", &state.wizard.notes)
                    .on_input(|value| Message::Wizard(WizardAction::SetNotes(value)))
                    .padding(6),
            ]
            .spacing(6)
            .into(),
            WizardStep::Taste => {
                let mut tastes = Column::new().spacing(4);
                for sample in state.wizard.taste.samples() {
                    let axis = sample.axis;
                    tastes = tastes.push(
                        row![
                            text(axis.label()).size(13).width(Length::Fixed(76.0)),
                            slider(0.0..=scale_max, sample.value, move |value| {
                                Message::Wizard(WizardAction::SetTaste(axis, value))
                            }),
                            text(format!("{:.1}", sample.value)).size(13),
                        ]
                        .spacing(8)
                        .align_y(Alignment::Center),
                    );
                }
                tastes.into()
            }
            WizardStep::Media => column![
                text_input("Photo reference", &state.photo_input)
                    .on_input(Message::PhotoInputChanged)
                    .padding(6),
                button("Add photo").on_press(Message::AddPhoto).padding(6),
                text(format!("{} photos attached", state.wizard.photo_refs.len())).size(13),
            ]
            .spacing(6)
            .into(),
            WizardStep::Summary => column![
                text(format!("{} @ {}", state.wizard.dish, state.wizard.place)).size(15),
                text(format!(
                    "craving {} | stars {:.1} | {} tags",
                    state.wizard.kuchisabishii,
                    state.wizard.stars,
                    state.wizard.tags.len()
                ))
                .size(13),
                text_input("Tag", &state.tag_input)
                    .on_input(Message::TagInputChanged)
                    .padding(6),
                button("Add tag").on_press(Message::AddTag).padding(6),
                button("Save review")
                    .on_press(Message::SubmitReview)
                    .padding(8),
            ]
            .spacing(6)
            .into(),
        };

        let wizard_nav = row![
            button("Back")
                .on_press(Message::Wizard(WizardAction::Back))
                .padding(6),
            text(state.wizard.step.title()).size(14),
            button("Next")
                .on_press(Message::Wizard(WizardAction::Next))
                .padding(6),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let config_column = column![
            editor,
            text("New review").size(20),
            wizard_nav,
            wizard_body,
            text(&state.status).size(14),
        ]
        .spacing(12)
        .padding(16)
        .width(Length::Fixed(360.0));

        let radar = Canvas::new(RadarChart::from_state(state))
            .width(Length::Fill)
            .height(Length::Fixed(320.0));

        let notes_list = match &state.chart {
            Some(chart) if !chart.notes.is_empty() => chart
                .notes
                .iter()
                .fold(Column::new().spacing(4), |col, note| {
                    col.push(text(note.clone()).size(14))
                }),
            _ => Column::new().push(text("No notes yet").size(14)),
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let telemetry_column = column![
            text("Taste Radar").size(26),
            radar,
            text("Chart notes").size(16),
            Container::new(notes_list).padding(6),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(120.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![config_column, telemetry_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

async fn fetch_chart() -> Result<ChartPayload, String> {
    let response = reqwest::get("http://127.0.0.1:9000/chart")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<ChartPayload>()
        .await
        .map_err(|e| e.to_string())
}

async fn post_profile(vector: TasteVector) -> Result<String, String> {
    let client = reqwest::Client::new();
    let response = client
        .post("http://127.0.0.1:9000/ingest")
        .json(&vector)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok("Profile submitted".into())
    } else {
        Err(format!("{}", response.status()))
    }
}

async fn post_review(record: ReviewRecord) -> Result<String, String> {
    let client = reqwest::Client::new();
    let response = client
        .post("http://127.0.0.1:9000/reviews")
        .json(&record)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok("Review saved".into())
    } else {
        Err(format!("{}", response.status()))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ChartPayload {
    #[serde(default)]
    preset: AxisPreset,
    #[serde(default)]
    axis_labels: Vec<String>,
    #[serde(default)]
    values: Vec<f32>,
    #[serde(default)]
    scale_min: f32,
    #[serde(default)]
    scale_max: f32,
    #[serde(default)]
    notes: Vec<String>,
}

#[derive(Clone)]
struct RadarChart {
    preset: AxisPreset,
    values: Vec<f32>,
    scale: ValueScale,
}

impl RadarChart {
    fn from_state(state: &Visualizer) -> Self {
        match &state.chart {
            Some(chart) => Self {
                preset: chart.preset,
                values: state.draft_values.clone(),
                scale: ValueScale::new(chart.scale_min, chart.scale_max),
            },
            None => Self {
                preset: AxisPreset::Full,
                values: Vec::new(),
                scale: AxisPreset::Full.default_scale(),
            },
        }
    }
}

impl canvas::Program<Message> for RadarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.02, 0.02, 0.04),
        );

        let center = ChartPoint::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 36.0;
        let chart_frame = ChartFrame::new(center, radius, 14.0);
        let vector = TasteVector::from_preset(self.preset, &self.values);

        let layout = match compute_radar_layout(&vector, chart_frame, self.scale) {
            Ok(layout) => layout,
            Err(_) => return vec![frame.into_geometry()],
        };

        for ring in 1..=3 {
            let ring_radius = radius * (ring as f32 / 3.0);
            let ring_path =
                Path::new(|builder| builder.circle(Point::new(center.x, center.y), ring_radius));
            frame.stroke(
                &ring_path,
                Stroke::default().with_color(Color::from_rgb(0.25, 0.25, 0.3)),
            );
        }

        let spokes = Path::new(|builder| {
            for anchor in &layout.axis_anchor_points {
                builder.move_to(Point::new(center.x, center.y));
                builder.line_to(Point::new(anchor.x, anchor.y));
            }
        });
        frame.stroke(
            &spokes,
            Stroke::default()
                .with_color(Color::from_rgb(0.35, 0.35, 0.45))
                .with_width(1.0),
        );

        if let Some(first) = layout.data_points.first() {
            let polygon = Path::new(|builder| {
                builder.move_to(Point::new(first.x, first.y));
                for point in &layout.data_points[1..] {
                    builder.line_to(Point::new(point.x, point.y));
                }
                builder.close();
            });
            frame.fill(&polygon, Color::from_rgba(0.95, 0.45, 0.35, 0.25));
            frame.stroke(
                &polygon,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgb(0.95, 0.45, 0.35)),
            );
        }

        let colors = vector.colors();
        for (index, point) in layout.data_points.iter().enumerate() {
            let color = colors
                .get(index)
                .and_then(|hex| parse_hex_color(hex))
                .unwrap_or(Color::from_rgb(0.95, 0.55, 0.2));
            let marker = Path::new(|builder| builder.circle(Point::new(point.x, point.y), 3.5));
            frame.fill(&marker, color);
        }

        let labels = vector.labels();
        for (index, label_point) in layout.label_points.iter().enumerate() {
            if let Some(label) = labels.get(index) {
                frame.fill_text(canvas::Text {
                    content: label.clone(),
                    position: Point::new(
                        label_point.x - 2.0 * label.len() as f32,
                        label_point.y - 7.0,
                    ),
                    color: Color::from_rgb(0.8, 0.8, 0.85),
                    size: 12.0.into(),
                    ..canvas::Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}
