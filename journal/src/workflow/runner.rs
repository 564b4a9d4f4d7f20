use crate::workflow::config::ProfileConfig;
use anyhow::Context;
use tastecore::profile::TasteVector;
use tastecore::radar::{compute_radar_layout, value_to_slider_percent, RadarLayout};
use tastecore::telemetry::ActivityLog;

/// Everything one laid-out profile run produces.
pub struct WorkflowResult {
    pub layout: RadarLayout,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub values: Vec<f32>,
    pub slider_percents: Vec<f32>,
    pub notes: Vec<String>,
}

#[derive(Clone)]
pub struct Runner {
    config: ProfileConfig,
}

impl Runner {
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn execute(&self, profile: &TasteVector) -> anyhow::Result<WorkflowResult> {
        let logger = ActivityLog::new("workflow");
        let scale = self.config.value_scale();
        let frame = self.config.chart_frame();

        let layout =
            compute_radar_layout(profile, frame, scale).context("computing radar layout")?;

        let mut slider_percents = Vec::with_capacity(profile.len());
        for sample in profile.samples() {
            let percent = value_to_slider_percent(sample.value, scale)
                .with_context(|| format!("mapping {} onto its slider", sample.axis.label()))?;
            slider_percents.push(percent);
        }

        logger.record(&format!(
            "laid out {} axes at radius {:.1}",
            profile.len(),
            frame.radius
        ));

        let notes = vec![format!(
            "{} axes on a {:.0}-{:.0} scale",
            profile.len(),
            scale.min,
            scale.max
        )];

        Ok(WorkflowResult {
            layout,
            labels: profile.labels(),
            colors: profile.colors(),
            values: profile.values(),
            slider_percents,
            notes,
        })
    }
}
