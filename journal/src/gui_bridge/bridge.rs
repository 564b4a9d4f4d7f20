use crate::generator::profile::{build_taste_profile_from_config, GeneratorConfig};
use crate::gui_bridge::model::ChartModel;
use crate::workflow::runner::Runner;
use anyhow::Result;
use serde::Deserialize;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, RwLock},
    thread,
    time::Duration,
};
use tastecore::journal::{query_reviews, ReviewQuery, ReviewRecord};
use tastecore::profile::TasteVector;
use tastecore::social::LinkTokenIssuer;
use tastecore::telemetry::UsageMetrics;
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

const LINK_TOKEN_TTL: Duration = Duration::from_secs(600);

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

#[derive(Debug, Deserialize)]
struct LinkRequest {
    holder: String,
}

/// Bridge that hosts the HTTP endpoints consumed by the visualizer: the
/// current chart model, profile ingestion, the review journal, and QR
/// friend-link tokens.
pub struct GuiBridge {
    chart: Arc<RwLock<ChartModel>>,
    reviews: Arc<Mutex<Vec<ReviewRecord>>>,
    metrics: Arc<UsageMetrics>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let chart = Arc::new(RwLock::new(ChartModel::default()));
        let reviews = Arc::new(Mutex::new(Vec::<ReviewRecord>::new()));
        let metrics = Arc::new(UsageMetrics::new());
        let issuer = Arc::new(LinkTokenIssuer::new(LINK_TOKEN_TTL));

        let chart_for_filter = chart.clone();
        let chart_filter = warp::any().map(move || chart_for_filter.clone());
        let reviews_for_filter = reviews.clone();
        let reviews_filter = warp::any().map(move || reviews_for_filter.clone());
        let metrics_for_filter = metrics.clone();
        let metrics_filter = warp::any().map(move || metrics_for_filter.clone());
        let issuer_filter = warp::any().map(move || issuer.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let chart_route = warp::path!("chart")
            .and(warp::get())
            .and(chart_filter.clone())
            .map(|chart: Arc<RwLock<ChartModel>>| warp::reply::json(&*chart.read().unwrap()));

        let ingest_route = warp::path!("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(chart_filter.clone())
            .and(runner_filter.clone())
            .and(metrics_filter.clone())
            .and_then(
                |profile: TasteVector,
                 chart: Arc<RwLock<ChartModel>>,
                 runner: Arc<Runner>,
                 metrics: Arc<UsageMetrics>| async move {
                    match runner.execute(&profile) {
                        Ok(result) => {
                            let config = runner.config();
                            let mut guard = chart.write().unwrap();
                            *guard = ChartModel::from_result(
                                &result,
                                config.preset,
                                config.value_scale(),
                            );
                            metrics.record_layout();
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({"status": "ok"})),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            metrics.record_error();
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let generator_route = warp::path!("ingest-config")
            .and(warp::post())
            .and(warp::body::json())
            .and(chart_filter)
            .and(runner_filter)
            .and(metrics_filter.clone())
            .and_then(
                |config: GeneratorConfig,
                 chart: Arc<RwLock<ChartModel>>,
                 runner: Arc<Runner>,
                 metrics: Arc<UsageMetrics>| async move {
                    let scale = runner.config().value_scale();
                    let profile = build_taste_profile_from_config(&config, scale);
                    match runner.execute(&profile) {
                        Ok(result) => {
                            let mut guard = chart.write().unwrap();
                            *guard = ChartModel::from_result(&result, config.preset, scale);
                            metrics.record_layout();
                            if let Some(name) = config.scenario.as_ref() {
                                println!(
                                    "[GUI] Scenario {} -> {} axes laid out",
                                    name,
                                    result.labels.len()
                                );
                            }
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "axes": result.labels.len(),
                                    "description": config.description.clone().unwrap_or_default()
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("ingest-config error: {}", err);
                            metrics.record_error();
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let review_route = warp::path!("reviews")
            .and(warp::post())
            .and(warp::body::json())
            .and(reviews_filter.clone())
            .and(metrics_filter.clone())
            .map(
                |record: ReviewRecord,
                 reviews: Arc<Mutex<Vec<ReviewRecord>>>,
                 metrics: Arc<UsageMetrics>| {
                    let mut guard = reviews.lock().unwrap();
                    guard.push(record);
                    metrics.record_review();
                    warp::reply::json(&json!({"status": "ok", "stored": guard.len()}))
                },
            );

        let query_route = warp::path!("reviews" / "query")
            .and(warp::post())
            .and(warp::body::json())
            .and(reviews_filter)
            .map(
                |query: ReviewQuery, reviews: Arc<Mutex<Vec<ReviewRecord>>>| {
                    let guard = reviews.lock().unwrap();
                    warp::reply::json(&query_reviews(&guard, &query))
                },
            );

        let link_issue_route = warp::path!("friend-link")
            .and(warp::post())
            .and(warp::body::json())
            .and(issuer_filter.clone())
            .map(|request: LinkRequest, issuer: Arc<LinkTokenIssuer>| {
                let token = issuer.issue(&request.holder);
                warp::reply::json(&json!({
                    "token": token,
                    "ttl_seconds": issuer.ttl().as_secs()
                }))
            });

        let link_validate_route = warp::path!("friend-link" / String)
            .and(warp::get())
            .and(issuer_filter)
            .map(|token: String, issuer: Arc<LinkTokenIssuer>| {
                match issuer.validate(&token) {
                    Ok(holder) => warp::reply::with_status(
                        warp::reply::json(&json!({"holder": holder})),
                        StatusCode::OK,
                    ),
                    Err(err) => warp::reply::with_status(
                        warp::reply::json(&json!({"error": err.to_string()})),
                        StatusCode::NOT_FOUND,
                    ),
                }
            });

        let metrics_route = warp::path!("metrics")
            .and(warp::get())
            .and(metrics_filter)
            .map(|metrics: Arc<UsageMetrics>| {
                let (layouts, reviews, errors) = metrics.snapshot();
                warp::reply::json(&json!({
                    "layouts": layouts,
                    "reviews": reviews,
                    "errors": errors
                }))
            });

        thread::spawn(move || {
            let routes = chart_route
                .or(ingest_route)
                .or(generator_route)
                .or(review_route)
                .or(query_route)
                .or(link_issue_route)
                .or(link_validate_route)
                .or(metrics_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self {
            chart,
            reviews,
            metrics,
        }
    }

    pub fn publish(&self, model: &ChartModel) -> Result<()> {
        let mut guard = self.chart.write().unwrap();
        *guard = model.clone();
        self.metrics.record_layout();
        println!(
            "[GUI] chart axes: {}, notes: {}",
            guard.axis_labels.len(),
            guard.notes.len()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    /// Preloads journal entries so the first visualizer query has content.
    pub fn seed_reviews(&self, records: Vec<ReviewRecord>) {
        let mut guard = self.reviews.lock().unwrap();
        for record in records {
            guard.push(record);
            self.metrics.record_review();
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> ChartModel {
        self.chart.read().unwrap().clone()
    }

    #[cfg(test)]
    pub fn review_count(&self) -> usize {
        self.reviews.lock().unwrap().len()
    }
}
