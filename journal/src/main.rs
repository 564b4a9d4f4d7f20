use anyhow::Context;
use clap::Parser;
use generator::profile::{build_sample_reviews, build_taste_profile_from_config, GeneratorConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::ChartModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tastecore::profile::AxisPreset;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ProfileConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Kuchisabishii taste-profile workflow driver")]
struct Args {
    /// Run a single profile through the workflow and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a profile config from YAML
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Axis preset when no config file is given: basic or full
    #[arg(long, default_value = "full")]
    preset: String,
    /// Seed for the synthetic profile generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Keep the HTTP bridge alive for the visualizer
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let preset = match args.preset.as_str() {
        "basic" => AxisPreset::Basic,
        "full" => AxisPreset::Full,
        other => anyhow::bail!("unknown preset {} (expected basic or full)", other),
    };

    let profile_config = if let Some(path) = args.profile {
        ProfileConfig::load(path)?
    } else {
        ProfileConfig::for_preset(preset)
    };

    let runner = Runner::new(profile_config.clone());
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));
    gui_bridge.seed_reviews(build_sample_reviews(profile_config.preset, args.seed));

    let generator_config = GeneratorConfig {
        preset: profile_config.preset,
        seed: args.seed,
        ..Default::default()
    };
    let profile = build_taste_profile_from_config(&generator_config, profile_config.value_scale());

    let result = runner.execute(&profile)?;
    let model = ChartModel::from_result(&result, profile_config.preset, profile_config.value_scale());
    gui_bridge.publish(&model)?;

    if args.offline {
        println!(
            "Offline run -> {} axes, {} data points, notes {:?}",
            result.labels.len(),
            result.layout.data_points.len(),
            result.notes
        );
        gui_bridge.publish_status("Offline chart layout ready.");

        let report = format!(
            "axes={} radius={} scale={}-{} percents={:?}\n",
            result.labels.len(),
            profile_config.radius,
            profile_config.scale_min,
            profile_config.scale_max,
            result.slider_percents
        );
        let report_path = PathBuf::from("tools/data/offline_chart.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
