//! Stridelog - Workout Analysis Engine
//!
//! Main entry point: replays an exported workout bundle through the
//! processing pipeline and prints the derived analysis as JSON.

use std::sync::Arc;

use serde::Deserialize;
use stridelog::processing::processor::WorkoutProcessor;
use stridelog::processing::source::ReplaySource;
use stridelog::storage::config;
use stridelog::workout::Workout;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// A normalized workout bundle: the workout plus its sample series.
#[derive(Debug, Deserialize)]
struct WorkoutBundle {
    workout: Workout,
    #[serde(flatten)]
    samples: ReplaySource,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stridelog v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: stridelog <workout-bundle.json>"))?;

    let bundle: WorkoutBundle = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let app_config = config::load_config()?;

    let processor = WorkoutProcessor::new(Arc::new(bundle.samples));
    let analysis = processor.process(&bundle.workout, &app_config.profile).await;

    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
