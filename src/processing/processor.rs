//! Single-workout processing pipeline.
//!
//! One workout is one isolated unit of work: samples are fetched
//! concurrently, joined, and only then folded into the dense timeline and
//! the derived metrics. Nothing here shares mutable state across workouts.

use crate::metrics::calculator::{summarize, WorkoutSummary};
use crate::metrics::charts::{chart_set, ChartSet};
use crate::metrics::training_load::pad_series;
use crate::metrics::zones::HrZoneSummary;
use crate::processing::source::{SampleSource, SourceError};
use crate::storage::config::UserProfile;
use crate::storage::polyline::encode_polyline;
use crate::timeline::builder::{build_records, moving_records, SampleSet};
use crate::timeline::intervals::stopped_intervals;
use crate::workout::Workout;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Derived metrics for one workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutAnalysis {
    /// Identity of the analyzed workout
    pub workout_id: Uuid,
    /// Flat summary scalars for persistence
    pub summary: WorkoutSummary,
    /// Chart series for display
    pub charts: ChartSet,
    /// Zone-bucketed heart rate distribution; `None` when zone data is
    /// unavailable for this workout or profile
    pub zones: Option<Vec<HrZoneSummary>>,
}

/// Runs the processing pipeline for single workouts.
pub struct WorkoutProcessor {
    source: Arc<dyn SampleSource>,
}

fn series_or_empty<T>(
    result: Result<Vec<T>, SourceError>,
    metric: &str,
    workout_id: Uuid,
) -> Vec<T> {
    match result {
        Ok(series) => series,
        Err(error) => {
            tracing::warn!(%workout_id, metric, %error, "sample fetch failed, degrading to empty");
            Vec::new()
        }
    }
}

impl WorkoutProcessor {
    /// Create a processor over a sample source.
    pub fn new(source: Arc<dyn SampleSource>) -> Self {
        Self { source }
    }

    /// Process one workout into its derived metrics.
    ///
    /// All sample fetches run concurrently and are joined before any
    /// dependent computation. A failed fetch degrades that one metric to an
    /// empty series; processing itself never fails.
    pub async fn process(&self, workout: &Workout, profile: &UserProfile) -> WorkoutAnalysis {
        let (heart_rate, locations, active_energy, cadence, pace, events) = tokio::join!(
            self.source.heart_rate(workout),
            self.source.locations(workout),
            self.source.active_energy(workout),
            self.source.cadence(workout),
            self.source.pace(workout),
            self.source.events(workout),
        );

        let heart_rate = series_or_empty(heart_rate, "heart_rate", workout.id);
        let locations = series_or_empty(locations, "locations", workout.id);
        let active_energy = series_or_empty(active_energy, "active_energy", workout.id);
        let cadence = series_or_empty(cadence, "cadence", workout.id);
        let pace = series_or_empty(pace, "pace", workout.id);
        let events = series_or_empty(events, "events", workout.id);

        let stopped = stopped_intervals(&events);
        let samples = SampleSet {
            locations,
            heart_rate: heart_rate.clone(),
            cadence,
            pace,
            temperature: Vec::new(),
        };
        let records = build_records(workout.started_at, workout.ended_at, &stopped, &samples);
        let moving = moving_records(&records, workout.sport);

        let mut summary = summarize(&records, workout.sport);
        summary.distance_meters = workout.distance_meters;
        summary.active_energy = active_energy.iter().map(|q| q.value).sum();

        let load = profile.training_load();
        if load.is_supported() {
            let series: Vec<f64> = records.iter().map(|r| r.heart_rate).collect();
            let padded = pad_series(&series, records.len());
            summary.training_load = load.trimp(&padded);
            summary.percent_heart_rate_reserve =
                load.percent_heart_rate_reserve(summary.avg_heart_rate);
        }

        let track: Vec<(f64, f64)> = records
            .iter()
            .filter(|r| r.is_location)
            .map(|r| (r.latitude, r.longitude))
            .collect();
        summary.polyline = encode_polyline(&track);

        let charts = chart_set(&moving, profile.units);

        summary.zone_values = profile.hr_zones().map(|zones| zones.values());
        let zones = match profile.hr_zones() {
            Some(zones) => match zones.summaries(&heart_rate) {
                Ok(summaries) => Some(summaries),
                Err(error) => {
                    tracing::warn!(workout_id = %workout.id, %error, "zone summary unavailable");
                    None
                }
            },
            None => None,
        };

        tracing::debug!(
            workout_id = %workout.id,
            records = records.len(),
            moving = moving.len(),
            trimp = summary.training_load,
            "workout processed"
        );

        WorkoutAnalysis {
            workout_id: workout.id,
            summary,
            charts,
            zones,
        }
    }
}
