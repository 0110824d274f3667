//! Health data collaborator interface.

use crate::workout::{LocationSample, Quantity, Workout, WorkoutEvent};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from a sample source fetch.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The metric is not recorded for this workout
    #[error("sample data unavailable: {0}")]
    Unavailable(String),

    /// The underlying store rejected or failed the query
    #[error("sample source query failed: {0}")]
    QueryFailed(String),
}

/// Supplies normalized sample series for a single workout.
///
/// Fetches are read-only and independent of one another; the processor
/// issues them concurrently and joins all of them before computing anything
/// derived.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Heart rate samples in bpm.
    async fn heart_rate(&self, workout: &Workout) -> Result<Vec<Quantity>, SourceError>;

    /// GPS fixes with derived speed and altitude.
    async fn locations(&self, workout: &Workout) -> Result<Vec<LocationSample>, SourceError>;

    /// Cadence samples in rpm.
    async fn cadence(&self, workout: &Workout) -> Result<Vec<Quantity>, SourceError>;

    /// Pace samples in seconds per meter.
    async fn pace(&self, workout: &Workout) -> Result<Vec<Quantity>, SourceError>;

    /// Active energy samples in kilocalories.
    async fn active_energy(&self, workout: &Workout) -> Result<Vec<Quantity>, SourceError>;

    /// Raw pause/resume event stream.
    async fn events(&self, workout: &Workout) -> Result<Vec<WorkoutEvent>, SourceError>;
}

/// A `SampleSource` over already-materialized series.
///
/// Replays an exported bundle through the pipeline; also the mock source
/// for integration tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaySource {
    /// Heart rate samples in bpm
    #[serde(default)]
    pub heart_rate: Vec<Quantity>,
    /// GPS fixes
    #[serde(default)]
    pub locations: Vec<LocationSample>,
    /// Cadence samples in rpm
    #[serde(default)]
    pub cadence: Vec<Quantity>,
    /// Pace samples in seconds per meter
    #[serde(default)]
    pub pace: Vec<Quantity>,
    /// Active energy samples in kilocalories
    #[serde(default)]
    pub active_energy: Vec<Quantity>,
    /// Raw pause/resume events
    #[serde(default)]
    pub events: Vec<WorkoutEvent>,
}

#[async_trait]
impl SampleSource for ReplaySource {
    async fn heart_rate(&self, _workout: &Workout) -> Result<Vec<Quantity>, SourceError> {
        Ok(self.heart_rate.clone())
    }

    async fn locations(&self, _workout: &Workout) -> Result<Vec<LocationSample>, SourceError> {
        Ok(self.locations.clone())
    }

    async fn cadence(&self, _workout: &Workout) -> Result<Vec<Quantity>, SourceError> {
        Ok(self.cadence.clone())
    }

    async fn pace(&self, _workout: &Workout) -> Result<Vec<Quantity>, SourceError> {
        Ok(self.pace.clone())
    }

    async fn active_energy(&self, _workout: &Workout) -> Result<Vec<Quantity>, SourceError> {
        Ok(self.active_energy.clone())
    }

    async fn events(&self, _workout: &Workout) -> Result<Vec<WorkoutEvent>, SourceError> {
        Ok(self.events.clone())
    }
}
