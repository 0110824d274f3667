//! Normalized workout input types.
//!
//! The health-data collaborator hands the pipeline fully-materialized sample
//! lists in these shapes; nothing here touches a platform API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sport/activity type for a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Running activity
    #[default]
    Run,
    /// Cycling activity
    Ride,
    /// Walking activity
    Walk,
    /// Hiking activity
    Hike,
    /// Swimming activity
    Swim,
    /// Any activity without a dedicated category
    Other,
}

impl Sport {
    /// Whether records for this sport carry meaningful speed values.
    ///
    /// For speed-capable sports a second only counts as moving when its
    /// speed is nonzero; for the rest, active time is moving time.
    pub fn uses_speed(&self) -> bool {
        matches!(self, Sport::Run | Sport::Ride | Sport::Walk | Sport::Hike)
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sport::Run => write!(f, "Run"),
            Sport::Ride => write!(f, "Ride"),
            Sport::Walk => write!(f, "Walk"),
            Sport::Hike => write!(f, "Hike"),
            Sport::Swim => write!(f, "Swim"),
            Sport::Other => write!(f, "Other"),
        }
    }
}

/// A single timestamped scalar measurement.
///
/// Immutable once created; `start == end` for instantaneous readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Sample start timestamp
    pub start: DateTime<Utc>,
    /// Sample end timestamp
    pub end: DateTime<Utc>,
    /// Measured value in the metric's canonical unit
    pub value: f64,
}

impl Quantity {
    /// Create a sample spanning a time range.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, value: f64) -> Self {
        Self { start, end, value }
    }

    /// Create an instantaneous sample.
    pub fn instant(at: DateTime<Utc>, value: f64) -> Self {
        Self {
            start: at,
            end: at,
            value,
        }
    }

    /// Duration this sample spans, in seconds.
    pub fn duration_seconds(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 1000.0
    }
}

/// A timestamped GPS fix with derived motion fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Fix timestamp
    pub timestamp: DateTime<Utc>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Ground speed in m/s
    pub speed: f64,
}

/// Kind of a raw workout event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// User paused the activity
    Pause,
    /// User resumed the activity
    Resume,
    /// Lap marker
    Lap,
    /// Generic marker; ignored by interval reconstruction
    Marker,
}

/// A raw timestamped event from the activity recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutEvent {
    /// Event timestamp
    pub timestamp: DateTime<Utc>,
    /// Event kind
    pub kind: EventKind,
}

impl WorkoutEvent {
    /// Create an event.
    pub fn new(timestamp: DateTime<Utc>, kind: EventKind) -> Self {
        Self { timestamp, kind }
    }
}

/// A recorded workout to be analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: Uuid,
    /// Sport type
    pub sport: Sport,
    /// Workout start timestamp
    pub started_at: DateTime<Utc>,
    /// Workout end timestamp
    pub ended_at: DateTime<Utc>,
    /// Total distance in meters, as reported by the recording source
    pub distance_meters: f64,
}

impl Workout {
    /// Create a workout with a fresh identity.
    pub fn new(sport: Sport, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport,
            started_at,
            ended_at,
            distance_meters: 0.0,
        }
    }

    /// Total recorded duration in seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.ended_at - self.started_at).num_seconds()
    }
}
