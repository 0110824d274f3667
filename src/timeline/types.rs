//! Timeline entry types.

use crate::workout::Sport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time range during which the activity was paused.
///
/// Bound policy: inclusive start, exclusive end. A second exactly at the
/// pause timestamp is stopped; a second exactly at the resume timestamp is
/// active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoppedInterval {
    /// Pause timestamp
    pub start: DateTime<Utc>,
    /// Resume timestamp
    pub end: DateTime<Utc>,
}

impl StoppedInterval {
    /// Whether `at` falls inside the interval (`[start, end)`).
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }

    /// Interval length in seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// A dense per-second timeline entry.
///
/// One record covers one whole second of the workout. Numeric fields default
/// to zero; a field is "present" once a sample lands in its second. Records
/// are mutated only while the timeline is being built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Whole-second timestamp this record covers
    pub timestamp: DateTime<Utc>,
    /// False while the workout was paused
    pub is_active: bool,
    /// True once a location sample landed in this second
    pub is_location: bool,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Speed in m/s
    pub speed: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Heart rate in bpm
    pub heart_rate: f64,
    /// Cycling cadence in rpm
    pub cadence: f64,
    /// Pace in seconds per meter
    pub pace: f64,
    /// Ambient temperature in degrees Celsius
    pub temperature: f64,
}

impl Record {
    /// Create an empty active record for one second.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            is_active: true,
            is_location: false,
            latitude: 0.0,
            longitude: 0.0,
            speed: 0.0,
            altitude: 0.0,
            heart_rate: 0.0,
            cadence: 0.0,
            pace: 0.0,
            temperature: 0.0,
        }
    }

    /// Whether any sample landed in this second.
    pub fn has_data(&self) -> bool {
        self.is_location
            || self.heart_rate > 0.0
            || self.cadence > 0.0
            || self.pace > 0.0
            || self.temperature != 0.0
    }

    /// Movement filter for metrics purposes.
    ///
    /// A record is moving when it is active and, for speed-capable sports,
    /// its speed is nonzero.
    pub fn is_moving(&self, sport: Sport) -> bool {
        self.is_active && (!sport.uses_speed() || self.speed > 0.0)
    }
}
