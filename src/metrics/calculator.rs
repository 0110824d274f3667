//! Workout summary statistics from the dense record timeline.

use crate::timeline::Record;
use crate::workout::Sport;
use serde::{Deserialize, Serialize};

/// Flat derived scalars for one workout.
///
/// This is the property set the persistence layer receives; all values are
/// in canonical units (meters, m/s, bpm, seconds).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Total recorded duration in seconds
    pub duration_seconds: u32,
    /// Active, moving duration in seconds
    pub moving_seconds: u32,
    /// Total distance in meters
    pub distance_meters: f64,
    /// Average heart rate in bpm over seconds with a reading
    pub avg_heart_rate: f64,
    /// Maximum heart rate in bpm
    pub max_heart_rate: f64,
    /// Average cadence in rpm over seconds with a reading
    pub avg_cadence: f64,
    /// Average speed in m/s over moving seconds with a reading
    pub avg_speed: f64,
    /// Maximum speed in m/s
    pub max_speed: f64,
    /// Average pace in seconds per meter over seconds with a reading
    pub avg_pace: f64,
    /// Minimum elevation in meters over located seconds
    pub min_elevation: f64,
    /// Maximum elevation in meters over located seconds
    pub max_elevation: f64,
    /// Active energy burned in kilocalories
    pub active_energy: f64,
    /// Banister training impulse score
    pub training_load: u32,
    /// Percent of heart rate reserve the average heart rate represents
    pub percent_heart_rate_reserve: u16,
    /// Zone boundary values in effect when the workout was analyzed
    pub zone_values: Option<[u16; 5]>,
    /// Encoded polyline of the coordinate track
    pub polyline: String,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Aggregate summary statistics over a record timeline.
///
/// Averages skip seconds without a reading (zero fields); speed statistics
/// consider only moving seconds. Distance, energy, training load and the
/// polyline are filled in by the processing pipeline.
pub fn summarize(records: &[Record], sport: Sport) -> WorkoutSummary {
    let moving: Vec<&Record> = records.iter().filter(|r| r.is_moving(sport)).collect();

    let mut summary = WorkoutSummary {
        duration_seconds: records.len() as u32,
        moving_seconds: moving.len() as u32,
        ..Default::default()
    };

    summary.avg_heart_rate = mean(
        records
            .iter()
            .map(|r| r.heart_rate)
            .filter(|hr| *hr > 0.0),
    );
    summary.max_heart_rate = records.iter().map(|r| r.heart_rate).fold(0.0, f64::max);

    summary.avg_cadence = mean(records.iter().map(|r| r.cadence).filter(|c| *c > 0.0));
    summary.avg_pace = mean(records.iter().map(|r| r.pace).filter(|p| *p > 0.0));

    summary.avg_speed = mean(moving.iter().map(|r| r.speed).filter(|s| *s > 0.0));
    summary.max_speed = moving.iter().map(|r| r.speed).fold(0.0, f64::max);

    let mut located = records.iter().filter(|r| r.is_location);
    if let Some(first) = located.next() {
        let (min, max) = located.fold((first.altitude, first.altitude), |(min, max), r| {
            (min.min(r.altitude), max.max(r.altitude))
        });
        summary.min_elevation = min;
        summary.max_elevation = max;
    }

    summary
}
