//! Evenly spaced chart series for workout displays.

use crate::metrics::interpolate::resample;
use crate::storage::config::Units;
use crate::timeline::Record;
use serde::{Deserialize, Serialize};

/// One chart point: elapsed seconds from activity start against a display
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartInterval {
    /// Elapsed seconds from activity start
    pub x: f64,
    /// Metric value, localized where noted
    pub y: f64,
}

/// Metric extracted from the record timeline for charting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMetric {
    Speed,
    Pace,
    Cadence,
    Altitude,
    HeartRate,
}

/// All chart series for one workout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSet {
    /// Speed, localized to km/h or mph
    pub speed: Vec<ChartInterval>,
    /// Pace, localized to min/km or min/mi
    pub pace: Vec<ChartInterval>,
    /// Cadence in rpm
    pub cadence: Vec<ChartInterval>,
    /// Altitude in meters
    pub altitude: Vec<ChartInterval>,
    /// Heart rate in bpm
    pub heart_rate: Vec<ChartInterval>,
}

/// Output point count for a moving duration.
///
/// Long workouts chart fewer points so the series stays displayable.
fn point_count(moving_seconds: usize) -> usize {
    if moving_seconds > 3600 {
        500
    } else if moving_seconds > 1800 {
        600
    } else {
        1000
    }
}

/// Build the chart series for one metric over movement-filtered records.
///
/// Speed and pace values are localized to the display unit system before
/// hand-off; the remaining metrics stay in canonical units.
pub fn chart_intervals(moving: &[Record], metric: ChartMetric, units: Units) -> Vec<ChartInterval> {
    if moving.is_empty() {
        return Vec::new();
    }

    let values: Vec<f64> = moving
        .iter()
        .map(|record| match metric {
            ChartMetric::Speed => units.localize_speed(record.speed),
            ChartMetric::Pace => units.localize_pace(record.pace),
            ChartMetric::Cadence => record.cadence,
            ChartMetric::Altitude => record.altitude,
            ChartMetric::HeartRate => record.heart_rate,
        })
        .collect();

    let moving_duration = moving.len() as f64;
    let points = point_count(moving.len());
    let interval = values.len() as f64 / points as f64;
    let x_step = moving_duration / points as f64;

    resample(&values, interval)
        .into_iter()
        .enumerate()
        .map(|(i, y)| ChartInterval {
            x: i as f64 * x_step,
            y,
        })
        .collect()
}

/// Build every chart series for one workout.
pub fn chart_set(moving: &[Record], units: Units) -> ChartSet {
    ChartSet {
        speed: chart_intervals(moving, ChartMetric::Speed, units),
        pace: chart_intervals(moving, ChartMetric::Pace, units),
        cadence: chart_intervals(moving, ChartMetric::Cadence, units),
        altitude: chart_intervals(moving, ChartMetric::Altitude, units),
        heart_rate: chart_intervals(moving, ChartMetric::HeartRate, units),
    }
}
