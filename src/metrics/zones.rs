//! Heart rate zone boundaries and zone-bucketed summaries.

use crate::workout::Quantity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Default heart rate zone colors
pub const HR_ZONE_COLORS: [Color; 5] = [
    Color::new(128, 128, 128), // Z1: Gray (Recovery)
    Color::new(0, 128, 255),   // Z2: Blue (Aerobic)
    Color::new(0, 200, 100),   // Z3: Green (Tempo)
    Color::new(255, 200, 0),   // Z4: Yellow (Threshold)
    Color::new(255, 50, 50),   // Z5: Red (Anaerobic)
];

/// Zone display names, zone 1 through zone 5.
pub const HR_ZONE_NAMES: [&str; 5] = ["Recovery", "Aerobic", "Tempo", "Threshold", "Anaerobic"];

/// Default boundary breakpoints as percent of maximum heart rate.
const DEFAULT_ZONE_PERCENTS: [u16; 5] = [50, 60, 70, 80, 90];

/// Inclusive bpm bounds for one zone.
///
/// `high == 0` on the last zone means "no upper bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRange {
    /// Minimum BPM
    pub low: u16,
    /// Maximum BPM (0 = no upper limit)
    pub high: u16,
}

/// Time spent in one zone, as a display projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HrZoneSummary {
    /// Zone name
    pub name: String,
    /// Display color
    pub color: Color,
    /// Human-readable bpm range, e.g. "120-139 bpm"
    pub range_text: String,
    /// Seconds spent in this zone
    pub duration: u32,
    /// Total seconds across the whole series
    pub total_duration: u32,
}

/// Errors from zone summary computation.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// Fewer than five zone summaries materialized
    #[error("heart rate zone data is incomplete")]
    MissingZone,
}

/// Five contiguous heart rate zones under a maximum heart rate.
///
/// `values` holds the lower bpm bound of each zone and is strictly ascending
/// with every bound in `(0, max_hr]`. Boundaries move only through
/// [`increment_zone`](Self::increment_zone) and
/// [`decrement_zone`](Self::decrement_zone), which keep the ordering intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrZones {
    max_hr: u16,
    values: [u16; 5],
}

impl HrZones {
    /// Create zones at the default percent breakpoints for `max_hr`.
    pub fn new(max_hr: u16) -> Self {
        Self {
            max_hr,
            values: Self::default_values(max_hr),
        }
    }

    /// Restore zones from persisted boundary values.
    ///
    /// Falls back to the defaults when the stored values are not strictly
    /// ascending or fall outside `(0, max_hr]`.
    pub fn with_values(max_hr: u16, values: [u16; 5]) -> Self {
        if Self::values_valid(max_hr, &values) {
            Self { max_hr, values }
        } else {
            tracing::warn!(?values, max_hr, "invalid zone boundaries, using defaults");
            Self::new(max_hr)
        }
    }

    fn values_valid(max_hr: u16, values: &[u16; 5]) -> bool {
        values.windows(2).all(|pair| pair[0] < pair[1]) && values[0] > 0 && values[4] <= max_hr
    }

    /// Maximum heart rate the zones are anchored to.
    pub fn max_hr(&self) -> u16 {
        self.max_hr
    }

    /// Current zone boundary values (lower bpm bound per zone).
    pub fn values(&self) -> [u16; 5] {
        self.values
    }

    /// Default boundary values: `[50, 60, 70, 80, 90]%` of `max_hr`.
    ///
    /// Boundaries round up; [`percent_for_value`](Self::percent_for_value)
    /// rounds to nearest.
    pub fn default_values(max_hr: u16) -> [u16; 5] {
        let mut values = [0u16; 5];
        for (i, percent) in DEFAULT_ZONE_PERCENTS.iter().enumerate() {
            values[i] = ((f64::from(max_hr) * f64::from(*percent)) / 100.0).ceil() as u16;
        }
        values
    }

    /// Inclusive bpm range for `zone` (0-indexed 0..=4).
    ///
    /// Zone 4 has no upper bound; its `high` is the sentinel 0.
    pub fn range_for_zone(&self, zone: usize) -> Option<ZoneRange> {
        match zone {
            0..=3 => Some(ZoneRange {
                low: self.values[zone],
                high: self.values[zone + 1] - 1,
            }),
            4 => Some(ZoneRange {
                low: self.values[4],
                high: 0,
            }),
            _ => None,
        }
    }

    /// Percent of maximum heart rate a value represents, rounded to nearest.
    pub fn percent_for_value(&self, value: u16) -> u16 {
        ((f64::from(value) / f64::from(self.max_hr)) * 100.0).round() as u16
    }

    /// Zone index (0..=4) that classifies `value`.
    ///
    /// Returns `None` below zone 1's lower bound. A boundary value belongs
    /// to the zone it opens: `values[i]` is zone `i`, `values[i] - 1` is
    /// zone `i - 1`.
    pub fn zone_for_value(&self, value: u16) -> Option<usize> {
        (0..5).rev().find(|&zone| value >= self.values[zone])
    }

    /// Raise one zone boundary by 1 bpm.
    ///
    /// The move happens only when the result stays strictly below the next
    /// zone's boundary (`max_hr + 1` for the last zone); otherwise a no-op.
    /// Returns whether the boundary moved.
    pub fn increment_zone(&mut self, zone: usize) -> bool {
        if zone >= 5 {
            return false;
        }
        let ceiling = if zone == 4 {
            self.max_hr + 1
        } else {
            self.values[zone + 1]
        };
        let next = self.values[zone] + 1;
        if next < ceiling {
            self.values[zone] = next;
            true
        } else {
            false
        }
    }

    /// Lower one zone boundary by 1 bpm.
    ///
    /// The move happens only when the result stays strictly above the
    /// previous zone's boundary (0 for the first zone); otherwise a no-op.
    /// Returns whether the boundary moved.
    pub fn decrement_zone(&mut self, zone: usize) -> bool {
        if zone >= 5 || self.values[zone] == 0 {
            return false;
        }
        let floor = if zone == 0 { 0 } else { self.values[zone - 1] };
        let next = self.values[zone] - 1;
        if next > floor {
            self.values[zone] = next;
            true
        } else {
            false
        }
    }

    /// Bucket a heart rate series into the five zones.
    ///
    /// Each zone filters with inclusive bounds. The last zone tests only its
    /// lower bound, and a zone whose lower bound is 0 excludes unset zero
    /// readings. Duration is the count of matching samples, total duration
    /// the series length.
    ///
    /// # Errors
    ///
    /// `ZoneError::MissingZone` when fewer than five summaries materialize.
    pub fn summaries(&self, quantities: &[Quantity]) -> Result<Vec<HrZoneSummary>, ZoneError> {
        let total_duration = quantities.len() as u32;

        let mut summaries = Vec::with_capacity(5);
        for zone in 0..5 {
            let Some(range) = self.range_for_zone(zone) else {
                break;
            };

            let low = f64::from(range.low);
            let high = f64::from(range.high);
            let duration = quantities
                .iter()
                .filter(|quantity| {
                    let v = quantity.value;
                    if zone == 4 {
                        v >= low
                    } else if range.low == 0 {
                        v > 0.0 && v <= high
                    } else {
                        v >= low && v <= high
                    }
                })
                .count() as u32;

            summaries.push(HrZoneSummary {
                name: HR_ZONE_NAMES[zone].to_string(),
                color: HR_ZONE_COLORS[zone],
                range_text: range_text(range),
                duration,
                total_duration,
            });
        }

        if summaries.len() < 5 {
            return Err(ZoneError::MissingZone);
        }
        Ok(summaries)
    }
}

fn range_text(range: ZoneRange) -> String {
    if range.high == 0 {
        format!("{}+ bpm", range.low)
    } else {
        format!("{}-{} bpm", range.low, range.high)
    }
}
