//! Derived training metrics: zones, training load, summaries and charts.

pub mod calculator;
pub mod charts;
pub mod interpolate;
pub mod training_load;
pub mod zones;

pub use calculator::{summarize, WorkoutSummary};
pub use charts::{chart_intervals, chart_set, ChartInterval, ChartMetric, ChartSet};
pub use interpolate::resample;
pub use training_load::{pad_series, Gender, TrainingLoadCalculator};
pub use zones::{HrZoneSummary, HrZones, ZoneError, ZoneRange};
