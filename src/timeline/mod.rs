//! Dense per-second workout timeline reconstruction.

pub mod builder;
pub mod intervals;
pub mod types;

pub use builder::{build_records, moving_records, SampleSet};
pub use intervals::stopped_intervals;
pub use types::{Record, StoppedInterval};
