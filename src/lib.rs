//! Stridelog - Workout Analysis Engine
//!
//! An open-source workout analysis engine built in Rust. Takes normalized
//! sample streams for a recorded activity, reconstructs the active/paused
//! timeline at one-second resolution, and derives training metrics: TRIMP
//! training load, heart rate zone distributions, chart series, and summary
//! statistics.

pub mod metrics;
pub mod processing;
pub mod storage;
pub mod timeline;
pub mod workout;

// Re-export commonly used types
pub use metrics::training_load::TrainingLoadCalculator;
pub use metrics::zones::HrZones;
pub use processing::batch::BatchProcessor;
pub use processing::processor::WorkoutProcessor;
pub use storage::config::UserProfile;
pub use workout::types::Workout;
