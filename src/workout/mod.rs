//! Workout input model shared across the processing pipeline.

pub mod types;

pub use types::{EventKind, LocationSample, Quantity, Sport, Workout, WorkoutEvent};
