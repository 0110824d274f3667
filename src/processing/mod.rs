//! Asynchronous workout processing pipeline.

pub mod batch;
pub mod processor;
pub mod source;

pub use batch::{BatchProcessor, BatchReport, SinkError, SummarySink};
pub use processor::{WorkoutAnalysis, WorkoutProcessor};
pub use source::{ReplaySource, SampleSource, SourceError};
