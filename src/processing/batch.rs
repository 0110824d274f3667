//! Batch workout processing with bounded fan-out.
//!
//! Bulk imports and regenerations process many workouts: chunks run with
//! bounded concurrency against the sample source, completed analyses
//! accumulate across chunks, and storage flushes happen in batches rather
//! than one write per workout.

use crate::processing::processor::{WorkoutAnalysis, WorkoutProcessor};
use crate::storage::config::{ProcessingSettings, UserProfile};
use crate::workout::Workout;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors from the persistence collaborator.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The record store rejected the batch
    #[error("failed to store analysis batch: {0}")]
    StoreFailed(String),
}

/// Receives completed analyses in batches.
#[async_trait]
pub trait SummarySink: Send + Sync {
    /// Store a batch of completed analyses.
    async fn store(&self, analyses: &[WorkoutAnalysis]) -> Result<(), SinkError>;
}

/// Outcome of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Workouts processed (every workout is, fetch failures degrade)
    pub processed: usize,
    /// Analyses successfully handed to the sink
    pub stored: usize,
    /// Analyses lost to sink failures
    pub store_failures: usize,
}

/// Processes workout batches and flushes results to a summary sink.
pub struct BatchProcessor {
    processor: WorkoutProcessor,
    sink: Arc<dyn SummarySink>,
    settings: ProcessingSettings,
}

impl BatchProcessor {
    /// Create a batch processor with default settings.
    pub fn new(processor: WorkoutProcessor, sink: Arc<dyn SummarySink>) -> Self {
        Self::with_settings(processor, sink, ProcessingSettings::default())
    }

    /// Create a batch processor with explicit chunk and flush sizes.
    pub fn with_settings(
        processor: WorkoutProcessor,
        sink: Arc<dyn SummarySink>,
        settings: ProcessingSettings,
    ) -> Self {
        Self {
            processor,
            sink,
            settings,
        }
    }

    /// Process every workout, flushing completed analyses in batches.
    ///
    /// Workouts run `chunk_size` at a time; a chunk's fetches fan out
    /// concurrently and join before the next chunk starts. Failures stay
    /// per-item: a workout with failing fetches yields degraded metrics, a
    /// failing flush drops only that batch. The final partial batch is
    /// flushed before returning.
    pub async fn process_all(&self, workouts: &[Workout], profile: &UserProfile) -> BatchReport {
        let chunk_size = self.settings.chunk_size.max(1);
        let flush_every = self.settings.flush_every.max(1);

        let mut report = BatchReport::default();
        let mut pending: Vec<WorkoutAnalysis> = Vec::with_capacity(flush_every);

        for chunk in workouts.chunks(chunk_size) {
            let analyses = futures::future::join_all(
                chunk
                    .iter()
                    .map(|workout| self.processor.process(workout, profile)),
            )
            .await;

            for analysis in analyses {
                pending.push(analysis);
                report.processed += 1;

                if pending.len() >= flush_every {
                    self.flush(&mut pending, &mut report).await;
                }
            }
        }

        self.flush(&mut pending, &mut report).await;

        tracing::info!(
            processed = report.processed,
            stored = report.stored,
            failures = report.store_failures,
            "batch processing finished"
        );
        report
    }

    async fn flush(&self, pending: &mut Vec<WorkoutAnalysis>, report: &mut BatchReport) {
        if pending.is_empty() {
            return;
        }

        match self.sink.store(pending).await {
            Ok(()) => report.stored += pending.len(),
            Err(error) => {
                tracing::warn!(batch = pending.len(), %error, "failed to store analysis batch");
                report.store_failures += pending.len();
            }
        }
        pending.clear();
    }
}
