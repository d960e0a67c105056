use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading samples or computing metrics.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("No samples were provided")]
    EmptySamples,

    #[error("Total work must be a positive, finite FLOP count (got {0})")]
    NonPositiveWork(f64),

    #[error("Elapsed time for {worker_count} workers must be positive and finite (got {seconds} s)")]
    NonPositiveTime { worker_count: usize, seconds: f64 },

    /// A time so close to zero that throughput or speedup overflows to infinity.
    #[error("Elapsed time for {worker_count} workers is too small to divide by (got {seconds} s)")]
    TimeTooSmall { worker_count: usize, seconds: f64 },

    #[error("Worker count must be at least 1")]
    ZeroWorkers,

    #[error("No baseline sample with {0} workers")]
    MissingBaseline(usize),

    /// Worker counts must be strictly increasing across the sequence.
    #[error("Worker counts must be strictly increasing ({previous} is followed by {next})")]
    UnorderedWorkers { previous: usize, next: usize },

    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("Input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetricsError {
    /// True for every error caused by bad numbers rather than a missing or unreadable file.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            MetricsError::EmptySamples
                | MetricsError::NonPositiveWork(_)
                | MetricsError::NonPositiveTime { .. }
                | MetricsError::TimeTooSmall { .. }
                | MetricsError::ZeroWorkers
                | MetricsError::MissingBaseline(_)
                | MetricsError::UnorderedWorkers { .. }
                | MetricsError::InvalidRow { .. }
        )
    }
}
