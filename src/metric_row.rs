use crate::worker_count::WorkerCount;
use serde::Serialize;

/// Derived metrics for one sample. `throughput` is already scaled to the report's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRow {
    pub worker_count: WorkerCount,
    pub elapsed_seconds: f64,
    pub throughput: f64,
    pub speedup: f64,
    /// Percentage; above 100 when the input shows super-linear speedup.
    pub efficiency: f64,
}
