use crate::metric_row::MetricRow;
use crate::metrics::Metric;

/// Number of workers the row was measured with
pub struct WorkerCountMetric;

impl Metric for WorkerCountMetric {
    fn title(&self) -> &'static str {
        "Threads"
    }

    fn width(&self) -> usize {
        8
    }

    fn value(&self, row: &MetricRow) -> String {
        row.worker_count.to_string()
    }
}
