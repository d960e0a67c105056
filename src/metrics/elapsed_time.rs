use crate::metric_row::MetricRow;
use crate::metrics::Metric;

/// Wall-clock time of the run, in seconds
pub struct ElapsedTimeMetric;

impl Metric for ElapsedTimeMetric {
    fn title(&self) -> &'static str {
        "Time (s)"
    }

    fn width(&self) -> usize {
        10
    }

    fn value(&self, row: &MetricRow) -> String {
        format!("{:.6}", row.elapsed_seconds)
    }
}
