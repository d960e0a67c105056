use crate::metric_row::MetricRow;
use crate::metrics::Metric;

/// Baseline time divided by this row's time
pub struct SpeedupMetric;

impl Metric for SpeedupMetric {
    fn title(&self) -> &'static str {
        "Speedup"
    }

    fn width(&self) -> usize {
        8
    }

    fn value(&self, row: &MetricRow) -> String {
        format!("{:.2}", row.speedup)
    }
}
