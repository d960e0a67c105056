use crate::metric_row::MetricRow;
use crate::metrics::Metric;

/// Speedup per worker, as a percentage
pub struct EfficiencyMetric;

impl Metric for EfficiencyMetric {
    fn title(&self) -> &'static str {
        "Efficiency (%)"
    }

    fn width(&self) -> usize {
        15
    }

    fn value(&self, row: &MetricRow) -> String {
        format!("{:.2}", row.efficiency)
    }
}
