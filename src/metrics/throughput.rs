use crate::metric_row::MetricRow;
use crate::metrics::Metric;
use crate::throughput_unit::ThroughputUnit;

/// Floating-point throughput, titled by the unit it was scaled to
pub struct ThroughputMetric {
    pub unit: ThroughputUnit,
}

impl Metric for ThroughputMetric {
    fn title(&self) -> &'static str {
        self.unit.label()
    }

    fn width(&self) -> usize {
        12
    }

    fn value(&self, row: &MetricRow) -> String {
        format!("{:.2}", row.throughput)
    }
}
