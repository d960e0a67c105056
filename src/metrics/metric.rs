use crate::metric_row::MetricRow;

/// One column of the metrics table.
pub trait Metric {
    /// Column heading.
    fn title(&self) -> &'static str;
    /// Column width in characters; values are left-aligned and padded to it.
    fn width(&self) -> usize;
    /// Formats this column's value for one row.
    fn value(&self, row: &MetricRow) -> String;
}
