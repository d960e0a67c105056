use crate::metric_row::MetricRow;
use crate::metrics::Metric;
use crate::metrics::table_columns;
use crate::throughput_unit::ThroughputUnit;
use itertools::Itertools;
use std::fmt;

const RULE_WIDTH: usize = 65;

/// Fixed-width console table of metric rows.
pub struct MetricTable<'a> {
    pub title: Option<&'a str>,
    pub rows: &'a [MetricRow],
    pub unit: ThroughputUnit,
}

impl<'a> MetricTable<'a> {
    pub fn new(rows: &'a [MetricRow], unit: ThroughputUnit) -> Self {
        Self {
            title: None,
            rows,
            unit,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

fn render_line<'m>(
    columns: &'m [Box<dyn Metric>],
    cell: impl Fn(&'m dyn Metric) -> String,
) -> String {
    columns
        .iter()
        .map(|column| {
            let width = column.width();
            format!("{:<width$}", cell(column.as_ref()))
        })
        .join(" | ")
}

impl fmt::Display for MetricTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = table_columns(self.unit);
        if let Some(title) = self.title {
            writeln!(f, "--- Metrics for {title} ---")?;
        }
        writeln!(f, "{}", render_line(&columns, |c| c.title().to_string()))?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for row in self.rows {
            writeln!(f, "{}", render_line(&columns, |c| c.value(row)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baseline::BaselinePolicy;
    use crate::compute_metrics::compute_metrics;
    use crate::sample::Sample;
    use crate::total_work::TotalWork;

    fn rows() -> Vec<MetricRow> {
        let samples = [(1, 0.025120), (16, 0.004436)]
            .into_iter()
            .map(|(w, t)| Sample::from_seconds(w, t).unwrap())
            .collect::<Vec<_>>();
        compute_metrics(
            TotalWork::from_grid(40_000, 600, 2.0).unwrap(),
            &samples,
            ThroughputUnit::MegaFlops,
            BaselinePolicy::Minimum,
        )
        .unwrap()
    }

    #[test]
    fn test_table_layout() {
        let rows = rows();
        let rendered = MetricTable::new(&rows, ThroughputUnit::MegaFlops).to_string();
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "Threads  | Time (s)   | MFLOP/s      | Speedup  | Efficiency (%) "
        );
        assert_eq!(lines[1], "-".repeat(65));
        assert_eq!(
            lines[2],
            "1        | 0.025120   | 1910.83      | 1.00     | 100.00         "
        );
        assert_eq!(
            lines[3],
            "16       | 0.004436   | 10820.56     | 5.66     | 35.39          "
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_title_and_unit_heading() {
        let rows = rows();
        let rendered = MetricTable::new(&rows, ThroughputUnit::GigaFlops)
            .with_title("Version 1 (Implicit Barrier)")
            .to_string();
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("--- Metrics for Version 1 (Implicit Barrier) ---")
        );
        assert!(lines.next().unwrap().contains("| GFLOP/s      |"));
    }
}
