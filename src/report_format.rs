use crate::analysis::Analysis;
use crate::metric_table::MetricTable;
use clap::ValueEnum;
use eyre::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Aligned console table per experiment
    #[default]
    Table,
    /// Comma separated; a single experiment can be read back as input
    Csv,
    /// Pretty-printed JSON array of experiments
    Json,
}

#[derive(Serialize)]
struct CsvOut<'a> {
    #[serde(rename = "Experiment")]
    experiment: &'a str,
    #[serde(rename = "Threads")]
    threads: usize,
    #[serde(rename = "Elapsed_Time")]
    elapsed_time: f64,
    #[serde(rename = "Throughput")]
    throughput: f64,
    #[serde(rename = "Speedup")]
    speedup: f64,
    #[serde(rename = "Efficiency")]
    efficiency: f64,
}

/// Writes every analysis to `out` in the given format.
pub fn write_report(
    out: &mut impl Write,
    format: ReportFormat,
    analyses: &[Analysis],
) -> Result<()> {
    match format {
        ReportFormat::Table => {
            for analysis in analyses {
                let table =
                    MetricTable::new(&analysis.rows, analysis.unit).with_title(&analysis.title);
                writeln!(out, "{table}")?;
            }
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for analysis in analyses {
                for row in &analysis.rows {
                    writer.serialize(CsvOut {
                        experiment: &analysis.experiment,
                        threads: row.worker_count.get(),
                        elapsed_time: row.elapsed_seconds,
                        throughput: row.throughput,
                        speedup: row.speedup,
                        efficiency: row.efficiency,
                    })?;
                }
            }
            writer.flush()?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, analyses)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::baseline::BaselinePolicy;
    use crate::load_samples::read_samples;
    use crate::state::builtin::builtin_experiments;

    fn analyses(count: usize) -> Vec<Analysis> {
        builtin_experiments()
            .iter()
            .take(count)
            .map(|e| analyze(e, None, BaselinePolicy::Minimum).unwrap())
            .collect()
    }

    fn render(format: ReportFormat, count: usize) -> String {
        let mut out = Vec::new();
        write_report(&mut out, format, &analyses(count)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_per_experiment() {
        let table = render(ReportFormat::Table, 3);
        assert_eq!(table.matches("--- Metrics for ").count(), 3);
        assert!(table.starts_with("--- Metrics for Version 1 (Implicit Barrier) ---\n"));
        assert!(table.contains("--- Metrics for Version 2 (Dynamic + Nowait) ---"));
    }

    #[test]
    fn test_single_experiment_csv_is_loadable() {
        let csv = render(ReportFormat::Csv, 1);
        assert!(
            csv.starts_with("Experiment,Threads,Elapsed_Time,Throughput,Speedup,Efficiency\n")
        );
        assert!(csv.contains("\njacobi-v1-barrier,16,0.004436,"));
        let loaded = read_samples(csv.as_bytes()).unwrap();
        assert_eq!(loaded.samples.len(), 5);
        assert_eq!(loaded.reported[0].efficiency, Some(100.0));
    }

    #[test]
    fn test_json_lists_experiments() {
        let json = render(ReportFormat::Json, 2);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["experiment"], "jacobi-v1-barrier");
        assert_eq!(value[0]["unit"], "mega-flops");
        assert_eq!(value[0]["rows"][0]["worker_count"], 1);
        assert_eq!(value[0]["rows"][0]["speedup"], 1.0);
    }
}
