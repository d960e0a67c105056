use crate::error::MetricsError;
use crate::metric_row::MetricRow;
use crate::sample::Sample;
use crate::worker_count::WorkerCount;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use tracing::warn;

/// Relative difference tolerated between a reported column and the recomputed value.
pub const REPORTED_TOLERANCE: f64 = 0.01;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Threads", alias = "threads", alias = "Workers", alias = "workers")]
    threads: usize,
    #[serde(
        rename = "Elapsed_Time",
        alias = "elapsed_time",
        alias = "Time",
        alias = "time",
        alias = "elapsed"
    )]
    elapsed_time: f64,
    #[serde(rename = "Speedup", alias = "speedup", default)]
    speedup: Option<f64>,
    #[serde(rename = "Efficiency", alias = "efficiency", default)]
    efficiency: Option<f64>,
}

/// Speedup and efficiency as written in the input table, kept only for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reported {
    pub worker_count: WorkerCount,
    pub speedup: Option<f64>,
    pub efficiency: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSamples {
    pub samples: Vec<Sample>,
    pub reported: Vec<Reported>,
}

/// Loads samples from a CSV file with a `Threads,Elapsed_Time[,Speedup,Efficiency]` header.
pub fn load_samples(path: &Path) -> Result<LoadedSamples, MetricsError> {
    debug!("Reading samples from {}", path.display());
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MetricsError::MissingFile(path.to_path_buf()),
        _ => MetricsError::Io(e),
    })?;
    read_samples(file)
}

/// Reads samples from any CSV source; see [`load_samples`].
pub fn read_samples(reader: impl Read) -> Result<LoadedSamples, MetricsError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut loaded = LoadedSamples {
        samples: Vec::new(),
        reported: Vec::new(),
    };
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: CsvRow = record.deserialize(Some(&headers))?;
        let sample = Sample::from_seconds(row.threads, row.elapsed_time).map_err(|e| {
            MetricsError::InvalidRow {
                line,
                reason: e.to_string(),
            }
        })?;
        loaded.reported.push(Reported {
            worker_count: sample.worker_count,
            speedup: row.speedup,
            efficiency: row.efficiency,
        });
        loaded.samples.push(sample);
    }
    debug!("Read {} samples", loaded.samples.len());
    Ok(loaded)
}

fn disagrees(reported: f64, computed: f64) -> bool {
    (reported - computed).abs() > REPORTED_TOLERANCE * computed.abs().max(f64::MIN_POSITIVE)
}

/// Warns about every reported speedup or efficiency that the recomputed rows disagree with.
///
/// Returns the number of disagreements. The recomputed values always win.
pub fn check_reported(reported: &[Reported], rows: &[MetricRow]) -> usize {
    let mut mismatches = 0;
    for (reported, row) in reported.iter().zip(rows) {
        if let Some(speedup) = reported.speedup.filter(|&s| disagrees(s, row.speedup)) {
            warn!(
                "Input reports speedup {speedup} for {} workers, recomputed {:.4}",
                row.worker_count, row.speedup
            );
            mismatches += 1;
        }
        if let Some(efficiency) = reported
            .efficiency
            .filter(|&e| disagrees(e, row.efficiency))
        {
            warn!(
                "Input reports efficiency {efficiency} for {} workers, recomputed {:.2}",
                row.worker_count, row.efficiency
            );
            mismatches += 1;
        }
    }
    mismatches
}
