use crate::error::MetricsError;
use crate::worker_count::WorkerCount;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;
use uom::si::f64::Time;
use uom::si::time::second;

/// One measured run: how many workers, and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "SampleRecord", try_from = "SampleRecord")]
pub struct Sample {
    pub worker_count: WorkerCount,
    pub elapsed: Time,
}

impl Sample {
    pub fn new(worker_count: WorkerCount, elapsed: Time) -> Self {
        Self {
            worker_count,
            elapsed,
        }
    }

    /// Builds a sample from raw numbers, rejecting zero workers and non-positive times.
    pub fn from_seconds(worker_count: usize, seconds: f64) -> Result<Self, MetricsError> {
        let worker_count = WorkerCount::new(worker_count)?;
        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(MetricsError::NonPositiveTime {
                worker_count: worker_count.get(),
                seconds,
            });
        }
        Ok(Self::new(worker_count, Time::new::<second>(seconds)))
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.get::<second>()
    }
}

/// On-disk shape of a [`Sample`].
#[derive(Serialize, Deserialize)]
struct SampleRecord {
    workers: usize,
    seconds: f64,
}

impl From<Sample> for SampleRecord {
    fn from(sample: Sample) -> Self {
        SampleRecord {
            workers: sample.worker_count.get(),
            seconds: sample.seconds(),
        }
    }
}

impl TryFrom<SampleRecord> for Sample {
    type Error = MetricsError;

    fn try_from(record: SampleRecord) -> Result<Self, Self::Error> {
        Sample::from_seconds(record.workers, record.seconds)
    }
}

/// Parses `WORKERS=SECONDS`, e.g. `16=0.004436`.
impl FromStr for Sample {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (workers, seconds) = s
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("Expected WORKERS=SECONDS, got '{s}'"))?;
        let workers: usize = workers
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("Invalid worker count '{}': {e}", workers.trim()))?;
        let seconds: f64 = seconds
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("Invalid elapsed time '{}': {e}", seconds.trim()))?;
        Ok(Sample::from_seconds(workers, seconds)?)
    }
}
