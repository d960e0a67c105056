use crate::baseline::BaselinePolicy;
use crate::state::experiments::Experiment;
use crate::state::experiments::SampleSource;
use crate::throughput_unit::ThroughputUnit;
use crate::total_work::TotalWork;
use crate::worker_count::WorkerCount;
use clap::Args;
use eyre::Result;
use std::path::PathBuf;

/// Options shared by commands that compute metrics.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// CSV file with Threads and Elapsed_Time columns
    #[clap(long, requires = "work")]
    pub csv: Option<PathBuf>,
    /// Floating-point operations of one run, for use with --csv
    #[clap(long)]
    pub work: Option<f64>,
    /// Throughput unit; defaults to the experiment's own unit
    #[clap(long, value_enum)]
    pub unit: Option<ThroughputUnit>,
    /// Worker count of the baseline sample; defaults to the smallest one present
    #[clap(long)]
    pub baseline: Option<usize>,
}

impl InputArgs {
    pub fn baseline_policy(&self) -> Result<BaselinePolicy> {
        let workers = self.baseline.map(WorkerCount::new).transpose()?;
        Ok(BaselinePolicy::from_option(workers))
    }

    /// The experiment described by `--csv` and `--work`, if given.
    pub fn csv_experiment(&self) -> Result<Option<Experiment>> {
        let Some(path) = &self.csv else {
            return Ok(None);
        };
        let Some(work) = self.work else {
            eyre::bail!("--work is required with --csv");
        };
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Some(Experiment {
            name,
            title: None,
            total_work: TotalWork::new(work)?,
            unit: self.unit.unwrap_or_default(),
            source: SampleSource::Csv(path.clone()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_experiment_named_after_file() {
        let args = InputArgs {
            csv: Some(PathBuf::from("results/jacobi_results.csv")),
            work: Some(48e6),
            ..Default::default()
        };
        let experiment = args.csv_experiment().unwrap().unwrap();
        assert_eq!(experiment.name, "jacobi_results");
        assert_eq!(experiment.unit, ThroughputUnit::MegaFlops);
    }

    #[test]
    fn test_zero_baseline_is_rejected() {
        let args = InputArgs {
            baseline: Some(0),
            ..Default::default()
        };
        assert!(args.baseline_policy().is_err());
    }

    #[test]
    fn test_negative_work_is_rejected() {
        let args = InputArgs {
            csv: Some(PathBuf::from("a.csv")),
            work: Some(-1.0),
            ..Default::default()
        };
        assert!(args.csv_experiment().is_err());
    }
}
