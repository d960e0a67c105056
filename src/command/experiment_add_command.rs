use crate::baseline::BaselinePolicy;
use crate::command::GlobalArgs;
use crate::compute_metrics::compute_metrics;
use crate::sample::Sample;
use crate::state::experiments::Experiment;
use crate::state::experiments::Experiments;
use crate::state::experiments::SampleSource;
use crate::throughput_unit::ThroughputUnit;
use crate::total_work::TotalWork;
use clap::Args;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use eye_config::persistable_state::PersistableState;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct ExperimentAddCommand {
    /// Unique name of the experiment
    pub name: String,
    /// Floating-point operations of one run
    #[clap(long)]
    pub work: f64,
    /// Throughput unit used when reporting
    #[clap(long, value_enum, default_value_t = ThroughputUnit::MegaFlops)]
    pub unit: ThroughputUnit,
    /// Title for table headings and chart captions
    #[clap(long)]
    pub title: Option<String>,
    /// Measured sample as WORKERS=SECONDS; repeat in increasing worker order
    #[clap(long = "sample", required_unless_present = "csv", conflicts_with = "csv")]
    pub samples: Vec<Sample>,
    /// CSV file to read samples from each time the experiment is used
    #[clap(long)]
    pub csv: Option<PathBuf>,
}

impl ExperimentAddCommand {
    pub async fn handle(self, _global: GlobalArgs) -> Result<()> {
        // Load existing or default experiments
        let mut experiments = Experiments::load()
            .await
            .wrap_err("Failed to load experiments")?;

        // Build and check the new experiment before touching the store
        let experiment = self.into_experiment().await?;
        experiments.add(experiment)?;

        // Save experiments
        experiments
            .save()
            .await
            .wrap_err("Failed to save experiments")?;

        // Show location
        let path = Experiments::key().await?.file_path()?;
        info!("Experiments saved to {}", path.display());
        Ok(())
    }

    /// The experiment described by the arguments.
    ///
    /// A CSV path is resolved to an absolute one so later runs work from any directory.
    /// Inline samples are run through the calculator once so bad numbers fail here.
    pub async fn into_experiment(self) -> Result<Experiment> {
        let total_work = TotalWork::new(self.work)?;
        let source = match self.csv {
            Some(csv) => {
                let csv = tokio::fs::canonicalize(&csv)
                    .await
                    .wrap_err_with(|| format!("Failed to resolve {}", csv.display()))?;
                SampleSource::Csv(csv)
            }
            None => {
                compute_metrics(total_work, &self.samples, self.unit, BaselinePolicy::Minimum)
                    .wrap_err("Invalid samples")?;
                SampleSource::Inline(self.samples)
            }
        };
        Ok(Experiment {
            name: self.name,
            title: self.title,
            total_work,
            unit: self.unit,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricsError;

    fn add_command(samples: &[&str]) -> ExperimentAddCommand {
        ExperimentAddCommand {
            name: "laptop".to_string(),
            work: 48e6,
            unit: ThroughputUnit::MegaFlops,
            title: None,
            samples: samples.iter().map(|s| s.parse().unwrap()).collect(),
            csv: None,
        }
    }

    #[tokio::test]
    async fn test_inline_samples_are_stored() {
        let experiment = add_command(&["1=0.02512", "16=0.004436"])
            .into_experiment()
            .await
            .unwrap();
        assert_eq!(experiment.name, "laptop");
        match experiment.source {
            SampleSource::Inline(samples) => assert_eq!(samples.len(), 2),
            SampleSource::Csv(_) => panic!("expected inline samples"),
        }
    }

    #[tokio::test]
    async fn test_unordered_inline_samples_are_rejected() {
        let err = add_command(&["4=1.0", "2=0.5"])
            .into_experiment()
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MetricsError>(),
            Some(MetricsError::UnorderedWorkers {
                previous: 4,
                next: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_non_positive_work_is_rejected() {
        let mut command = add_command(&["1=1.0"]);
        command.work = 0.0;
        assert!(command.into_experiment().await.is_err());
    }

    #[tokio::test]
    async fn test_csv_path_is_made_absolute() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut command = add_command(&[]);
        command.csv = Some(file.path().to_path_buf());
        let experiment = command.into_experiment().await.unwrap();
        match experiment.source {
            SampleSource::Csv(path) => assert!(path.is_absolute()),
            SampleSource::Inline(_) => panic!("expected a CSV source"),
        }
    }

    #[tokio::test]
    async fn test_missing_csv_is_rejected() {
        let mut command = add_command(&[]);
        command.csv = Some(PathBuf::from("/definitely/not/here.csv"));
        assert!(command.into_experiment().await.is_err());
    }
}
