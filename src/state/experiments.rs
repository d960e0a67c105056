use crate::error::MetricsError;
use crate::load_samples::LoadedSamples;
use crate::load_samples::load_samples;
use crate::sample::Sample;
use crate::state::builtin::builtin_experiments;
use crate::throughput_unit::ThroughputUnit;
use crate::total_work::TotalWork;
use async_trait::async_trait;
use eye_config::persistable_state::PersistableState;
use eye_config::persistence_key::PersistenceKey;
use eyre::bail;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "parallel-metrics";
pub const EXPERIMENTS_FILE_NAME: &str = "experiments.json";

/// Named experiments persisted on disk
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Experiments {
    pub experiments: Vec<Experiment>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Experiment {
    /// Unique name, used on the command line
    pub name: String,
    /// Human readable title for table headings and chart captions
    #[serde(default)]
    pub title: Option<String>,
    /// FLOP count of one run
    pub total_work: TotalWork,
    #[serde(default)]
    pub unit: ThroughputUnit,
    pub source: SampleSource,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SampleSource {
    Inline(Vec<Sample>),
    Csv(PathBuf),
}

impl Experiment {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Resolves the sample source, reading the CSV file if there is one.
    pub fn samples(&self) -> Result<LoadedSamples, MetricsError> {
        match &self.source {
            SampleSource::Inline(samples) => Ok(LoadedSamples {
                samples: samples.clone(),
                reported: Vec::new(),
            }),
            SampleSource::Csv(path) => load_samples(path),
        }
    }
}

#[async_trait]
impl PersistableState for Experiments {
    async fn key() -> eyre::Result<PersistenceKey> {
        Ok(PersistenceKey::new(APP_DIR_NAME, EXPERIMENTS_FILE_NAME))
    }
}

impl Experiments {
    pub fn add(&mut self, experiment: Experiment) -> eyre::Result<()> {
        if self.experiments.iter().any(|e| e.name == experiment.name) {
            bail!("An experiment with the name '{}' already exists", experiment.name);
        }
        self.experiments.push(experiment);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> eyre::Result<Experiment> {
        match self.experiments.iter().position(|e| e.name == name) {
            Some(index) => Ok(self.experiments.remove(index)),
            None => bail!("Experiment '{}' does not exist", name),
        }
    }

    /// Looks up a stored experiment, falling back to the built-in ones.
    pub fn get(&self, name: &str) -> eyre::Result<Experiment> {
        self.experiments
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .or_else(|| builtin_experiments().into_iter().find(|e| e.name == name))
            .ok_or_else(|| eyre::eyre!("Experiment '{}' does not exist", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Experiment {
        Experiment {
            name: "laptop".to_string(),
            title: None,
            total_work: TotalWork::new(1e9).unwrap(),
            unit: ThroughputUnit::GigaFlops,
            source: SampleSource::Inline(vec![
                Sample::from_seconds(1, 2.0).unwrap(),
                Sample::from_seconds(4, 0.6).unwrap(),
            ]),
        }
    }

    #[tokio::test]
    async fn test_stored_under_app_config_dir() {
        let key = Experiments::key().await.unwrap();
        assert_eq!(key, PersistenceKey::new("parallel-metrics", "experiments.json"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut experiments = Experiments::default();
        experiments.add(example()).unwrap();
        let json = serde_json::to_string_pretty(&experiments).unwrap();
        let back: Experiments = serde_json::from_str(&json).unwrap();
        assert_eq!(back, experiments);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let mut experiments = Experiments::default();
        experiments.add(example()).unwrap();
        assert!(experiments.add(example()).is_err());
        assert_eq!(experiments.experiments.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut experiments = Experiments::default();
        experiments.add(example()).unwrap();
        assert_eq!(experiments.remove("laptop").unwrap().name, "laptop");
        assert!(experiments.remove("laptop").is_err());
    }

    #[test]
    fn test_get_falls_back_to_builtin() {
        let experiments = Experiments::default();
        let builtin = experiments.get("jacobi-v1-barrier").unwrap();
        assert_eq!(builtin.display_title(), "Version 1 (Implicit Barrier)");
        assert!(experiments.get("nope").is_err());
    }

    #[test]
    fn test_csv_source_reports_missing_file() {
        let experiment = Experiment {
            source: SampleSource::Csv(PathBuf::from("/definitely/not/here.csv")),
            ..example()
        };
        assert!(matches!(
            experiment.samples(),
            Err(MetricsError::MissingFile(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(example()).unwrap();
        assert_eq!(json["total_work"], 1e9);
        assert_eq!(json["unit"], "giga-flops");
        assert_eq!(json["source"]["inline"][1]["workers"], 4);
    }
}
