use crate::analysis::Analysis;
use crate::analysis::analyze;
use crate::command::GlobalArgs;
use crate::command::input_args::InputArgs;
use crate::report_format::ReportFormat;
use crate::report_format::write_report;
use crate::state::builtin::builtin_experiments;
use crate::state::experiments::Experiment;
use crate::state::experiments::Experiments;
use clap::Args;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use color_eyre::eyre::bail;
use eye_config::persistable_state::PersistableState;
use std::io::Write;
use tracing::info;

#[derive(Args, Default)]
pub struct ReportCommand {
    /// Stored or built-in experiments to report
    pub names: Vec<String>,
    /// Report every built-in experiment
    #[clap(long)]
    pub builtin: bool,
    #[clap(flatten)]
    pub input: InputArgs,
    /// Output format
    #[clap(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,
}

impl ReportCommand {
    pub async fn handle(self, _global: GlobalArgs) -> Result<()> {
        let store = Experiments::load()
            .await
            .wrap_err("Failed to load experiments")?;
        let experiments = self.collect_experiments(&store)?;

        // CSV sources are read with blocking IO
        let input = self.input.clone();
        let analyses = tokio::task::spawn_blocking(move || analyze_all(&experiments, &input))
            .await
            .wrap_err("Metrics task failed")??;

        let mut stdout = std::io::stdout().lock();
        write_report(&mut stdout, self.format, &analyses)?;
        stdout.flush()?;
        Ok(())
    }

    /// Named experiments first, then the built-ins, then `--csv`.
    pub fn collect_experiments(&self, store: &Experiments) -> Result<Vec<Experiment>> {
        let mut experiments = Vec::new();
        for name in &self.names {
            experiments.push(store.get(name)?);
        }
        if self.builtin {
            experiments.extend(builtin_experiments());
        }
        experiments.extend(self.input.csv_experiment()?);
        if experiments.is_empty() {
            bail!("Nothing to report; name an experiment, or pass --csv or --builtin");
        }
        Ok(experiments)
    }
}

/// Computes every analysis, failing on the first bad experiment.
///
/// Nothing is printed until all of them succeed.
pub fn analyze_all(experiments: &[Experiment], input: &InputArgs) -> Result<Vec<Analysis>> {
    let baseline = input.baseline_policy()?;
    let mut analyses = Vec::with_capacity(experiments.len());
    for experiment in experiments {
        info!("Computing metrics for {}", experiment.name);
        let analysis = analyze(experiment, input.unit, baseline)
            .wrap_err_with(|| format!("Failed to analyze '{}'", experiment.name))?;
        analyses.push(analysis);
    }
    Ok(analyses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;
    use crate::state::experiments::SampleSource;
    use crate::throughput_unit::ThroughputUnit;
    use crate::total_work::TotalWork;

    fn inline(name: &str, samples: &[(usize, f64)]) -> Experiment {
        Experiment {
            name: name.to_string(),
            title: None,
            total_work: TotalWork::new(48e6).unwrap(),
            unit: ThroughputUnit::MegaFlops,
            source: SampleSource::Inline(
                samples
                    .iter()
                    .map(|&(w, s)| Sample::from_seconds(w, s).unwrap())
                    .collect(),
            ),
        }
    }

    #[test]
    fn test_collect_order() {
        let mut store = Experiments::default();
        store.add(inline("mine", &[(1, 1.0)])).unwrap();
        let report = ReportCommand {
            names: vec!["mine".to_string()],
            builtin: true,
            ..Default::default()
        };
        let names: Vec<_> = report
            .collect_experiments(&store)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names.len(), 4);
        assert_eq!(names[0], "mine");
        assert_eq!(names[1], "jacobi-v1-barrier");
    }

    #[test]
    fn test_nothing_to_report() {
        let report = ReportCommand::default();
        assert!(report.collect_experiments(&Experiments::default()).is_err());
    }

    #[test]
    fn test_unknown_name() {
        let report = ReportCommand {
            names: vec!["nope".to_string()],
            ..Default::default()
        };
        assert!(report.collect_experiments(&Experiments::default()).is_err());
    }

    #[test]
    fn test_one_bad_experiment_fails_the_whole_report() {
        let experiments = vec![
            inline("good", &[(1, 1.0), (2, 0.6)]),
            inline("bad", &[(2, 0.6), (1, 1.0)]),
        ];
        let input = InputArgs::default();
        let err = analyze_all(&experiments, &input).unwrap_err();
        assert!(err.to_string().contains("'bad'"));
    }

    #[test]
    fn test_baseline_applies_to_every_experiment() {
        let experiments = vec![
            inline("a", &[(1, 1.0), (2, 0.6)]),
            inline("b", &[(2, 0.6), (4, 0.4)]),
        ];
        let input = InputArgs {
            baseline: Some(2),
            ..Default::default()
        };
        let analyses = analyze_all(&experiments, &input).unwrap();
        assert_eq!(analyses[0].rows[1].speedup, 1.0);
        assert_eq!(analyses[1].rows[0].speedup, 1.0);
    }
}
