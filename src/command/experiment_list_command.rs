use crate::command::GlobalArgs;
use crate::state::builtin::builtin_experiments;
use crate::state::experiments::Experiment;
use crate::state::experiments::Experiments;
use crate::state::experiments::SampleSource;
use color_eyre::eyre::Result;
use eye_config::persistable_state::PersistableState;

pub struct ExperimentListCommand;

fn describe(experiment: &Experiment) -> String {
    let source = match &experiment.source {
        SampleSource::Inline(samples) => format!("{} samples", samples.len()),
        SampleSource::Csv(path) => path.display().to_string(),
    };
    format!(
        "{:<28} {:<32} {}",
        experiment.name,
        experiment.display_title(),
        source
    )
}

impl ExperimentListCommand {
    pub async fn handle(self, _global: GlobalArgs) -> Result<()> {
        let experiments = Experiments::load().await?;
        println!("Stored in {}:", Experiments::key().await?.file_path()?.display());
        if experiments.experiments.is_empty() {
            println!("  (none)");
        }
        for experiment in &experiments.experiments {
            println!("  {}", describe(experiment));
        }
        println!("Built-in:");
        for experiment in &builtin_experiments() {
            println!("  {}", describe(experiment));
        }
        Ok(())
    }
}
