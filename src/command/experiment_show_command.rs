use crate::command::GlobalArgs;
use crate::state::experiments::Experiments;
use color_eyre::eyre::Result;
use eye_config::persistable_state::PersistableState;

pub struct ExperimentShowCommand;

impl ExperimentShowCommand {
    pub async fn handle(self, _global: GlobalArgs, name: String) -> Result<()> {
        let experiments = Experiments::load().await?;
        // Stored experiments win over built-ins of the same name
        let experiment = experiments.get(&name)?;
        println!("{}", serde_json::to_string_pretty(&experiment)?);
        Ok(())
    }
}
