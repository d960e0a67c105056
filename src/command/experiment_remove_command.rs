use crate::command::GlobalArgs;
use crate::state::experiments::Experiments;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use eye_config::persistable_state::PersistableState;

pub struct ExperimentRemoveCommand;

impl ExperimentRemoveCommand {
    pub async fn handle(self, _global: GlobalArgs, name: String) -> Result<()> {
        let mut experiments = Experiments::load().await?;
        // Built-ins are not stored, so they cannot be removed
        let removed = experiments.remove(&name)?;
        experiments
            .save()
            .await
            .wrap_err("Failed to save experiments")?;
        println!("Removed experiment '{}'", removed.name);
        Ok(())
    }
}
