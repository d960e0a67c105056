use super::experiment_add_command::ExperimentAddCommand;
use super::experiment_list_command::ExperimentListCommand;
use super::experiment_remove_command::ExperimentRemoveCommand;
use super::experiment_show_command::ExperimentShowCommand;
use crate::command::GlobalArgs;
use clap::Args;
use clap::Subcommand;
use color_eyre::eyre::Result;

#[derive(Args)]
pub struct ExperimentCommand {
    #[clap(subcommand)]
    pub cmd: ExperimentCommandInner,
}

#[derive(Subcommand)]
pub enum ExperimentCommandInner {
    /// Store a new experiment
    Add(ExperimentAddCommand),
    /// List stored and built-in experiments
    List,
    /// Show one experiment
    Show {
        /// Name of the experiment
        name: String,
    },
    /// Delete a stored experiment
    Remove {
        /// Name of the experiment
        name: String,
    },
}

impl ExperimentCommand {
    pub async fn handle(self, global: GlobalArgs) -> Result<()> {
        match self.cmd {
            ExperimentCommandInner::Add(cmd) => cmd.handle(global).await,
            ExperimentCommandInner::List => ExperimentListCommand.handle(global).await,
            ExperimentCommandInner::Show { name } => {
                ExperimentShowCommand.handle(global, name).await
            }
            ExperimentCommandInner::Remove { name } => {
                ExperimentRemoveCommand.handle(global, name).await
            }
        }
    }
}
