use clap::Args;
use clap::Parser;
use clap::Subcommand;
use eyre::Result;

use super::experiment_command::ExperimentCommand;
use super::plot_command::PlotCommand;
use super::report_command::ReportCommand;

#[derive(Parser)]
#[clap(name = "parallel-metrics", version)]
pub struct Command {
    #[clap(flatten)]
    pub global_args: GlobalArgs,
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print throughput, speedup and efficiency tables
    Report(ReportCommand),
    /// Render time, speedup and efficiency charts as SVG
    Plot(PlotCommand),
    /// Manage stored experiments
    Experiment(ExperimentCommand),
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[clap(long, global = true)]
    pub debug: bool,
}

impl Command {
    pub async fn handle(self) -> Result<()> {
        match self.command {
            Commands::Report(cmd) => cmd.handle(self.global_args).await,
            Commands::Plot(cmd) => cmd.handle(self.global_args).await,
            Commands::Experiment(cmd) => cmd.handle(self.global_args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cmd = Command::try_parse_from([
            "parallel-metrics",
            "report",
            "--builtin",
            "--debug",
        ])
        .unwrap();
        assert!(cmd.global_args.debug);
        assert!(matches!(cmd.command, Commands::Report(ref report) if report.builtin));
    }
}
