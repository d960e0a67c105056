use clap::CommandFactory;
use clap::FromArgMatches;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use parallel_metrics::command::Command;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    // Install colored error reporting
    color_eyre::install().wrap_err("Failed to install color_eyre")?;
    // Parse CLI arguments
    let cmd = Command::command();
    let cmd = Command::from_arg_matches(&cmd.get_matches())?;

    // Logs go to stderr so stdout holds only the report
    let level = if cmd.global_args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    parallel_metrics::init_tracing::init_tracing(level)?;
    // Handle subcommand
    cmd.handle().await.wrap_err("Command execution failed")?;
    Ok(())
}
