use crate::analysis::analyze;
use crate::command::GlobalArgs;
use crate::command::input_args::InputArgs;
use crate::render_charts::ChartOptions;
use crate::render_charts::ChartPaths;
use crate::render_charts::render_charts;
use crate::state::experiments::Experiment;
use crate::state::experiments::Experiments;
use clap::Args;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use color_eyre::eyre::bail;
use eye_config::persistable_state::PersistableState;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;
use tracing::info;

#[derive(Args)]
pub struct PlotCommand {
    /// Stored or built-in experiment to chart
    #[clap(conflicts_with = "csv")]
    pub name: Option<String>,
    #[clap(flatten)]
    pub input: InputArgs,
    /// Directory to write the SVG files to
    #[clap(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// File name prefix; defaults to the experiment name
    #[clap(long)]
    pub stem: Option<String>,
    /// Caption prefix; defaults to the experiment title
    #[clap(long)]
    pub title: Option<String>,
}

impl PlotCommand {
    pub async fn handle(self, _global: GlobalArgs) -> Result<()> {
        let store = Experiments::load()
            .await
            .wrap_err("Failed to load experiments")?;
        let paths = self.plot(&store).await?;
        for path in [paths.time, paths.speedup, paths.efficiency] {
            println!("{}", path.display());
        }
        Ok(())
    }

    /// The experiment named on the command line, or the one described by `--csv`.
    pub fn resolve_experiment(&self, store: &Experiments) -> Result<Experiment> {
        match (&self.name, self.input.csv_experiment()?) {
            (Some(name), _) => store.get(name),
            (None, Some(experiment)) => Ok(experiment),
            (None, None) => bail!("Name an experiment or pass --csv to plot"),
        }
    }

    pub async fn plot(self, store: &Experiments) -> Result<ChartPaths> {
        let experiment = self.resolve_experiment(store)?;
        let baseline = self.input.baseline_policy()?;
        let unit = self.input.unit;

        let start = Instant::now();
        // Loading CSV samples and drawing are both blocking
        let paths = tokio::task::spawn_blocking(move || -> Result<ChartPaths> {
            let analysis = analyze(&experiment, unit, baseline)
                .wrap_err_with(|| format!("Failed to analyze '{}'", experiment.name))?;
            let options = ChartOptions {
                out_dir: self.out_dir,
                stem: self.stem.unwrap_or_else(|| experiment.name.clone()),
                title: self.title.unwrap_or(analysis.title),
            };
            render_charts(&analysis.rows, &options)
        })
        .await
        .wrap_err("Chart rendering task failed")??;
        info!(
            "Rendered charts in {}",
            humantime::format_duration(Duration::from_millis(start.elapsed().as_millis() as u64))
        );
        Ok(paths)
    }
}
