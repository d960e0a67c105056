use crate::baseline::BaselinePolicy;
use crate::compute_metrics::compute_metrics;
use crate::error::MetricsError;
use crate::load_samples::check_reported;
use crate::metric_row::MetricRow;
use crate::state::experiments::Experiment;
use crate::throughput_unit::ThroughputUnit;
use serde::Serialize;
use tracing::info;

/// Metrics of one experiment, ready to print or chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub experiment: String,
    pub title: String,
    pub unit: ThroughputUnit,
    pub rows: Vec<MetricRow>,
}

/// Resolves the experiment's samples and computes its rows.
///
/// `unit` overrides the experiment's own throughput unit when given.
pub fn analyze(
    experiment: &Experiment,
    unit: Option<ThroughputUnit>,
    baseline: BaselinePolicy,
) -> Result<Analysis, MetricsError> {
    let loaded = experiment.samples()?;
    let unit = unit.unwrap_or(experiment.unit);
    let rows = compute_metrics(experiment.total_work, &loaded.samples, unit, baseline)?;
    let mismatches = check_reported(&loaded.reported, &rows);
    if mismatches > 0 {
        info!(
            "{} reported values in '{}' were replaced by recomputed ones",
            mismatches, experiment.name
        );
    }
    Ok(Analysis {
        experiment: experiment.name.clone(),
        title: experiment.display_title().to_string(),
        unit,
        rows,
    })
}
