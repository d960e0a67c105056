use crate::baseline::BaselinePolicy;
use crate::error::MetricsError;
use crate::metric_row::MetricRow;
use crate::sample::Sample;
use crate::throughput_unit::ThroughputUnit;
use crate::total_work::TotalWork;
use itertools::Itertools;
use tracing::debug;

/// Computes throughput, speedup and efficiency for every sample, in input order.
///
/// Fails without producing any row if the samples are empty, out of order, contain a
/// non-positive time, or lack the baseline chosen by `baseline`. A time small enough to
/// overflow throughput, speedup or efficiency is rejected too. Slow or non-monotonic
/// timings are reported as measured.
pub fn compute_metrics(
    total_work: TotalWork,
    samples: &[Sample],
    unit: ThroughputUnit,
    baseline: BaselinePolicy,
) -> Result<Vec<MetricRow>, MetricsError> {
    validate_samples(samples)?;
    let baseline = baseline.find(samples)?;
    let baseline_seconds = baseline.seconds();
    debug!(
        "Baseline is {} workers at {} s",
        baseline.worker_count, baseline_seconds
    );

    samples
        .iter()
        .map(|sample| {
            let seconds = sample.seconds();
            let speedup = baseline_seconds / seconds;
            let row = MetricRow {
                worker_count: sample.worker_count,
                elapsed_seconds: seconds,
                throughput: total_work.flops() / seconds / unit.divisor(),
                speedup,
                efficiency: speedup / sample.worker_count.as_f64() * 100.0,
            };
            if !(row.throughput.is_finite() && row.efficiency.is_finite()) {
                return Err(MetricsError::TimeTooSmall {
                    worker_count: sample.worker_count.get(),
                    seconds,
                });
            }
            Ok(row)
        })
        .collect()
}

fn validate_samples(samples: &[Sample]) -> Result<(), MetricsError> {
    if samples.is_empty() {
        return Err(MetricsError::EmptySamples);
    }
    for sample in samples {
        let seconds = sample.seconds();
        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(MetricsError::NonPositiveTime {
                worker_count: sample.worker_count.get(),
                seconds,
            });
        }
    }
    if let Some((previous, next)) = samples
        .iter()
        .map(|s| s.worker_count)
        .tuple_windows()
        .find(|(previous, next)| next <= previous)
    {
        return Err(MetricsError::UnorderedWorkers {
            previous: previous.get(),
            next: next.get(),
        });
    }
    Ok(())
}
