mod efficiency;
mod elapsed_time;
mod metric;
mod speedup;
mod throughput;
mod worker_count;

pub use efficiency::EfficiencyMetric;
pub use elapsed_time::ElapsedTimeMetric;
pub use metric::Metric;
pub use speedup::SpeedupMetric;
pub use throughput::ThroughputMetric;
pub use worker_count::WorkerCountMetric;

use crate::throughput_unit::ThroughputUnit;

/// The columns of a metrics table, left to right.
pub fn table_columns(unit: ThroughputUnit) -> Vec<Box<dyn Metric>> {
    vec![
        Box::new(WorkerCountMetric),
        Box::new(ElapsedTimeMetric),
        Box::new(ThroughputMetric { unit }),
        Box::new(SpeedupMetric),
        Box::new(EfficiencyMetric),
    ]
}
