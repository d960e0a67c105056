pub mod analysis;
pub mod baseline;
pub mod command;
pub mod compute_metrics;
pub mod error;
pub mod init_tracing;
pub mod load_samples;
pub mod metric_row;
pub mod metric_table;
pub mod metrics;
pub mod render_charts;
pub mod report_format;
pub mod sample;
pub mod state;
pub mod throughput_unit;
pub mod total_work;
pub mod worker_count;

pub use analysis::Analysis;
pub use analysis::analyze;
pub use baseline::BaselinePolicy;
pub use compute_metrics::compute_metrics;
pub use error::MetricsError;
pub use metric_row::MetricRow;
pub use sample::Sample;
pub use throughput_unit::ThroughputUnit;
pub use total_work::TotalWork;
pub use worker_count::WorkerCount;
