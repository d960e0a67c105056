use eyre::WrapErr;
use tracing::Level;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the report. Debug builds show file and line with an
/// uptime timer; release builds show an RFC 3339 timestamp.
pub fn init_tracing(level: Level) -> eyre::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr);
    #[cfg(debug_assertions)]
    let subscriber = builder
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .finish();
    #[cfg(not(debug_assertions))]
    let subscriber = builder
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("Failed to set tracing subscriber")
}
