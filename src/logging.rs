use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Name of the log file written to the system temp directory.
pub const LOG_FILE: &str = "mazegen.log";

/// Level to log at: `DEBUG` when the `DEBUG` environment variable is `1`, `INFO` otherwise.
pub fn log_level() -> Level {
    match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    }
}

/// Installs a global subscriber writing to [`LOG_FILE`], keeping stdout free for the maze.
///
/// The returned guard flushes buffered lines when dropped, so keep it alive until exit.
pub fn init() -> WorkerGuard {
    let appender = tracing_appender::rolling::never(std::env::temp_dir(), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    // A subscriber may already be installed (e.g. by a test harness), keep that one
    if let Err(err) = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(log_level())
        .try_init()
    {
        eprintln!("Logging to {} disabled: {}", LOG_FILE, err);
    }
    guard
}
