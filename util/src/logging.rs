//! Tracing subscriber setup shared by the grader binaries.

use std::fs;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory that rolling log files are written to.
pub const LOG_DIR: &str = "logs";

/// Installs the global tracing subscriber.
///
/// Logs always go to a daily-rolling file under [`LOG_DIR`]; stdout output is
/// added when `log_to_stdout` is set. The filter comes from the `LOG_LEVEL`
/// environment variable, falling back to `default_level`.
///
/// The returned guard flushes the non-blocking file writer on drop and must be
/// held for the lifetime of the process.
pub fn init_logging(log_file: &str, default_level: &str, log_to_stdout: bool) -> WorkerGuard {
    fs::create_dir_all(LOG_DIR).ok();

    let file_appender = rolling::daily(LOG_DIR, log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        let stdout_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true);
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
