//! Logging Infrastructure
//!
//! Structured logging for report runs, to stdout or to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::config::ReportConfig;

/// Initialize the logger from a report configuration
pub fn init_logger(config: &ReportConfig) -> bool {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. Returns `false` when a
/// global subscriber was already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Missing directories fall back to stdout
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "sales-report");
            return subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .is_ok();
        }
    }

    subscriber.try_init().is_ok()
}
