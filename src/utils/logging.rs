//! Logging initialization helpers
//!
//! Thin wrapper around `tracing_subscriber` for embedding applications that
//! do not configure their own subscriber.

use tracing::Level;

/// Log verbosity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

/// Initialize the global tracing subscriber
///
/// Intended for binaries and examples; library consumers usually install
/// their own subscriber. Calling this twice panics inside
/// `tracing_subscriber`, so it is not exposed through the crate root.
pub fn init_logger(log_level: Option<LogLevel>) {
    let level = log_level.unwrap_or(LogLevel::Info);

    tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_thread_ids(false)
        .init();
}
