//! Diagnostic output.
//!
//! Events are emitted with `tracing` and written to stdout by a
//! `tracing-subscriber` fmt layer. The verbosity names follow the classic
//! `CRITICAL`..`NOTSET` scale; `NOTSET` means nothing is filtered out.

use std::{fmt, str::FromStr};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
    #[default]
    NotSet,
}

impl LogLevel {
    /// Every accepted spelling: upper case, lower case and single letters.
    pub const NAMES: &'static [&'static str] = &[
        "CRITICAL", "ERROR", "WARNING", "INFO", "DEBUG", "NOTSET", "critical", "error",
        "warning", "info", "debug", "notset", "C", "E", "W", "I", "D", "N", "c", "e", "w", "i",
        "d", "n",
    ];

    /// `tracing` has no level above `ERROR`, so critical events are errors
    /// carrying a `critical` field.
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Critical | LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::NotSet => LevelFilter::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" | "critical" | "C" | "c" => Ok(LogLevel::Critical),
            "ERROR" | "error" | "E" | "e" => Ok(LogLevel::Error),
            "WARNING" | "warning" | "W" | "w" => Ok(LogLevel::Warning),
            "INFO" | "info" | "I" | "i" => Ok(LogLevel::Info),
            "DEBUG" | "debug" | "D" | "d" => Ok(LogLevel::Debug),
            "NOTSET" | "notset" | "N" | "n" => Ok(LogLevel::NotSet),
            other => Err(format!(
                "invalid log level '{}' (choose from {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::NotSet => "NOTSET",
        };
        f.write_str(name)
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.filter().into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(true)
        .try_init();
}
