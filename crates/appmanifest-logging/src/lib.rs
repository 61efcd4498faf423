//! appmanifest-logging - Styled console logging
//!
//! This crate provides:
//! - [`log`] to write one stylized, prefixed line to the diagnostic console
//! - [`ConsoleLayer`] tracing layer that renders every event in the same style
//! - [`init_logging`] and [`ReloadHandle`] for installing and re-levelling it

mod config;
mod layer;
mod reload;

pub use config::LoggingConfig;
pub use layer::{
    CONSOLE_TARGET, ConsoleLayer, format_console_line, format_event_line, init_logging, log,
};
pub use reload::ReloadHandle;

use std::str::FromStr;
use thiserror::Error;

/// Log levels understood by the console logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

/// Unrecognized log level name
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ConsoleLayer, LogLevel, LoggingConfig, ReloadHandle, init_logging, log};
}
