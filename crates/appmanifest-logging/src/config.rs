//! Logging configuration

use crate::{LogLevel, ParseLevelError};
use serde::{Deserialize, Serialize};

/// Settings for the console logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Initial log level
    #[serde(default = "default_level")]
    pub level: String,

    /// Text shown in brackets at the start of every line
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Emit ANSI colors
    #[serde(default = "default_styled")]
    pub styled: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_prefix() -> String {
    "appmanifest".to_string()
}

fn default_styled() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            prefix: default_prefix(),
            styled: default_styled(),
        }
    }
}

impl LoggingConfig {
    /// Parsed form of [`LoggingConfig::level`]
    pub fn log_level(&self) -> Result<LogLevel, ParseLevelError> {
        self.level.parse()
    }
}
