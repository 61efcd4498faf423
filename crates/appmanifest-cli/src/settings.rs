//! appmanifest.toml settings

use anyhow::{Context, Result};
use appmanifest_core::LoaderConfig;
use appmanifest_logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Load settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse settings from string
    // Inherent rather than `FromStr` so it can return `anyhow::Result`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// Apply command-line flags on top of the file settings
    pub fn apply_overrides(&mut self, log_level: Option<String>, plain: bool) {
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        if plain {
            self.logging.styled = false;
        }
    }
}
