//! Loader configuration types

use crate::{DEFAULT_ASCEND_LEVELS, MANIFEST_FILE};
use serde::{Deserialize, Serialize};

/// Where the loader looks for the manifest relative to the module directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Manifest file name
    #[serde(default = "default_manifest_file_name")]
    pub manifest_file_name: String,

    /// Number of parent directories between the module directory and the manifest
    #[serde(default = "default_ascend_levels")]
    pub ascend_levels: usize,
}

fn default_manifest_file_name() -> String {
    MANIFEST_FILE.to_string()
}

fn default_ascend_levels() -> usize {
    DEFAULT_ASCEND_LEVELS
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            manifest_file_name: default_manifest_file_name(),
            ascend_levels: default_ascend_levels(),
        }
    }
}

impl LoaderConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest_file_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_file_name = name.into();
        self
    }

    pub fn with_ascend_levels(mut self, levels: usize) -> Self {
        self.ascend_levels = levels;
        self
    }
}
