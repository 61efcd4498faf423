//! Manifest location relative to the install tree

use crate::{LoaderConfig, ManifestError, ManifestResult};
use std::path::{Path, PathBuf};

/// Resolves the manifest path from the directory a module is installed in.
///
/// With the default configuration a module at `<root>/dist/main` finds its
/// manifest at `<root>/package.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    file_name: String,
    ascend_levels: usize,
}

impl InstallLayout {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            file_name: config.manifest_file_name.clone(),
            ascend_levels: config.ascend_levels,
        }
    }

    /// Path of the manifest for a module living in `module_dir`.
    pub fn manifest_path(&self, module_dir: &Path) -> ManifestResult<PathBuf> {
        if self.file_name.is_empty() {
            return Err(ManifestError::Layout(
                "manifest file name is empty".to_string(),
            ));
        }

        let mut dir = module_dir;
        for _ in 0..self.ascend_levels {
            dir = dir.parent().ok_or_else(|| {
                ManifestError::Layout(format!(
                    "{} has fewer than {} parent directories",
                    module_dir.display(),
                    self.ascend_levels
                ))
            })?;
        }

        Ok(dir.join(&self.file_name))
    }
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self::new(&LoaderConfig::default())
    }
}
