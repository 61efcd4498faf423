//! Manifest loading.
//!
//! The [`ManifestLoader`] reads the manifest once, validates it, and returns
//! the trusted projection.

use crate::{
    FileSource, InstallLayout, LoaderConfig, ManifestProperties, ManifestResult, ManifestSource,
};
use std::path::Path;

/// Loader for the application manifest.
///
/// # Example
///
/// ```no_run
/// use appmanifest_core::{LoaderConfig, ManifestLoader};
///
/// let loader = ManifestLoader::new(LoaderConfig::default());
/// let properties = loader.load_from_install_dir("/opt/chat/dist/main")?;
/// println!("{} by {}", properties.name(), properties.author());
/// # Ok::<(), appmanifest_core::ManifestError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    layout: InstallLayout,
}

impl ManifestLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            layout: InstallLayout::new(&config),
        }
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Load the manifest belonging to a module installed in `module_dir`.
    pub fn load_from_install_dir(
        &self,
        module_dir: impl AsRef<Path>,
    ) -> ManifestResult<ManifestProperties> {
        let path = self.layout.manifest_path(module_dir.as_ref())?;
        self.load(&FileSource::new(path))
    }

    /// Load the manifest from an arbitrary source.
    pub fn load(&self, source: &dyn ManifestSource) -> ManifestResult<ManifestProperties> {
        extract_trusted_properties(source)
    }
}

/// Read, parse and validate a manifest, returning only the allow-listed fields.
///
/// Fails without producing a partial value when the source cannot be read,
/// the document is not JSON, or a required field is missing or mistyped.
pub fn extract_trusted_properties(
    source: &dyn ManifestSource,
) -> ManifestResult<ManifestProperties> {
    let name = source.describe();
    tracing::debug!("Reading manifest from {}", name);

    let bytes = source.read()?;
    match ManifestProperties::from_slice(&bytes) {
        Ok(properties) => {
            tracing::debug!("Manifest {} validated for {}", name, properties.name());
            Ok(properties)
        }
        Err(err) => {
            tracing::debug!("Rejected manifest {}", name);
            Err(err)
        }
    }
}
