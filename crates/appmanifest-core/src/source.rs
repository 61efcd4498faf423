//! Providers of raw manifest bytes

use crate::{ManifestError, ManifestResult};
use std::path::{Path, PathBuf};

/// Supplies the raw bytes of a manifest document.
pub trait ManifestSource {
    /// Short description used in error messages and logs
    fn describe(&self) -> String;

    /// Read the complete manifest
    fn read(&self) -> ManifestResult<Vec<u8>>;
}

/// Manifest stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> ManifestResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|cause| ManifestError::Read {
            source_name: self.describe(),
            cause,
        })
    }
}

/// Manifest held in memory, e.g. embedded at compile time.
#[derive(Debug, Clone)]
pub struct BytesSource {
    name: String,
    bytes: Vec<u8>,
}

impl BytesSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl ManifestSource for BytesSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> ManifestResult<Vec<u8>> {
        Ok(self.bytes.clone())
    }
}
