//! appmanifest-core - Guarded reader for the application package manifest
//!
//! This crate reads the application's `package.json` once at startup and
//! hands out a narrowed, strongly-typed view of it:
//! - [`ManifestProperties`] holds only `name`, `author`, `contributors`,
//!   `homepage` and `repository`
//! - [`Person`] and [`Repository`] model the two polymorphic fields
//! - [`ManifestSource`] abstracts where the raw bytes come from
//! - [`ManifestError`] reports every failure as a configuration error
//!
//! Fields outside the allow-list (build scripts, internal paths, ...) are
//! never copied into the returned value.
//!
//! # Example
//!
//! ```
//! use appmanifest_core::{BytesSource, extract_trusted_properties};
//!
//! let source = BytesSource::new(
//!     "inline",
//!     br#"{
//!         "name": "App",
//!         "author": "Jane Doe",
//!         "homepage": "https://app.example",
//!         "repository": "git+https://example.com/repo",
//!         "scripts": { "build": "make" }
//!     }"#.to_vec(),
//! );
//!
//! let properties = extract_trusted_properties(&source)?;
//! assert_eq!(properties.name(), "App");
//! assert!(properties.contributors().is_none());
//! # Ok::<(), appmanifest_core::ManifestError>(())
//! ```

mod config;
mod error;
mod layout;
mod loader;
mod person;
mod properties;
mod repository;
mod shape;
mod source;

pub use config::LoaderConfig;
pub use error::{ManifestError, ManifestResult, ValidationIssue};
pub use layout::InstallLayout;
pub use loader::{ManifestLoader, extract_trusted_properties};
pub use person::{Person, PersonRecord, is_valid_person};
pub use properties::{ManifestProperties, is_valid_manifest};
pub use repository::{Repository, RepositoryRecord};
pub use source::{BytesSource, FileSource, ManifestSource};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "package.json";

/// Default number of directories between the module and the manifest.
pub const DEFAULT_ASCEND_LEVELS: usize = 2;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        InstallLayout, LoaderConfig, ManifestError, ManifestLoader, ManifestProperties,
        ManifestResult, ManifestSource, Person, Repository, extract_trusted_properties,
    };
}
