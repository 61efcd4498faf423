//! Error types for manifest loading

use thiserror::Error;

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Configuration validation error raised while building the trusted projection.
///
/// Every variant means the projection could not be constructed. Callers are
/// expected to abort initialization rather than retry: the condition points
/// at a packaging defect, not a transient fault.
///
/// The underlying cause is part of the message and is not exposed as `source`.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest could not be read
    #[error("failed to read manifest {source_name}: {cause}")]
    Read {
        source_name: String,
        cause: std::io::Error,
    },

    /// The manifest is not a valid JSON document
    #[error("manifest is not valid JSON: {0}")]
    Parse(serde_json::Error),

    /// The manifest parsed but failed structural validation
    #[error("manifest missing required properties or has invalid types: {0}")]
    Invalid(ValidationIssue),

    /// The manifest location could not be resolved
    #[error("cannot locate manifest: {0}")]
    Layout(String),
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        ManifestError::Parse(err)
    }
}

impl From<ValidationIssue> for ManifestError {
    fn from(issue: ValidationIssue) -> Self {
        ManifestError::Invalid(issue)
    }
}

impl ManifestError {
    /// Process exit code for this error (sysexits.h conventions)
    pub fn exit_code(&self) -> i32 {
        match self {
            ManifestError::Read { .. } | ManifestError::Layout(_) => 66,
            ManifestError::Parse(_) => 65,
            ManifestError::Invalid(_) => 78,
        }
    }
}

/// The first structural rule a manifest candidate violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The value at `field` must be a record but is something else
    #[error("`{field}` must be a record, found {found}")]
    NotARecord { field: String, found: &'static str },

    /// A required field is absent
    #[error("`{field}` is required")]
    Missing { field: String },

    /// A field is present with the wrong kind of value
    #[error("`{field}` must be {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ValidationIssue {
    /// Path of the offending field (e.g. `contributors[1].email`)
    pub fn field(&self) -> &str {
        match self {
            ValidationIssue::NotARecord { field, .. }
            | ValidationIssue::Missing { field }
            | ValidationIssue::WrongType { field, .. } => field,
        }
    }
}
