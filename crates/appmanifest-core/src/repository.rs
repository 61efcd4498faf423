//! Source control location

use crate::ValidationIssue;
use crate::shape::{kind_of, required_text};
use serde::Serialize;
use serde_json::Value;

/// Repository reference: a shorthand string or a `{type, url}` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Repository {
    /// Shorthand such as `"git+https://example.com/repo"` or `"github:user/repo"`
    Text(String),
    /// Structured reference
    Record(RepositoryRecord),
}

/// Structured repository record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// Version control system (e.g., "git")
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,
}

impl Repository {
    pub(crate) fn parse_at(value: &Value, path: &str) -> Result<Self, ValidationIssue> {
        match value {
            Value::String(text) => Ok(Repository::Text(text.clone())),
            Value::Object(record) => Ok(Repository::Record(RepositoryRecord {
                kind: required_text(record, path, "type")?,
                url: required_text(record, path, "url")?,
            })),
            other => Err(ValidationIssue::WrongType {
                field: path.to_string(),
                expected: "text or record",
                found: kind_of(other),
            }),
        }
    }

    /// Location of the repository. For the shorthand form this is the whole string.
    pub fn url(&self) -> &str {
        match self {
            Repository::Text(text) => text,
            Repository::Record(record) => &record.url,
        }
    }

    /// Version control system, when given.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Repository::Text(_) => None,
            Repository::Record(record) => Some(&record.kind),
        }
    }
}

impl RepositoryRecord {
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
#[path = "repository/repository_tests.rs"]
mod repository_tests;
