//! Trusted projection of the package manifest

use crate::shape::{as_record, kind_of, required_text};
use crate::{ManifestResult, Person, Repository, ValidationIssue};
use serde::Serialize;
use serde_json::Value;

/// The allow-listed subset of manifest fields.
///
/// This is the only shape handed to less-trusted code. It is built once,
/// copied out of the parsed document by value, and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestProperties {
    name: String,

    author: Person,

    #[serde(skip_serializing_if = "Option::is_none")]
    contributors: Option<Vec<Person>>,

    homepage: String,

    repository: Repository,
}

impl ManifestProperties {
    /// Validate a parsed manifest and project the allow-listed fields.
    ///
    /// Rules are checked in a fixed order and the first violation is
    /// returned: `contributors`, `author`, `name`, `homepage`, `repository`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationIssue> {
        let record = as_record(value, "")?;

        let contributors = match record.get("contributors") {
            None => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Person::parse_at(item, &format!("contributors[{index}]")))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(other) => {
                return Err(ValidationIssue::WrongType {
                    field: "contributors".to_string(),
                    expected: "array",
                    found: kind_of(other),
                });
            }
        };

        let author = match record.get("author") {
            Some(value) => Person::parse_at(value, "author")?,
            None => {
                return Err(ValidationIssue::Missing {
                    field: "author".to_string(),
                });
            }
        };

        let name = required_text(record, "", "name")?;
        let homepage = required_text(record, "", "homepage")?;

        let repository = match record.get("repository") {
            Some(value) => Repository::parse_at(value, "repository")?,
            None => {
                return Err(ValidationIssue::Missing {
                    field: "repository".to_string(),
                });
            }
        };

        Ok(Self {
            name,
            author,
            contributors,
            homepage,
            repository,
        })
    }

    /// Parse raw manifest bytes and project the allow-listed fields.
    pub fn from_slice(bytes: &[u8]) -> ManifestResult<Self> {
        let document: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_value(&document)?)
    }

    /// Application name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &Person {
        &self.author
    }

    /// Contributors in manifest order, if the manifest lists any
    pub fn contributors(&self) -> Option<&[Person]> {
        self.contributors.as_deref()
    }

    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Serialize back to pretty JSON in the manifest's own shape.
    pub fn to_json(&self) -> ManifestResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Classify a parsed manifest as valid or not.
pub fn is_valid_manifest(value: &Value) -> bool {
    ManifestProperties::from_value(value).is_ok()
}


#[cfg(test)]
#[path = "properties/properties_parameterized_tests.rs"]
mod properties_parameterized_tests;
