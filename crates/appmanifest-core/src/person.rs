//! Author and contributor identities

use crate::ValidationIssue;
use crate::shape::{kind_of, optional_text, required_text};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Author or contributor identity.
///
/// Manifests write a person either as a single string
/// (`"Jane Doe <jane@example.com>"`) or as a record with a `name` and
/// optional contact fields. A bare string is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Person {
    /// Free-text identity
    Text(String),
    /// Structured identity
    Record(PersonRecord),
}

/// Structured person record.
///
/// Keys other than `name`, `email` and `url` are dropped when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonRecord {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Person {
    /// Parse a person from an untyped value.
    pub fn from_value(value: &Value) -> Result<Self, ValidationIssue> {
        Self::parse_at(value, "person")
    }

    /// Parse a person, reporting issues against `path`.
    pub(crate) fn parse_at(value: &Value, path: &str) -> Result<Self, ValidationIssue> {
        match value {
            Value::String(text) => Ok(Person::Text(text.clone())),
            Value::Object(record) => Ok(Person::Record(PersonRecord {
                name: required_text(record, path, "name")?,
                email: optional_text(record, path, "email")?,
                url: optional_text(record, path, "url")?,
            })),
            other => Err(ValidationIssue::WrongType {
                field: path.to_string(),
                expected: "text or record",
                found: kind_of(other),
            }),
        }
    }

    /// Display name. For the free-text form this is the whole string.
    pub fn name(&self) -> &str {
        match self {
            Person::Text(text) => text,
            Person::Record(record) => &record.name,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Person::Text(_) => None,
            Person::Record(record) => record.email.as_deref(),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Person::Text(_) => None,
            Person::Record(record) => record.url.as_deref(),
        }
    }
}

impl PersonRecord {
    /// Create a record with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            url: None,
        }
    }
}

impl From<&str> for Person {
    fn from(text: &str) -> Self {
        Person::Text(text.to_string())
    }
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person::Record(record)
    }
}

/// Renders the npm shorthand: `Name <email> (url)`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Text(text) => write!(f, "{text}"),
            Person::Record(record) => {
                write!(f, "{}", record.name)?;
                if let Some(email) = &record.email {
                    write!(f, " <{email}>")?;
                }
                if let Some(url) = &record.url {
                    write!(f, " ({url})")?;
                }
                Ok(())
            }
        }
    }
}

/// Classify an untyped value as a valid person or not.
pub fn is_valid_person(value: &Value) -> bool {
    Person::from_value(value).is_ok()
}
