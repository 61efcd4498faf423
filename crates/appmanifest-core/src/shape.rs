//! Field access helpers over untyped JSON records

use crate::ValidationIssue;
use serde_json::{Map, Value};

pub(crate) type Record = Map<String, Value>;

/// Human-readable kind of a JSON value, used in validation messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "record",
    }
}

/// Join a parent path and a key: `("", "name")` -> `name`, `("author", "name")` -> `author.name`.
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub(crate) fn as_record<'a>(value: &'a Value, path: &str) -> Result<&'a Record, ValidationIssue> {
    value.as_object().ok_or_else(|| ValidationIssue::NotARecord {
        field: display_path(path),
        found: kind_of(value),
    })
}

pub(crate) fn required_text(
    record: &Record,
    parent: &str,
    key: &str,
) -> Result<String, ValidationIssue> {
    let field = child_path(parent, key);
    match record.get(key) {
        None => Err(ValidationIssue::Missing { field }),
        Some(value) => text(value, field),
    }
}

// A present `null` is a wrong type, not an absent field.
pub(crate) fn optional_text(
    record: &Record,
    parent: &str,
    key: &str,
) -> Result<Option<String>, ValidationIssue> {
    record
        .get(key)
        .map(|value| text(value, child_path(parent, key)))
        .transpose()
}

fn text(value: &Value, field: String) -> Result<String, ValidationIssue> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(ValidationIssue::WrongType {
            field,
            expected: "text",
            found: kind_of(other),
        }),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "manifest".to_string()
    } else {
        path.to_string()
    }
}
