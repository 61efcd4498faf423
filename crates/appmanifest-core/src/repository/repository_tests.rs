#![allow(non_snake_case)]

use super::*;
use serde_json::json;

#[test]
fn Repository___parse_at___accepts_shorthand_text() {
    let repo = Repository::parse_at(&json!("git+https://example.com/repo"), "repository").unwrap();

    assert_eq!(repo.url(), "git+https://example.com/repo");
    assert!(repo.kind().is_none());
}

#[test]
fn Repository___parse_at___accepts_type_and_url_record() {
    let value = json!({"type": "git", "url": "https://example.com/app.git"});

    let repo = Repository::parse_at(&value, "repository").unwrap();

    assert_eq!(
        repo,
        Repository::Record(RepositoryRecord::new("git", "https://example.com/app.git"))
    );
    assert_eq!(repo.kind(), Some("git"));
}

#[test]
fn Repository___parse_at___rejects_record_missing_url() {
    let err = Repository::parse_at(&json!({"type": "git"}), "repository").unwrap_err();

    assert_eq!(
        err,
        ValidationIssue::Missing {
            field: "repository.url".to_string()
        }
    );
}

#[test]
fn Repository___parse_at___rejects_record_missing_type() {
    let err =
        Repository::parse_at(&json!({"url": "https://example.com"}), "repository").unwrap_err();

    assert_eq!(err.field(), "repository.type");
}

#[test]
fn Repository___parse_at___rejects_numeric_url() {
    let err = Repository::parse_at(&json!({"type": "git", "url": 3}), "repository").unwrap_err();

    assert_eq!(err.field(), "repository.url");
}

#[test]
fn Repository___parse_at___rejects_null_and_array() {
    assert!(Repository::parse_at(&json!(null), "repository").is_err());
    assert!(Repository::parse_at(&json!(["git"]), "repository").is_err());
}

#[test]
fn Repository___serialize___renames_kind_to_type() {
    let repo = Repository::Record(RepositoryRecord::new("git", "https://example.com/app.git"));

    let value = serde_json::to_value(&repo).unwrap();

    assert_eq!(
        value,
        json!({"type": "git", "url": "https://example.com/app.git"})
    );
}

#[test]
fn Repository___parse_at___drops_extra_record_keys() {
    let value = json!({"type": "git", "url": "u", "directory": "packages/app"});

    let repo = Repository::parse_at(&value, "repository").unwrap();

    assert_eq!(
        serde_json::to_value(&repo).unwrap(),
        json!({"type": "git", "url": "u"})
    );
}
