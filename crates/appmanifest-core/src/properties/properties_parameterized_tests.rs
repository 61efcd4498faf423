#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Manifests that must be accepted
// ============================================================================

#[test_case(json!({
    "name": "App", "author": "Jane Doe", "homepage": "https://app.example",
    "repository": "git+https://example.com/repo"
}) ; "repository shorthand")]
#[test_case(json!({
    "name": "App", "author": {"name": "Jane"}, "homepage": "https://app.example",
    "repository": {"type": "git", "url": "https://example.com/app.git"}
}) ; "author record")]
#[test_case(json!({
    "name": "", "author": "", "homepage": "",
    "repository": ""
}) ; "empty strings are still text")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h", "repository": "r",
    "contributors": ["Ann", {"name": "Bob", "url": "https://bob.example"}],
    "scripts": {"postinstall": "node install.js"}, "private": true
}) ; "contributors and extra fields")]
fn is_valid_manifest___accepts(manifest: Value) {
    assert!(is_valid_manifest(&manifest));
}

// ============================================================================
// Manifests that must be rejected, with the reported field
// ============================================================================

#[test_case(json!({
    "name": "App", "homepage": "h", "repository": "r"
}), "author" ; "missing author")]
#[test_case(json!({
    "name": "App", "author": 12, "homepage": "h", "repository": "r"
}), "author" ; "numeric author")]
#[test_case(json!({
    "author": "Jane", "homepage": "h", "repository": "r"
}), "name" ; "missing name")]
#[test_case(json!({
    "name": ["App"], "author": "Jane", "homepage": "h", "repository": "r"
}), "name" ; "array name")]
#[test_case(json!({
    "name": "App", "author": "Jane", "repository": "r"
}), "homepage" ; "missing homepage")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h"
}), "repository" ; "missing repository")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h", "repository": null
}), "repository" ; "null repository")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h", "repository": {"url": "u"}
}), "repository.type" ; "repository without type")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h", "repository": "r",
    "contributors": null
}), "contributors" ; "null contributors")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h", "repository": "r",
    "contributors": "Ann, Bob"
}), "contributors" ; "text contributors")]
#[test_case(json!({
    "name": "App", "author": "Jane", "homepage": "h", "repository": "r",
    "contributors": [{"email": "x@example.com"}]
}), "contributors[0].name" ; "contributor without name")]
fn ManifestProperties___from_value___rejects(manifest: Value, field: &str) {
    let err = ManifestProperties::from_value(&manifest).unwrap_err();

    assert_eq!(err.field(), field);
    assert!(!is_valid_manifest(&manifest));
}
