//! End-to-end tests for reading the trusted manifest projection from disk.

#![allow(non_snake_case)]

use appmanifest_core::{
    FileSource, ManifestError, ManifestLoader, Person, Repository, RepositoryRecord,
    extract_trusted_properties,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, manifest: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("package.json");
    fs::write(&path, serde_json::to_vec_pretty(manifest).unwrap()).unwrap();
    path
}

#[test]
fn extract___manifest_with_scripts___returns_only_allow_listed_fields() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        &json!({
            "name": "App",
            "author": "Jane Doe",
            "homepage": "https://app.example",
            "repository": {"type": "git", "url": "https://example.com/app.git"},
            "scripts": {"build": "..."}
        }),
    );

    let properties = extract_trusted_properties(&FileSource::new(path)).unwrap();

    assert_eq!(properties.name(), "App");
    assert_eq!(properties.author(), &Person::Text("Jane Doe".to_string()));
    assert_eq!(properties.homepage(), "https://app.example");
    assert_eq!(
        properties.repository(),
        &Repository::Record(RepositoryRecord::new("git", "https://example.com/app.git"))
    );
    assert!(properties.contributors().is_none());
    assert_eq!(
        serde_json::to_value(&properties).unwrap(),
        json!({
            "name": "App",
            "author": "Jane Doe",
            "homepage": "https://app.example",
            "repository": {"type": "git", "url": "https://example.com/app.git"}
        })
    );
}

#[test]
fn extract___manifest_without_homepage___returns_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = write_manifest(
        &dir,
        &json!({
            "name": "App",
            "author": "Jane Doe",
            "repository": "git+https://example.com/repo"
        }),
    );

    let err = extract_trusted_properties(&FileSource::new(path)).unwrap_err();

    assert!(matches!(err, ManifestError::Invalid(_)));
    assert!(
        err.to_string()
            .starts_with("manifest missing required properties or has invalid types")
    );
}

#[test]
fn extract___malformed_document___returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, "{ \"name\": ").unwrap();

    let err = extract_trusted_properties(&FileSource::new(path)).unwrap_err();

    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn loader___installed_module___finds_manifest_at_install_root() {
    let root = TempDir::new().unwrap();
    write_manifest(
        &root,
        &json!({
            "name": "Chat",
            "author": {"name": "Jane Doe", "email": "jane@example.com"},
            "contributors": ["Ann"],
            "homepage": "https://chat.example",
            "repository": "github:example/chat",
            "build": {"appId": "com.example.chat"}
        }),
    );
    let module_dir = root.path().join("dist").join("main");
    fs::create_dir_all(&module_dir).unwrap();

    let properties = ManifestLoader::default()
        .load_from_install_dir(&module_dir)
        .unwrap();

    assert_eq!(properties.author().to_string(), "Jane Doe <jane@example.com>");
    assert_eq!(properties.contributors().map(<[Person]>::len), Some(1));
    assert_eq!(properties.repository().url(), "github:example/chat");
}

#[test]
fn loader___projection_is_shareable_across_threads() {
    let root = TempDir::new().unwrap();
    write_manifest(
        &root,
        &json!({
            "name": "App", "author": "Jane", "homepage": "h", "repository": "r"
        }),
    );

    let properties = std::sync::Arc::new(
        ManifestLoader::new(appmanifest_core::LoaderConfig::new().with_ascend_levels(0))
            .load_from_install_dir(root.path())
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let properties = std::sync::Arc::clone(&properties);
            std::thread::spawn(move || properties.name().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "App");
    }
}
