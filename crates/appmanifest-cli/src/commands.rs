//! `check` and `show` command implementations

use anyhow::{Context, Result};
use appmanifest_core::{
    FileSource, InstallLayout, LoaderConfig, ManifestProperties, extract_trusted_properties,
};
use std::path::{Path, PathBuf};

/// Pick the manifest path: the explicit one, or the one next to the installed binary.
pub fn resolve_manifest_path(explicit: Option<PathBuf>, loader: &LoaderConfig) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let module_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;

    Ok(InstallLayout::new(loader).manifest_path(module_dir)?)
}

/// Load and validate the manifest at `path`
pub fn load(path: &Path) -> Result<ManifestProperties> {
    extract_trusted_properties(&FileSource::new(path))
        .with_context(|| format!("Manifest check failed for {}", path.display()))
}

/// Human-readable summary lines for a validated manifest
pub fn summary(properties: &ManifestProperties) -> Vec<String> {
    let mut lines = vec![
        format!("✓ Name: {}", properties.name()),
        format!("✓ Author: {}", properties.author()),
    ];

    match properties.contributors() {
        Some(contributors) => lines.push(format!("✓ Contributors: {}", contributors.len())),
        None => lines.push("✓ Contributors: none listed".to_string()),
    }

    lines.push(format!("✓ Homepage: {}", properties.homepage()));

    let repository = properties.repository();
    match repository.kind() {
        Some(kind) => lines.push(format!("✓ Repository: {} ({kind})", repository.url())),
        None => lines.push(format!("✓ Repository: {}", repository.url())),
    }

    lines
}

/// Check command implementation
pub fn check(path: &Path) -> Result<()> {
    appmanifest_logging::log(&format!("Checking manifest: {}", path.display()));

    let properties = load(path)?;
    for line in summary(&properties) {
        appmanifest_logging::log(&line);
    }
    appmanifest_logging::log("Manifest is valid!");

    Ok(())
}

/// Show command implementation
pub fn show(path: &Path) -> Result<()> {
    let properties = load(path)?;
    println!("{}", properties.to_json()?);
    Ok(())
}
