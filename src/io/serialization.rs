// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project catalog serialization and deserialization.
//!
//! Catalog files are either a bare array of project records or an object with
//! a `projects` array, in YAML or JSON. The format is picked from the file
//! extension.

use crate::models::{catalog::ProjectCatalog, project::Project};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Accepted top-level shapes of a catalog file.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Project>),
    Wrapped { projects: Vec<Project> },
}

impl CatalogFile {
    fn into_projects(self) -> Vec<Project> {
        match self {
            CatalogFile::List(projects) | CatalogFile::Wrapped { projects } => projects,
        }
    }
}

/// Parse a catalog from YAML text.
pub fn catalog_from_yaml(yaml: &str) -> Result<ProjectCatalog> {
    let file: CatalogFile = serde_yaml::from_str(yaml)?;
    Ok(ProjectCatalog::new(file.into_projects())?)
}

/// Parse a catalog from JSON text.
pub fn catalog_from_json(json: &str) -> Result<ProjectCatalog> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Ok(ProjectCatalog::new(file.into_projects())?)
}

/// Import a catalog from a `.yaml`, `.yml` or `.json` file.
pub fn import_catalog(path: &Path) -> Result<ProjectCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let catalog = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => catalog_from_yaml(&text),
        Some("json") => catalog_from_json(&text),
        other => bail!("Unsupported file extension: {:?}", other),
    }
    .with_context(|| format!("Failed to import {}", path.display()))?;

    log::info!("Imported {} projects from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Write a validated catalog back out, normalised, as YAML or JSON.
///
/// The format follows the extension of `path`, like [`import_catalog`].
pub fn export_catalog(catalog: &ProjectCatalog, path: &Path) -> Result<()> {
    let text = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::to_string(catalog)?,
        Some("json") => serde_json::to_string_pretty(catalog)?,
        other => bail!("Unsupported file extension: {:?}", other),
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Exported {} projects to {}", catalog.len(), path.display());
    Ok(())
}
