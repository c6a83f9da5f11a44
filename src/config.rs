// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Router configuration.
//!
//! Every field has a default matching the stock site, so a config file only
//! needs the values it changes.

use crate::error::ConfigError;
use crate::history::DEFAULT_HISTORY_LIMIT;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings that control link dispatch and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Link left to the browser instead of being routed.
    pub about_href: String,
    /// Paths that show the featured view when there is no fragment.
    pub index_paths: Vec<String>,
    /// Title of featured history entries.
    pub featured_title: String,
    /// Maximum number of history entries kept behind the current one.
    pub history_limit: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            about_href: "about.html".to_string(),
            index_paths: vec!["/".to_string(), "/index.html".to_string()],
            featured_title: "Featured Page".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl RouterConfig {
    /// Check values that would make navigation misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        if let Some(path) = self.index_paths.iter().find(|p| !p.starts_with('/')) {
            return Err(ConfigError::RelativeIndexPath { path: path.clone() });
        }
        Ok(())
    }

    /// Whether `pathname` is one of the index paths.
    pub fn is_index_path(&self, pathname: &str) -> bool {
        self.index_paths.iter().any(|p| p == pathname)
    }

    /// Load and validate a config from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let config: Self = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            other => bail!("Unsupported config extension: {:?}", other),
        };
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
