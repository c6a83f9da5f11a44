// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Typed errors for catalog, configuration and thumbnail conversion.
//!
//! Navigation itself never fails: missing projects and missing mount points
//! degrade to "render nothing". These errors only surface while the site data
//! and its media are being prepared.

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while building a [`crate::models::catalog::ProjectCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("project at position {index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate project id: {id}")]
    DuplicateId { id: String },
}

/// Problems found while validating a [`crate::config::RouterConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("index path must start with '/': {path}")]
    RelativeIndexPath { path: String },
}

/// Problems found while batch converting thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input folder does not exist or is not a directory: {}", path.display())]
    InputNotDir { path: PathBuf },

    #[error("no GIF files found in {}", path.display())]
    NoGifs { path: PathBuf },

    #[error("crf must be between 0 and 51, got {crf}")]
    InvalidCrf { crf: u8 },

    #[error("fps and maximum dimensions must be non-zero")]
    ZeroDimension,

    #[error("{} file(s) failed to convert: {}", names.len(), names.join(", "))]
    Failed { names: Vec<String> },
}
