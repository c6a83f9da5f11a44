// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The immutable, ordered project collection the router reads from.

use super::project::Project;
use crate::error::CatalogError;
use serde::Serialize;
use std::collections::HashSet;

/// Ordered set of projects with unique, non-empty ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Validate and wrap a list of projects, keeping their order.
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            if project.id.is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: project.id.clone(),
                });
            }
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by id.
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Featured projects in collection order.
    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Projects whose category matches exactly, in collection order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Project> {
        self.projects.iter().filter(move |p| p.category == category)
    }
}
