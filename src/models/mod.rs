// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio data: projects, categories and the project catalog.

pub mod catalog;
pub mod category;
pub mod project;
