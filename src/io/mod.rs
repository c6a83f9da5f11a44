// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for media, thumbnail conversion and catalog files.

pub mod convert;
pub mod media;
pub mod serialization;
