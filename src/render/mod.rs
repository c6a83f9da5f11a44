// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! HTML fragments for the three portfolio views.
//!
//! Everything here is a pure function from project data to markup; the
//! controller decides what to render and where it goes.

pub mod detail;
pub mod grid;
