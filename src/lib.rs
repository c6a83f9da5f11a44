// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Showreel - view routing for a static film portfolio.
//!
//! Renders a portfolio's projects as HTML fragments in one of three views
//! (featured grid, category grid, project detail) and keeps the view in sync
//! with the navigation history so back/forward and direct hash links work.
//!
//! The browser is kept at arm's length: history goes through
//! [`history::NavigationHistory`], the page container through
//! [`mount::RenderTarget`], and events arrive as
//! [`navigation::NavigationIntent`]s.

pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod io;
pub mod location;
pub mod models;
pub mod mount;
pub mod navigation;
pub mod render;
pub mod util;

pub use controller::{NavigationState, View, ViewController};
