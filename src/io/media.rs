// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media references (thumbnails and clips).
//!
//! This module decides how a thumbnail is presented (looping video or
//! animated image) and reports media that failed to load. Load failures are
//! diagnostics only and never interrupt rendering.

/// Extensions rendered with a `<video>` element.
const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "webm", "mov", "m4v", "ogv"];

/// How a thumbnail should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Classify a media reference by its file extension.
    ///
    /// Query strings and fragments are ignored; unknown or missing
    /// extensions fall back to an image.
    pub fn from_src(src: &str) -> Self {
        let path = src.split(['?', '#']).next().unwrap_or(src);
        let file = path.rsplit('/').next().unwrap_or(path);

        match file.rsplit_once('.') {
            Some((_, ext)) if VIDEO_EXTENSIONS.iter().any(|v| v.eq_ignore_ascii_case(ext)) => {
                MediaKind::Video
            }
            _ => MediaKind::Image,
        }
    }
}

/// Report a media asset that the host failed to load.
pub fn report_load_failure(src: &str) {
    log::error!("Failed to load video: {}", src);
}
