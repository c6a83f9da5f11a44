// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Batch conversion of GIF thumbnails to MP4.
//!
//! Grid thumbnails play as looping `<video>` elements, which are far smaller
//! than the animated GIFs they replace. This module converts every GIF in a
//! folder with ffmpeg, in parallel, keeping the aspect ratio and fitting the
//! result inside a maximum frame size.

use crate::error::ConvertError;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Encoding settings for converted thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Output frame rate
    pub fps: u32,
    /// x264 constant rate factor (0-51, lower is better quality)
    pub crf: u8,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            fps: 15,
            crf: 18,
            max_width: 960,
            max_height: 540,
        }
    }
}

impl ConvertOptions {
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.crf > 51 {
            return Err(ConvertError::InvalidCrf { crf: self.crf });
        }
        if self.fps == 0 || self.max_width == 0 || self.max_height == 0 {
            return Err(ConvertError::ZeroDimension);
        }
        Ok(())
    }

    /// Scale filter fitting the frame inside the maximum size.
    ///
    /// Whichever side overflows more is pinned to its maximum; the other side
    /// follows the aspect ratio, rounded to an even number of pixels.
    pub fn scale_filter(&self) -> String {
        let (w, h) = (self.max_width, self.max_height);
        format!("scale='if(gt(iw/{w},ih/{h}),{w},-2)':'if(gt(iw/{w},ih/{h}),-2,{h})'")
    }

    /// Full `-vf` filter chain.
    pub fn video_filter(&self) -> String {
        format!("fps={},{}:flags=lanczos", self.fps, self.scale_filter())
    }
}

/// ffmpeg arguments converting `input` to `output`.
pub fn ffmpeg_args(input: &Path, output: &Path, options: &ConvertOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(16);
    args.extend(["-y", "-i"].map(OsString::from));
    args.push(input.into());
    args.extend(["-movflags", "faststart", "-pix_fmt", "yuv420p", "-vf"].map(OsString::from));
    args.push(options.video_filter().into());
    args.extend(["-c:v", "libx264", "-preset", "medium", "-crf"].map(OsString::from));
    args.push(options.crf.to_string().into());
    args.push(output.into());
    args
}

/// Where the MP4 for `gif` goes: same stem, `.mp4`, inside `output_dir`.
pub fn output_path(gif: &Path, output_dir: &Path) -> PathBuf {
    let mut name = gif.file_stem().unwrap_or(gif.as_os_str()).to_os_string();
    name.push(".mp4");
    output_dir.join(name)
}

/// GIF files directly inside `dir`, sorted by name.
pub fn find_gifs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut gifs = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        let is_gif = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("gif"));
        if is_gif && path.is_file() {
            gifs.push(path);
        }
    }
    gifs.sort();
    Ok(gifs)
}

/// Something that runs ffmpeg-style argument lists.
pub trait Transcoder: Sync {
    /// Run one conversion; the error carries the tool's diagnostics.
    fn transcode(&self, args: &[OsString]) -> Result<(), String>;
}

/// Runs the `ffmpeg` executable.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: OsString,
}

impl Ffmpeg {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Transcoder for Ffmpeg {
    fn transcode(&self, args: &[OsString]) -> Result<(), String> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|e| format!("failed to run {}: {}", self.program.to_string_lossy(), e))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
        }
    }
}

/// Outcome of a batch conversion, by GIF file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub converted: Vec<String>,
    pub failed: Vec<String>,
}

impl ConversionReport {
    /// Turn a report with failures into an error listing them.
    pub fn into_result(self) -> Result<Self, ConvertError> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(ConvertError::Failed { names: self.failed })
        }
    }
}

/// Convert every GIF in `input_dir` into an MP4 in `output_dir`.
///
/// Conversions run in parallel. Individual failures are logged and collected
/// in the report rather than stopping the batch.
pub fn convert_folder(
    input_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    transcoder: &impl Transcoder,
) -> Result<ConversionReport> {
    options.validate()?;
    if !input_dir.is_dir() {
        return Err(ConvertError::InputNotDir {
            path: input_dir.to_path_buf(),
        }
        .into());
    }
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let gifs = find_gifs(input_dir)?;
    if gifs.is_empty() {
        return Err(ConvertError::NoGifs {
            path: input_dir.to_path_buf(),
        }
        .into());
    }
    log::info!("Found {} GIF(s) in {}", gifs.len(), input_dir.display());

    let total = gifs.len();
    let done = AtomicUsize::new(0);
    let results: Vec<(String, bool)> = gifs
        .par_iter()
        .map(|gif| {
            let name = gif
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let args = ffmpeg_args(gif, &output_path(gif, output_dir), options);
            let ok = match transcoder.transcode(&args) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("Error converting {} to MP4: {}", name, e);
                    false
                }
            };
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            log::info!("Converting GIFs to MP4s [{}/{}] {}", n, total, name);
            (name, ok)
        })
        .collect();

    let mut report = ConversionReport::default();
    for (name, ok) in results {
        if ok {
            report.converted.push(name);
        } else {
            report.failed.push(name);
        }
    }

    if report.failed.is_empty() {
        log::info!("Conversion completed, MP4 files are in {}", output_dir.display());
    } else {
        for name in &report.failed {
            log::warn!("Failed to convert: {}", name);
        }
    }
    Ok(report)
}
