// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Showreel command line tool.
//!
//! `render` loads a project catalog, opens it at a URL the way a browser
//! would, then replays a sequence of link clicks and back/forward steps,
//! printing the rendered mount point content. `convert` turns a folder of GIF
//! thumbnails into MP4s for the grid's looping videos.

use anyhow::Result;
use clap::{Parser, Subcommand};
use showreel::config::RouterConfig;
use showreel::history::MemoryHistory;
use showreel::io::convert::{convert_folder, ConvertOptions, Ffmpeg};
use showreel::io::serialization::{export_catalog, import_catalog};
use showreel::mount::MemoryTarget;
use showreel::navigation::{Dispatch, NavigationIntent};
use showreel::ViewController;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(about = "Render portfolio views and prepare their thumbnails", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay navigation over a catalog and print the rendered view
    Render {
        /// Project catalog (.json, .yaml or .yml)
        projects: PathBuf,

        /// Router configuration (.json, .yaml or .yml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// URL the page is loaded at
        #[arg(long, default_value = "/")]
        start: String,

        /// Print the mount point after every step, not just the last one
        #[arg(long)]
        trace: bool,

        /// Write the validated catalog to this file (.json, .yaml or .yml)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Steps to replay: an href to click, `back`, or `forward`
        steps: Vec<String>,
    },

    /// Convert every GIF in a folder to MP4 with ffmpeg
    Convert {
        input_folder: PathBuf,
        output_folder: PathBuf,

        #[arg(long, default_value_t = 15)]
        fps: u32,

        /// Constant rate factor (0-51), lower is better quality
        #[arg(long, default_value_t = 18)]
        crf: u8,

        #[arg(long, default_value_t = 960)]
        max_width: u32,

        #[arg(long, default_value_t = 540)]
        max_height: u32,

        /// ffmpeg executable to run
        #[arg(long, default_value = "ffmpeg")]
        ffmpeg: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    match Cli::parse().command {
        Commands::Render {
            projects,
            config,
            start,
            trace,
            export,
            steps,
        } => render(projects, config, &start, trace, export, &steps),
        Commands::Convert {
            input_folder,
            output_folder,
            fps,
            crf,
            max_width,
            max_height,
            ffmpeg,
        } => {
            let options = ConvertOptions {
                fps,
                crf,
                max_width,
                max_height,
            };
            let report = convert_folder(&input_folder, &output_folder, &options, &Ffmpeg::new(ffmpeg))?;
            let report = report.into_result()?;
            log::info!("Converted {} file(s) into {}", report.converted.len(), output_folder.display());
            Ok(())
        }
    }
}

fn render(
    projects: PathBuf,
    config: Option<PathBuf>,
    start: &str,
    trace: bool,
    export: Option<PathBuf>,
    steps: &[String],
) -> Result<()> {
    let config = match config {
        Some(ref path) => RouterConfig::load(path)?,
        None => RouterConfig::default(),
    };
    let catalog = Arc::new(import_catalog(&projects)?);
    if let Some(ref path) = export {
        export_catalog(&catalog, path)?;
    }
    let history = MemoryHistory::with_limit(start, config.history_limit);

    let mut controller = ViewController::with_config(catalog, history, MemoryTarget::new(), config);
    controller.handle(NavigationIntent::Load);
    if trace {
        print_mount(&controller, "load");
    }

    for step in steps {
        match step.as_str() {
            "back" => {
                if !controller.back() {
                    log::warn!("Already at the start of history");
                }
            }
            "forward" => {
                if !controller.forward() {
                    log::warn!("Already at the end of history");
                }
            }
            href => {
                let dispatch = controller.handle(NavigationIntent::Click {
                    href: href.to_string(),
                });
                if dispatch == Dispatch::AllowDefault {
                    log::info!("Link {} is left to the browser", href);
                }
            }
        }
        if trace {
            print_mount(&controller, step);
        }
    }

    if !trace {
        println!("{}", controller.target().content().unwrap_or_default());
    }
    Ok(())
}

fn print_mount(controller: &ViewController<MemoryHistory, MemoryTarget>, step: &str) {
    println!("<!-- {} -> {:?} -->", step, controller.view());
    println!("{}", controller.target().content().unwrap_or_default());
}
