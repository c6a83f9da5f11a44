// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Single-project detail page.
//!
//! The page shows the title, the thumbnail linking out to the full video, and
//! a details block with every free-form field of the project. Multi-line
//! string values keep their line breaks; `awards` gets its own styling hook.

use super::grid::thumbnail;
use crate::models::project::{display_value, Project};
use crate::util::label::format_label;
use maud::{html, Markup, PreEscaped};
use serde_json::Value;

/// Field rendered with the `multi-line` class.
pub const MULTI_LINE_FIELD: &str = "awards";

const PLAY_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="white" width="48" height="48"><path d="M8 5v14l11-7z"/></svg>"#;

/// Control that returns to the previous history entry.
pub fn back_button() -> Markup {
    html! {
        button class="back-button" onclick="window.history.back()" { "\u{2190} Back" }
    }
}

/// One `Label: value` line of the details block.
fn detail_line(key: &str, value: &Value) -> Markup {
    let text = display_value(value);
    let lines = text.split('\n').enumerate();
    let body = html! {
        @for (i, line) in lines {
            @if i > 0 { br; }
            (line)
        }
    };

    html! {
        p {
            (format_label(key)) ": "
            @if key == MULTI_LINE_FIELD {
                span class="multi-line" { (body) }
            } @else {
                span { (body) }
            }
        }
    }
}

/// The full detail page for a project.
pub fn project_page(project: &Project) -> Markup {
    html! {
        div class="project-page" {
            h2 { (project.title) }
            div class="video-container" {
                a href=(project.video_url) target="_blank" rel="noopener" {
                    (thumbnail(project))
                    div class="play-button" { (PreEscaped(PLAY_ICON)) }
                }
            }
            div class="project-details" {
                @for (key, value) in project.detail_fields() {
                    (detail_line(key, value))
                }
            }
            (back_button())
        }
    }
}
