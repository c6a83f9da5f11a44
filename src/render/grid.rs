// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project grids for the featured and category views.

use crate::io::media::MediaKind;
use crate::models::project::Project;
use maud::{html, Markup};

/// Looping thumbnail for a project card or detail page.
pub fn thumbnail(project: &Project) -> Markup {
    match MediaKind::from_src(&project.thumbnail) {
        MediaKind::Video => html! {
            video src=(project.thumbnail) alt=(project.title) class="thumbnail-video" loop muted autoplay playsinline {
                "Your browser does not support the video tag."
            }
        },
        MediaKind::Image => html! {
            img src=(project.thumbnail) alt=(project.title) class="lazy-gif";
        },
    }
}

/// A single grid card linking to the project's detail view.
pub fn project_item(project: &Project) -> Markup {
    html! {
        div class="project-item" {
            a href=(format!("#{}", project.id)) {
                div class="video-wrapper" { (thumbnail(project)) }
                h3 { (project.title) }
            }
        }
    }
}

/// A grid section of project cards, in the order given.
pub fn project_grid<'a>(section_id: &str, projects: impl IntoIterator<Item = &'a Project>) -> Markup {
    html! {
        section id=(section_id) class="project-grid" {
            @for project in projects {
                (project_item(project))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, thumbnail: &str) -> Project {
        Project::new(id, format!("Title {id}"), "narrative", thumbnail, "https://example.com", false)
    }

    #[test]
    fn test_card_links_to_project() {
        let html = project_item(&project("night-swim", "media/night-swim.mp4")).into_string();
        assert!(html.contains(r##"<a href="#night-swim">"##));
        assert!(html.contains("<h3>Title night-swim</h3>"));
        assert!(html.contains(r#"class="thumbnail-video""#));
        assert!(html.contains("playsinline"));
    }

    #[test]
    fn test_image_thumbnail() {
        let html = thumbnail(&project("a", "media/a.gif")).into_string();
        assert!(html.starts_with("<img"));
        assert!(html.contains(r#"class="lazy-gif""#));
        assert!(html.contains(r#"alt="Title a""#));
    }

    #[test]
    fn test_grid_keeps_order_and_escapes() {
        let mut b = project("b", "b.mp4");
        b.title = "<b>&</b>".to_string();
        let projects = vec![project("a", "a.mp4"), b];

        let html = project_grid("featured", &projects).into_string();
        assert!(html.starts_with(r#"<section id="featured" class="project-grid">"#));
        let a_pos = html.find("#a").unwrap();
        let b_pos = html.find("#b").unwrap();
        assert!(a_pos < b_pos);
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
        assert!(!html.contains("<b>&</b>"));
    }

    #[test]
    fn test_empty_grid() {
        let html = project_grid("documentary", std::iter::empty()).into_string();
        assert_eq!(html, r#"<section id="documentary" class="project-grid"></section>"#);
    }
}
