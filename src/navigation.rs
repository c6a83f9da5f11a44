// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation intents and link classification.
//!
//! The UI layer turns browser events into [`NavigationIntent`]s and hands them
//! to the controller. Link clicks are classified here so the rules for which
//! links are routed live in one place.

use crate::config::RouterConfig;
use crate::history::HistoryState;
use crate::models::category::Category;

/// A user or browser action asking for a view change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// The page finished loading.
    Load,
    /// The browser moved to another history entry.
    Pop { state: Option<HistoryState> },
    /// An anchor with this `href` was clicked.
    Click { href: String },
    /// A thumbnail or video failed to load.
    MediaError { src: String },
}

/// What a clicked link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// Let the browser follow the link.
    Passthrough,
    Featured,
    Category(Category),
    Project(String),
    /// Default suppressed, nothing to show.
    Ignore,
}

/// Whether the host should run its default action for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    AllowDefault,
}

/// Decide what a click on `href` does.
pub fn classify_link(href: &str, config: &RouterConfig) -> LinkAction {
    if href == config.about_href {
        return LinkAction::Passthrough;
    }
    if href == "index.html" || href == "/" {
        return LinkAction::Featured;
    }
    match href.strip_prefix('#') {
        Some(target) => match Category::from_fragment(target) {
            Some(category) => LinkAction::Category(category),
            None => LinkAction::Project(target.to_string()),
        },
        None => LinkAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_link() {
        let config = RouterConfig::default();
        assert_eq!(classify_link("about.html", &config), LinkAction::Passthrough);
        assert_eq!(classify_link("/", &config), LinkAction::Featured);
        assert_eq!(classify_link("index.html", &config), LinkAction::Featured);
        assert_eq!(
            classify_link("#music-videos", &config),
            LinkAction::Category(Category::MusicVideos)
        );
        assert_eq!(
            classify_link("#night-swim", &config),
            LinkAction::Project("night-swim".to_string())
        );
        assert_eq!(classify_link("contact.html", &config), LinkAction::Ignore);
    }

    #[test]
    fn test_custom_about_link() {
        let config = RouterConfig {
            about_href: "#about".to_string(),
            ..RouterConfig::default()
        };
        assert_eq!(classify_link("#about", &config), LinkAction::Passthrough);
        assert_eq!(classify_link("about.html", &config), LinkAction::Ignore);
    }
}
