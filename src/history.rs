// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation history.
//!
//! The router talks to the browser history through [`NavigationHistory`] so
//! it can run against [`MemoryHistory`] in tests and in the command line
//! replay tool. Each pushed entry carries a [`HistoryState`] that is handed
//! back to the router on back/forward navigation.

use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// State object attached to a pushed history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl HistoryState {
    /// State for a category grid entry.
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            project_id: None,
        }
    }

    /// State for a project detail entry, remembering the category it was reached from.
    pub fn project(project_id: impl Into<String>, category: Option<String>) -> Self {
        Self {
            category,
            project_id: Some(project_id.into()),
        }
    }
}

/// One history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// `None` for entries the router did not push (such as the initial page load).
    pub state: Option<HistoryState>,
    pub title: String,
    pub location: Location,
}

/// The history operations the router needs.
pub trait NavigationHistory {
    /// Add an entry after the current one, discarding any forward entries.
    fn push(&mut self, state: HistoryState, title: &str, url: &str);

    /// Location of the current entry.
    fn location(&self) -> &Location;

    /// State of the current entry.
    fn current_state(&self) -> Option<&HistoryState>;

    /// Step back one entry, returning the entry that is now current.
    fn back(&mut self) -> Option<&HistoryEntry>;

    /// Step forward one entry, returning the entry that is now current.
    fn forward(&mut self) -> Option<&HistoryEntry>;

    /// Total number of entries (back, current and forward).
    fn len(&self) -> usize;
}

/// Default maximum number of entries kept behind the current one.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// In-memory history with a bounded back stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    /// Entries behind the current one (oldest first)
    back_stack: VecDeque<HistoryEntry>,
    /// The entry being shown
    current: HistoryEntry,
    /// Entries ahead of the current one after going back (nearest last)
    forward_stack: Vec<HistoryEntry>,
    /// Maximum back stack size
    max_size: usize,
}

impl MemoryHistory {
    /// Start a history at the given URL, as if the page was just loaded.
    pub fn new(url: &str) -> Self {
        Self::with_limit(url, DEFAULT_HISTORY_LIMIT)
    }

    /// Start a history that keeps at most `max_size` entries behind the current one.
    pub fn with_limit(url: &str, max_size: usize) -> Self {
        Self {
            back_stack: VecDeque::new(),
            current: HistoryEntry {
                state: None,
                title: String::new(),
                location: Location::parse(url),
            },
            forward_stack: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl NavigationHistory for MemoryHistory {
    fn push(&mut self, state: HistoryState, title: &str, url: &str) {
        let entry = HistoryEntry {
            state: Some(state),
            title: title.to_string(),
            location: self.current.location.resolve(url),
        };
        log::debug!("History push: {}", entry.location);

        let previous = std::mem::replace(&mut self.current, entry);
        self.back_stack.push_back(previous);
        // Limit history size
        if self.back_stack.len() > self.max_size {
            self.back_stack.pop_front();
        }
        // Pushing drops everything ahead of the current entry
        self.forward_stack.clear();
    }

    fn location(&self) -> &Location {
        &self.current.location
    }

    fn current_state(&self) -> Option<&HistoryState> {
        self.current.state.as_ref()
    }

    fn back(&mut self) -> Option<&HistoryEntry> {
        let previous = self.back_stack.pop_back()?;
        let current = std::mem::replace(&mut self.current, previous);
        self.forward_stack.push(current);
        Some(&self.current)
    }

    fn forward(&mut self) -> Option<&HistoryEntry> {
        let next = self.forward_stack.pop()?;
        let current = std::mem::replace(&mut self.current, next);
        self.back_stack.push_back(current);
        Some(&self.current)
    }

    fn len(&self) -> usize {
        self.back_stack.len() + 1 + self.forward_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::new("/");
        history.push(HistoryState::category("narrative"), "narrative", "#narrative");
        history.push(
            HistoryState::project("night-swim", Some("narrative".to_string())),
            "Night Swim",
            "#night-swim",
        );
        assert_eq!(history.len(), 3);
        assert_eq!(history.location().fragment(), "night-swim");

        let entry = history.back().unwrap();
        assert_eq!(entry.location.to_string(), "/#narrative");
        assert_eq!(entry.state, Some(HistoryState::category("narrative")));

        let entry = history.back().unwrap();
        assert_eq!(entry.state, None);
        assert!(history.back().is_none());

        let entry = history.forward().unwrap();
        assert_eq!(entry.location.fragment(), "narrative");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_push_clears_forward_stack() {
        let mut history = MemoryHistory::new("/");
        history.push(HistoryState::category("narrative"), "narrative", "#narrative");
        history.back();
        assert!(history.can_go_forward());

        history.push(HistoryState::category("commercial"), "commercial", "#commercial");
        assert!(!history.can_go_forward());
        assert!(history.forward().is_none());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_back_stack_is_bounded() {
        let mut history = MemoryHistory::with_limit("/", 2);
        for id in ["a", "b", "c", "d"] {
            history.push(HistoryState::project(id, None), id, &format!("#{id}"));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.back().unwrap().location.fragment(), "c");
        assert_eq!(history.back().unwrap().location.fragment(), "b");
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_long_session_keeps_newest_entries() {
        let mut history = MemoryHistory::with_limit("/", 3);
        for i in 0..1000 {
            history.push(HistoryState::project(i.to_string(), None), "p", &format!("#{i}"));
        }
        assert_eq!(history.len(), 4);
        for expected in ["998", "997", "996"] {
            assert_eq!(history.back().unwrap().location.fragment(), expected);
        }
        assert!(history.back().is_none());

        // Walking forward again does not lose entries
        while history.forward().is_some() {}
        assert_eq!(history.location().fragment(), "999");
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_state_serializes_like_browser_state() {
        let json = serde_json::to_string(&HistoryState::project("neon", Some("music-videos".into()))).unwrap();
        assert_eq!(json, r#"{"category":"music-videos","projectId":"neon"}"#);
        assert_eq!(serde_json::to_string(&HistoryState::default()).unwrap(), "{}");
    }
}
