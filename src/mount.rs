// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The page container views are rendered into.

/// A mount point whose content is replaced wholesale on every view change.
pub trait RenderTarget {
    /// Whether the mount point exists in the document.
    fn is_attached(&self) -> bool;

    /// Replace the mount point's content with `markup`.
    fn replace_content(&mut self, markup: String);
}

/// In-memory mount point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    content: Option<String>,
}

impl MemoryTarget {
    /// An empty, attached mount point.
    pub fn new() -> Self {
        Self {
            content: Some(String::new()),
        }
    }

    /// A document without a mount point; renders are dropped.
    pub fn detached() -> Self {
        Self { content: None }
    }

    /// Current markup, or `None` when detached.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl RenderTarget for MemoryTarget {
    fn is_attached(&self) -> bool {
        self.content.is_some()
    }

    fn replace_content(&mut self, markup: String) {
        if let Some(content) = self.content.as_mut() {
            *content = markup;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_content() {
        let mut target = MemoryTarget::new();
        target.replace_content("<p>one</p>".to_string());
        target.replace_content("<p>two</p>".to_string());
        assert_eq!(target.content(), Some("<p>two</p>"));
    }

    #[test]
    fn test_detached_ignores_content() {
        let mut target = MemoryTarget::detached();
        assert!(!target.is_attached());
        target.replace_content("<p>lost</p>".to_string());
        assert_eq!(target.content(), None);
    }
}
