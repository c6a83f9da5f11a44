// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The fixed set of portfolio categories.
//!
//! Category names double as URL fragments (`#music-videos`), so the string
//! form is the contract shared with the project data.

use std::fmt;

/// One of the four portfolio categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Narrative,
    MusicVideos,
    Commercial,
    Documentary,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Narrative,
        Category::MusicVideos,
        Category::Commercial,
        Category::Documentary,
    ];

    /// The identifier used in project data and URL fragments.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Narrative => "narrative",
            Category::MusicVideos => "music-videos",
            Category::Commercial => "commercial",
            Category::Documentary => "documentary",
        }
    }

    /// Match a fragment against the known identifiers (exact, case-sensitive).
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == fragment)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment_known() {
        assert_eq!(Category::from_fragment("narrative"), Some(Category::Narrative));
        assert_eq!(Category::from_fragment("music-videos"), Some(Category::MusicVideos));
        assert_eq!(Category::from_fragment("commercial"), Some(Category::Commercial));
        assert_eq!(Category::from_fragment("documentary"), Some(Category::Documentary));
    }

    #[test]
    fn test_from_fragment_rejects_near_misses() {
        assert_eq!(Category::from_fragment(""), None);
        assert_eq!(Category::from_fragment("Narrative"), None);
        assert_eq!(Category::from_fragment("music_videos"), None);
        assert_eq!(Category::from_fragment("#narrative"), None);
    }

    #[test]
    fn test_display_round_trips_through_fragment() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.as_str());
            assert_eq!(Category::from_fragment(&category.to_string()), Some(category));
        }
    }
}
