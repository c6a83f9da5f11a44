// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page location: the path plus the fragment after `#`.

use std::fmt;

/// The parts of a page URL the router cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    fragment: String,
}

impl Location {
    /// The site root with no fragment.
    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
            fragment: String::new(),
        }
    }

    /// Parse an absolute-path URL such as `/`, `/index.html#narrative`.
    ///
    /// Query strings are dropped. An empty path is treated as `/`.
    pub fn parse(url: &str) -> Self {
        let (before_hash, fragment) = match url.split_once('#') {
            Some((path, fragment)) => (path, fragment),
            None => (url, ""),
        };
        let path = before_hash.split('?').next().unwrap_or("");

        Self {
            pathname: if path.is_empty() { "/".to_string() } else { path.to_string() },
            fragment: fragment.to_string(),
        }
    }

    /// Resolve a URL pushed onto the history against this location.
    ///
    /// A fragment-only URL (`#documentary`) keeps the current path; anything
    /// else replaces the whole location.
    pub fn resolve(&self, url: &str) -> Self {
        match url.strip_prefix('#') {
            Some(fragment) => Self {
                pathname: self.pathname.clone(),
                fragment: fragment.to_string(),
            },
            None => Self::parse(url),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// The fragment without the leading `#`; empty when there is none.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fragment.is_empty() {
            write!(f, "{}", self.pathname)
        } else {
            write!(f, "{}#{}", self.pathname, self.fragment)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let loc = Location::parse("/index.html#music-videos");
        assert_eq!(loc.pathname(), "/index.html");
        assert_eq!(loc.fragment(), "music-videos");

        let loc = Location::parse("/?ref=mail");
        assert_eq!(loc.pathname(), "/");
        assert_eq!(loc.fragment(), "");

        assert_eq!(Location::parse("#x").pathname(), "/");
        assert_eq!(Location::parse("/#").fragment(), "");
    }

    #[test]
    fn test_resolve_fragment_keeps_path() {
        let base = Location::parse("/index.html");
        let loc = base.resolve("#neon");
        assert_eq!(loc.to_string(), "/index.html#neon");

        let loc = loc.resolve("/");
        assert_eq!(loc, Location::root());
    }
}
