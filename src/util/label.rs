// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Human-readable labels for project field keys.
//!
//! Keys are split into words before every ASCII uppercase letter and at `_`
//! and `-`. Each word is capitalized, the rest lowercased, and the words are
//! joined with single spaces: `videoAwardYear` becomes `Video Award Year`.

/// Convert a field key into a display label.
pub fn format_label(key: &str) -> String {
    split_words(key)
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_words(key: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;

    for (i, c) in key.char_indices() {
        if c == '_' || c == '-' {
            words.push(&key[start..i]);
            start = i + c.len_utf8();
        } else if c.is_ascii_uppercase() && i > start {
            words.push(&key[start..i]);
            start = i;
        }
    }
    words.push(&key[start..]);

    // Repeated separators leave empty pieces behind
    words.retain(|w| !w.is_empty());
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(format_label("videoUrl"), "Video Url");
        assert_eq!(format_label("videoAwardYear"), "Video Award Year");
        assert_eq!(format_label("awards"), "Awards");
    }

    #[test]
    fn test_separators() {
        assert_eq!(format_label("release_date"), "Release Date");
        assert_eq!(format_label("multi-word-key"), "Multi Word Key");
        assert_eq!(format_label("director_of-photography"), "Director Of Photography");
    }

    #[test]
    fn test_lowercases_rest_of_word() {
        assert_eq!(format_label("CLIENT_NAME"), "C L I E N T N A M E");
        assert_eq!(format_label("Client"), "Client");
        assert_eq!(format_label("year"), "Year");
    }

    #[test]
    fn test_degenerate_keys() {
        assert_eq!(format_label(""), "");
        assert_eq!(format_label("__"), "");
        assert_eq!(format_label("a__b"), "A B");
        assert_eq!(format_label("_lead"), "Lead");
    }
}
