// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio project records.
//!
//! A project has a fixed set of fields the router relies on, plus any number
//! of free-form fields (`awards`, `year`, `client`, ...) that are shown on the
//! detail page as label/value pairs in the order they appear in the source data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields that drive navigation and media and are never listed as details.
pub const ESSENTIAL_FIELDS: [&str; 6] = ["id", "title", "category", "thumbnail", "videoUrl", "featured"];

/// One portfolio item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub video_url: String,
    #[serde(default)]
    pub featured: bool,
    /// Everything else in the record, in source order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Project {
    /// Create a project with no free-form fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        thumbnail: impl Into<String>,
        video_url: impl Into<String>,
        featured: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            thumbnail: thumbnail.into(),
            video_url: video_url.into(),
            featured,
            extra: IndexMap::new(),
        }
    }

    /// Builder-style helper to attach a free-form field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Free-form fields that should appear in the details block.
    ///
    /// Essential fields are excluded even if they were inserted into `extra`
    /// by hand, and empty values (`null`, `false`, `0`, `""`) are skipped.
    pub fn detail_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.extra
            .iter()
            .filter(|(key, _)| !ESSENTIAL_FIELDS.contains(&key.as_str()))
            .filter(|(_, value)| is_truthy(value))
            .map(|(key, value)| (key.as_str(), value))
    }
}

/// Whether a free-form value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Plain text form of a free-form value, before any HTML escaping.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // Whole floats print without a trailing `.0`
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_extra_fields_in_order() {
        let project: Project = serde_json::from_value(json!({
            "id": "night-swim",
            "title": "Night Swim",
            "category": "narrative",
            "thumbnail": "media/night-swim.mp4",
            "videoUrl": "https://vimeo.com/1",
            "featured": true,
            "year": 2023,
            "client": "Indie",
            "awards": "Best Short\nBest Score"
        }))
        .unwrap();

        assert_eq!(project.video_url, "https://vimeo.com/1");
        assert!(project.featured);
        let keys: Vec<&str> = project.extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["year", "client", "awards"]);
    }

    #[test]
    fn test_featured_defaults_to_false() {
        let project: Project = serde_json::from_value(json!({
            "id": "a", "title": "A", "category": "commercial",
            "thumbnail": "a.gif", "videoUrl": "https://example.com/a"
        }))
        .unwrap();
        assert!(!project.featured);
        assert!(project.extra.is_empty());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let project = Project::new("a", "A", "commercial", "a.gif", "https://example.com/a", false)
            .with_field("releaseDate", "2024");
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["videoUrl"], "https://example.com/a");
        assert_eq!(value["releaseDate"], "2024");
    }

    #[test]
    fn test_detail_fields_skip_essential_and_empty() {
        let project = Project::new("a", "A", "commercial", "a.gif", "https://example.com/a", true)
            .with_field("title", "Sneaky")
            .with_field("client", "Acme")
            .with_field("notes", "")
            .with_field("budget", 0)
            .with_field("archived", false)
            .with_field("year", 2021);

        let fields: Vec<&str> = project.detail_fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["client", "year"]);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("Acme")), "Acme");
        assert_eq!(display_value(&json!(2021)), "2021");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a", 1, null])), "a,1,");
        assert_eq!(display_value(&json!({"k": 1})), "{\"k\":1}");
    }

    #[test]
    fn test_display_value_whole_floats() {
        let project: Project = serde_json::from_str(
            r#"{"id":"a","title":"A","category":"commercial","thumbnail":"a.mp4","videoUrl":"u","budget":1e3,"year":2023.0,"ratio":2.39}"#,
        )
        .unwrap();
        assert_eq!(display_value(&project.extra["budget"]), "1000");
        assert_eq!(display_value(&project.extra["year"]), "2023");
        assert_eq!(display_value(&project.extra["ratio"]), "2.39");
        assert_eq!(display_value(&json!(-4.0)), "-4");
        assert_eq!(display_value(&json!([1.0, 1.5])), "1,1.5");
    }
}
