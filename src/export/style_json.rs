//! Structured style document: `{ "colors": {...}, "layout": {...} }`.
//!
//! Keys keep the declaration order of the palette and layout tables, so the
//! serialized document is stable across runs.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{ColorPalette, LayoutSpec};

/// The exported style document with every value resolved to a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleDocument {
    /// Role key → `#RRGGBB`
    pub colors: IndexMap<String, String>,
    /// Component key → metric key → value
    pub layout: IndexMap<String, IndexMap<String, String>>,
}

impl StyleDocument {
    /// Resolves the palette and layout tables into a document.
    #[must_use]
    pub fn from_tables(palette: &ColorPalette, layout: &LayoutSpec) -> Self {
        let colors = palette
            .iter()
            .map(|(role, color)| (role.key().to_string(), color.to_hex()))
            .collect();

        let components = layout
            .iter()
            .map(|spec| {
                let metrics = spec
                    .metrics
                    .iter()
                    .map(|metric| (metric.name.to_string(), metric.value.resolve(palette)))
                    .collect();
                (spec.component.key().to_string(), metrics)
            })
            .collect();

        Self {
            colors,
            layout: components,
        }
    }

    /// Looks up a value by dotted key: `colors.<role>` or `<component>.<metric>`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let (section, name) = key.split_once('.')?;
        if section == "colors" {
            return self.colors.get(name).map(String::as_str);
        }
        self.layout
            .get(section)
            .and_then(|metrics| metrics.get(name))
            .map(String::as_str)
    }
}

/// Serializes the document as pretty JSON with 4-space indentation and a trailing newline.
pub fn render_style_json(doc: &StyleDocument) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .context("Failed to serialize style document to JSON")?;

    let mut json = String::from_utf8(buf).context("Serialized style document is not UTF-8")?;
    json.push('\n');
    Ok(json)
}

/// Parses a document previously written by [`render_style_json`].
pub fn parse_style_json(json: &str) -> Result<StyleDocument> {
    serde_json::from_str(json).context("Failed to parse style document JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MODERN_LAYOUT, MONET_PALETTE};

    fn document() -> StyleDocument {
        StyleDocument::from_tables(&MONET_PALETTE, &MODERN_LAYOUT)
    }

    #[test]
    fn test_document_resolves_tables() {
        let doc = document();
        assert_eq!(doc.colors.len(), 10);
        assert_eq!(doc.layout.len(), 5);
        assert_eq!(doc.lookup("colors.primary"), Some("#8C736F"));
        assert_eq!(doc.lookup("app_bar.color"), Some("#8C736F"));
        assert_eq!(doc.lookup("cards.padding"), Some("16dp"));
        assert_eq!(doc.lookup("text_fields.hint_color"), Some("#999EA2"));
        assert_eq!(doc.lookup("cards.color"), None);
        assert_eq!(doc.lookup("primary"), None);
    }

    #[test]
    fn test_maps_keep_declaration_order() {
        let doc = document();
        let colors: Vec<&str> = doc.colors.keys().map(String::as_str).collect();
        assert_eq!(colors.first(), Some(&"primary"));
        assert_eq!(colors.last(), Some(&"card_shadow"));

        let components: Vec<&str> = doc.layout.keys().map(String::as_str).collect();
        assert_eq!(
            components,
            ["app_bar", "bottom_navigation", "cards", "buttons", "text_fields"]
        );
        let metric_total: usize = doc.layout.values().map(IndexMap::len).sum();
        assert_eq!(metric_total, 21);
    }

    #[test]
    fn test_json_layout() {
        let json = render_style_json(&document()).unwrap();
        assert!(json.starts_with("{\n    \"colors\": {\n        \"primary\": \"#8C736F\","));
        assert!(json.ends_with("}\n"));

        // Declaration order, not alphabetical
        let primary = json.find("\"primary\"").unwrap();
        let accent = json.find("\"accent\"").unwrap();
        assert!(primary < accent);
        let app_bar = json.find("\"app_bar\"").unwrap();
        let buttons = json.find("\"buttons\"").unwrap();
        assert!(app_bar < buttons);
    }

    #[test]
    fn test_parse_back_equals_input() {
        let doc = document();
        let json = render_style_json(&doc).unwrap();
        assert_eq!(parse_style_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_parse_rejects_malformed_documents() {
        let extra = r#"{"colors": {}, "layout": {}, "ui": {}}"#;
        assert!(parse_style_json(extra).is_err());

        let missing = r#"{"colors": {}}"#;
        assert!(parse_style_json(missing).is_err());

        assert!(parse_style_json("not json").is_err());
    }
}
