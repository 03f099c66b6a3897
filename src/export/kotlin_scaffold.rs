//! Kotlin UI scaffold generation.
//!
//! The scaffold is a fixed template with `{{section.key}}` placeholders. Values are
//! substituted from a [`StyleDocument`]; an unknown placeholder is an error.

use anyhow::{Context, Result};
use regex::Regex;

use super::StyleDocument;

/// Embedded scaffold template.
const UI_SCAFFOLD_TEMPLATE: &str = include_str!("templates/ui_scaffold.kt.tmpl");

/// Placeholder syntax: `{{ section.key }}`, whitespace inside the braces is optional.
const PLACEHOLDER_PATTERN: &str = r"\{\{\s*([a-z_]+\.[a-z_]+)\s*\}\}";

/// A template with `{{section.key}}` placeholders.
#[derive(Debug)]
pub struct ScaffoldTemplate<'a> {
    source: &'a str,
    placeholder: Regex,
}

impl ScaffoldTemplate<'static> {
    /// The built-in Kotlin UI scaffold.
    pub fn builtin() -> Result<Self> {
        Self::new(UI_SCAFFOLD_TEMPLATE)
    }
}

impl<'a> ScaffoldTemplate<'a> {
    /// Wraps template source text.
    pub fn new(source: &'a str) -> Result<Self> {
        let placeholder =
            Regex::new(PLACEHOLDER_PATTERN).context("Failed to compile placeholder pattern")?;
        Ok(Self {
            source,
            placeholder,
        })
    }

    /// Substitutes every placeholder with its value from `doc`.
    ///
    /// # Errors
    ///
    /// Returns an error naming every placeholder that has no value in `doc`.
    pub fn render(&self, doc: &StyleDocument) -> Result<String> {
        let mut output = String::with_capacity(self.source.len());
        let mut missing = Vec::new();
        let mut last = 0;

        for caps in self.placeholder.captures_iter(self.source) {
            let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            output.push_str(&self.source[last..whole.start()]);
            match doc.lookup(key.as_str()) {
                Some(value) => output.push_str(value),
                None => missing.push(key.as_str()),
            }
            last = whole.end();
        }
        output.push_str(&self.source[last..]);

        if !missing.is_empty() {
            anyhow::bail!(
                "Template references unknown style keys: {}",
                missing.join(", ")
            );
        }

        Ok(output)
    }
}

/// Renders the built-in Kotlin scaffold for `doc`.
pub fn render_kotlin_scaffold(doc: &StyleDocument) -> Result<String> {
    ScaffoldTemplate::builtin()?.render(doc)
}
