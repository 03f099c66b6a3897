//! Export of the UI style tables.
//!
//! This module renders the palette and layout tables into two artifacts: a
//! structured JSON style document and a generated Kotlin UI scaffold, and writes
//! them to an output directory.

pub mod kotlin_scaffold;
pub mod style_json;
pub mod writer;

pub use kotlin_scaffold::{render_kotlin_scaffold, ScaffoldTemplate};
pub use style_json::{parse_style_json, render_style_json, StyleDocument};
pub use writer::{export_style, ExportReport, StyleArtifacts};
