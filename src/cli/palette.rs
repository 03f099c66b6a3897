//! Palette command: lists the color and layout tables.

use crate::cli::common::{CliError, CliResult};
use crate::export::{render_style_json, StyleDocument};
use crate::models::{ColorPalette, LayoutSpec, MetricValue, MODERN_LAYOUT, MONET_PALETTE};
use clap::Args;
use std::fmt::Write as _;

/// Show the color palette and layout metrics
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Output the style document as JSON
    #[arg(long)]
    pub json: bool,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        if self.json {
            let doc = StyleDocument::from_tables(&MONET_PALETTE, &MODERN_LAYOUT);
            let json = render_style_json(&doc)
                .map_err(|e| CliError::io(format!("Failed to render style document: {e:#}")))?;
            print!("{json}");
        } else {
            print!("{}", format_tables(&MONET_PALETTE, &MODERN_LAYOUT));
        }
        Ok(())
    }
}

/// Formats both tables for the terminal.
fn format_tables(palette: &ColorPalette, layout: &LayoutSpec) -> String {
    let mut out = String::from("Colors:\n");
    for (role, color) in palette.iter() {
        let tone = if color.is_dark() { "dark" } else { "light" };
        let _ = writeln!(
            out,
            "  {:<16} {}  {:<5}  {}",
            role.key(),
            color,
            tone,
            role.description()
        );
    }

    out.push_str("\nLayout:\n");
    for spec in layout.iter() {
        let _ = writeln!(out, "  {}:", spec.component);
        for metric in spec.metrics {
            let value = metric.value.resolve(palette);
            match metric.value {
                MetricValue::Color(role) => {
                    let _ = writeln!(out, "    {:<22} {value} (colors.{role})", metric.name);
                }
                MetricValue::Dimension(_) => {
                    let _ = writeln!(out, "    {:<22} {value}", metric.name);
                }
            }
        }
    }
    out
}
