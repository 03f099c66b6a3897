//! Export command for writing the style document and Kotlin scaffold.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, ExportConfig};
use crate::export;
use crate::models::{MODERN_LAYOUT, MONET_PALETTE};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// Export the UI style document and Kotlin scaffold
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output directory (defaults to export.output_dir from the config file)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// File name of the JSON style document
    #[arg(long, value_name = "NAME")]
    pub spec_name: Option<String>,

    /// File name of the generated Kotlin source
    #[arg(long, value_name = "NAME")]
    pub source_name: Option<String>,

    /// Print the written paths as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ExportOutput {
    spec: String,
    source: String,
    bytes_written: usize,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        });

        let (options, out_dir) = self.resolve_options(&config);

        let mut check = config.clone();
        check.export = options.clone();
        check
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid export options: {e}")))?;

        let report = export::export_style(&MONET_PALETTE, &MODERN_LAYOUT, &out_dir, &options)
            .map_err(|e| CliError::io(format!("Failed to export style: {e:#}")))?;

        if self.json {
            let output = ExportOutput {
                spec: report.spec_path.to_string_lossy().to_string(),
                source: report.source_path.to_string_lossy().to_string(),
                bytes_written: report.bytes_written,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize report: {e}")))?;
            println!("{json}");
        } else {
            println!("✓ Wrote style document: {}", report.spec_path.display());
            println!("✓ Wrote Kotlin scaffold: {}", report.source_path.display());
        }

        Ok(())
    }

    /// Merges command-line overrides over the configured export options.
    fn resolve_options(&self, config: &Config) -> (ExportConfig, PathBuf) {
        let mut options = config.export.clone();
        if let Some(name) = &self.spec_name {
            options.spec_file_name.clone_from(name);
        }
        if let Some(name) = &self.source_name {
            options.source_file_name.clone_from(name);
        }
        let out_dir = self
            .out_dir
            .clone()
            .unwrap_or_else(|| options.output_dir.clone());
        options.output_dir.clone_from(&out_dir);
        (options, out_dir)
    }
}
