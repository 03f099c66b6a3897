//! Writes the style artifacts to disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{render_kotlin_scaffold, render_style_json, StyleDocument};
use crate::config::ExportConfig;
use crate::models::{ColorPalette, LayoutSpec};

/// Rendered artifacts, before they touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleArtifacts {
    /// JSON style document
    pub spec_json: String,
    /// Generated Kotlin source
    pub kotlin_source: String,
}

impl StyleArtifacts {
    /// Renders both artifacts from the palette and layout tables.
    pub fn render(palette: &ColorPalette, layout: &LayoutSpec) -> Result<Self> {
        let doc = StyleDocument::from_tables(palette, layout);
        Ok(Self {
            spec_json: render_style_json(&doc)?,
            kotlin_source: render_kotlin_scaffold(&doc)?,
        })
    }
}

/// Paths of the files written by [`export_style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Path of the JSON style document
    pub spec_path: PathBuf,
    /// Path of the Kotlin scaffold
    pub source_path: PathBuf,
    /// Total bytes written
    pub bytes_written: usize,
}

/// Renders the artifacts and writes them into `out_dir`.
///
/// The directory is created if missing. Each file is written atomically.
///
/// # Errors
///
/// Returns errors for:
/// - Rendering failures (unknown template keys)
/// - Directory creation or write failures
/// - Atomic rename failures
pub fn export_style(
    palette: &ColorPalette,
    layout: &LayoutSpec,
    out_dir: &Path,
    options: &ExportConfig,
) -> Result<ExportReport> {
    let artifacts = StyleArtifacts::render(palette, layout)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let spec_path = out_dir.join(&options.spec_file_name);
    let source_path = out_dir.join(&options.source_file_name);

    atomic_write(&spec_path, &artifacts.spec_json)?;
    debug!(path = %spec_path.display(), "wrote style document");
    atomic_write(&source_path, &artifacts.kotlin_source)?;
    debug!(path = %source_path.display(), "wrote Kotlin scaffold");

    let bytes_written = artifacts.spec_json.len() + artifacts.kotlin_source.len();
    info!(
        spec = %spec_path.display(),
        source = %source_path.display(),
        bytes_written,
        "exported style artifacts"
    );

    Ok(ExportReport {
        spec_path,
        source_path,
        bytes_written,
    })
}

/// Performs an atomic file write using temp file + rename pattern.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
