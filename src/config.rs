//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_SOURCE_FILE_NAME, DEFAULT_SPEC_FILE_NAME,
};

/// Style export configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the artifacts are written to
    pub output_dir: PathBuf,
    /// File name of the JSON style document
    pub spec_file_name: String,
    /// File name of the generated Kotlin scaffold
    pub source_file_name: String,
}

fn default_spec_file_name() -> String {
    DEFAULT_SPEC_FILE_NAME.to_string()
}

fn default_source_file_name() -> String {
    DEFAULT_SOURCE_FILE_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            spec_file_name: default_spec_file_name(),
            source_file_name: default_source_file_name(),
        }
    }
}

/// Which persistence backend the settings screen uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// TOML file in the config directory
    #[default]
    File,
    /// Save and load do nothing
    None,
}

/// Settings persistence configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StorageBackend,
    /// Settings file path (defaults to `<config dir>/settings.toml`)
    #[serde(default)]
    pub settings_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolves the settings file path, falling back to the config directory.
    pub fn settings_file_path(&self) -> Result<PathBuf> {
        match &self.settings_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_dir()?.join("settings.toml")),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TravelPlan/config.toml`
/// - macOS: `~/Library/Application Support/TravelPlan/config.toml`
/// - Windows: `%APPDATA%\TravelPlan\config.toml`
///
/// `TRAVELPLAN_CONFIG_DIR` replaces the directory when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Style export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Settings persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to load config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - artifact file names are non-empty plain file names
    /// - the two artifact names differ
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("spec_file_name", &self.export.spec_file_name),
            ("source_file_name", &self.export.source_file_name),
        ] {
            if name.trim().is_empty() {
                anyhow::bail!("export.{field} must not be empty");
            }
            if name.contains(['/', '\\']) || name == "." || name == ".." {
                anyhow::bail!("export.{field} must be a file name, not a path: '{name}'");
            }
        }

        if self.export.spec_file_name == self.export.source_file_name {
            anyhow::bail!(
                "export.spec_file_name and export.source_file_name must differ (both '{}')",
                self.export.spec_file_name
            );
        }

        Ok(())
    }
}
