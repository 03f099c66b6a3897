//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, StorageBackend};
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Default export directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// File name of the JSON style document
    #[arg(long, value_name = "NAME")]
    spec_name: Option<String>,

    /// File name of the generated Kotlin source
    #[arg(long, value_name = "NAME")]
    source_name: Option<String>,

    /// Settings storage backend (file or none)
    #[arg(long, value_name = "BACKEND")]
    backend: Option<String>,

    /// Settings file path
    #[arg(long, value_name = "PATH")]
    settings_file: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.output_dir.is_none()
            && self.spec_name.is_none()
            && self.source_name.is_none()
            && self.backend.is_none()
            && self.settings_file.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --output-dir, \
                 --spec-name, --source-name, --backend, or --settings-file",
            ));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config)?;

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");
        Ok(())
    }

    fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(dir) = &self.output_dir {
            config.export.output_dir.clone_from(dir);
        }
        if let Some(name) = &self.spec_name {
            config.export.spec_file_name.clone_from(name);
        }
        if let Some(name) = &self.source_name {
            config.export.source_file_name.clone_from(name);
        }
        if let Some(backend) = &self.backend {
            config.storage.backend = match backend.to_lowercase().as_str() {
                "file" => StorageBackend::File,
                "none" => StorageBackend::None,
                _ => {
                    return Err(CliError::validation(
                        "Invalid storage backend. Must be 'file' or 'none'",
                    ))
                }
            };
        }
        if let Some(path) = &self.settings_file {
            config.storage.settings_file = Some(path.clone());
        }
        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> CliResult<()> {
    let config_path = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e:#}")))?;
    let settings_path = config
        .storage
        .settings_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve settings path: {e:#}")))?;

    println!("Configuration ({})", config_path.display());
    println!("=============");
    println!();
    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!("  Style Document: {}", config.export.spec_file_name);
    println!("  Kotlin Source: {}", config.export.source_file_name);
    println!();
    println!("Storage:");
    let backend = match config.storage.backend {
        StorageBackend::File => "file",
        StorageBackend::None => "none",
    };
    println!("  Backend: {backend}");
    println!("  Settings File: {}", settings_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        let args = ConfigSetArgs {
            spec_name: Some("style.json".to_string()),
            backend: Some("NONE".to_string()),
            settings_file: Some(PathBuf::from("/data/prefs.toml")),
            ..ConfigSetArgs::default()
        };

        args.apply(&mut config).unwrap();

        assert_eq!(config.export.spec_file_name, "style.json");
        assert_eq!(config.storage.backend, StorageBackend::None);
        assert_eq!(
            config.storage.settings_file,
            Some(PathBuf::from("/data/prefs.toml"))
        );
    }

    #[test]
    fn test_apply_rejects_unknown_backend() {
        let mut config = Config::default();
        let args = ConfigSetArgs {
            backend: Some("sqlite".to_string()),
            ..ConfigSetArgs::default()
        };
        assert_eq!(args.apply(&mut config).unwrap_err().exit_code(), 1);
    }
}
