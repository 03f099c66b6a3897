//! CLI command handlers for the travel planner UI tooling.
//!
//! This module provides headless, scriptable access to the style export,
//! the configuration file and the settings store for automation and CI use.

pub mod common;
pub mod config;
pub mod export;
pub mod palette;
pub mod settings;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use palette::PaletteArgs;
pub use settings::SettingsArgs;
