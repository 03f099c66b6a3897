//! Travel Plan UI - style export and settings tool
//!
//! Writes the UI style document and Kotlin scaffold for the travel planner's
//! Android client, and manages its persisted settings.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travelplan_ui::cli::{CliResult, ConfigArgs, ExportArgs, PaletteArgs, SettingsArgs};

/// Travel Plan UI - style export and settings tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the style document and Kotlin scaffold
    Export(ExportArgs),
    /// Print the palette and layout metrics
    Palette(PaletteArgs),
    /// Show or change persisted settings
    Settings(SettingsArgs),
    /// Show or change the configuration file
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Export(args) => args.execute(),
            Self::Palette(args) => args.execute(),
            Self::Settings(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays machine readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
