//! Settings management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::settings::validation::describe_issues;
use crate::settings::{
    open_store, MapProvider, NullView, SettingsScreen, SettingsStore, SummaryView, TransportMode,
};
use clap::{Args, Subcommand};

/// Settings management commands
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Subcommand, Debug)]
enum SettingsCommand {
    /// Display current settings
    Show(SettingsShowArgs),
    /// Change settings
    Set(SettingsSetArgs),
    /// Restore default settings
    Reset,
}

/// Display current settings
#[derive(Args, Debug)]
pub struct SettingsShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change settings
#[derive(Args, Debug, Default)]
pub struct SettingsSetArgs {
    /// Map provider (amap or bmap)
    #[arg(long, value_name = "PROVIDER")]
    provider: Option<String>,

    /// API key for the selected provider (or --provider, when given)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Show live traffic (true or false)
    #[arg(long, value_name = "BOOL")]
    traffic: Option<bool>,

    /// Use downloaded map data only (true or false)
    #[arg(long, value_name = "BOOL")]
    offline: Option<bool>,

    /// Shortest free-time window in minutes
    #[arg(long, value_name = "MINUTES")]
    min_free: Option<u32>,

    /// Longest free-time window in minutes
    #[arg(long, value_name = "MINUTES")]
    max_free: Option<u32>,

    /// Free-time reminders (true or false)
    #[arg(long, value_name = "BOOL")]
    reminder: Option<bool>,

    /// Default transport mode (walk, bus, subway, drive)
    #[arg(long, value_name = "MODE")]
    default_mode: Option<String>,

    /// Available transport modes, comma separated
    #[arg(long, value_name = "MODES", value_delimiter = ',')]
    modes: Option<Vec<String>>,

    /// Real-time transit data (true or false)
    #[arg(long, value_name = "BOOL")]
    real_time: Option<bool>,

    /// Distance under which walking is suggested, in meters
    #[arg(long, value_name = "METERS")]
    distance_threshold: Option<u32>,
}

impl SettingsArgs {
    /// Execute settings subcommand
    pub fn execute(&self) -> CliResult<()> {
        let store = open_configured_store()?;
        match &self.command {
            SettingsCommand::Show(args) => args.execute(store),
            SettingsCommand::Set(args) => args.execute(store),
            SettingsCommand::Reset => reset(store),
        }
    }
}

/// Opens the store named in the config file.
fn open_configured_store() -> CliResult<Box<dyn SettingsStore>> {
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    open_store(&config.storage)
        .map_err(|e| CliError::io(format!("Failed to open settings store: {e:#}")))
}

impl SettingsShowArgs {
    /// Execute show command
    pub fn execute(&self, store: Box<dyn SettingsStore>) -> CliResult<()> {
        let screen = SettingsScreen::init(store, SummaryView::default())
            .map_err(|e| CliError::io(format!("Failed to load settings: {e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&screen.snapshot())
                .map_err(|e| CliError::io(format!("Failed to serialize settings to JSON: {e}")))?;
            println!("{json}");
        } else {
            let title = format!("{APP_NAME} Settings");
            println!("{title}");
            println!("{}", "=".repeat(title.len()));
            println!();
            print!("{}", screen.view().text());
            println!();
            println!("Store: {}", screen.store().name());
        }

        Ok(())
    }
}

impl SettingsSetArgs {
    /// Execute set command
    pub fn execute(&self, store: Box<dyn SettingsStore>) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one setting must be specified: --provider, --api-key, --traffic, \
                 --offline, --min-free, --max-free, --reminder, --default-mode, --modes, \
                 --real-time, or --distance-threshold",
            ));
        }

        let mut screen = SettingsScreen::init(store, NullView)
            .map_err(|e| CliError::io(format!("Failed to load settings: {e:#}")))?;

        self.apply(&mut screen)?;

        let issues = screen.validate();
        if !issues.is_empty() {
            return Err(CliError::validation(format!(
                "Settings are invalid:\n{}",
                describe_issues(&issues)
            )));
        }

        screen
            .save()
            .map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))?;

        println!("Settings updated successfully.");
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.provider.is_none()
            && self.api_key.is_none()
            && self.traffic.is_none()
            && self.offline.is_none()
            && self.min_free.is_none()
            && self.max_free.is_none()
            && self.reminder.is_none()
            && self.default_mode.is_none()
            && self.modes.is_none()
            && self.real_time.is_none()
            && self.distance_threshold.is_none()
    }

    /// Applies every given option to the screen's containers.
    fn apply<S: SettingsStore>(&self, screen: &mut SettingsScreen<S>) -> CliResult<()> {
        if let Some(provider) = &self.provider {
            screen.map_provider.provider = provider
                .parse::<MapProvider>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(key) = &self.api_key {
            let provider = screen.map_provider.provider;
            screen.map_provider.set_api_key(provider, key.as_str());
        }
        if let Some(traffic) = self.traffic {
            screen.map_provider.traffic_enabled = traffic;
        }
        if let Some(offline) = self.offline {
            screen.map_provider.offline_mode = offline;
        }

        if let Some(min) = self.min_free {
            screen.free_time.min_minutes = min;
        }
        if let Some(max) = self.max_free {
            screen.free_time.max_minutes = max;
        }
        if let Some(reminder) = self.reminder {
            screen.free_time.reminder_enabled = reminder;
        }

        if let Some(mode) = &self.default_mode {
            screen.transport.default_mode = parse_mode(mode)?;
        }
        if let Some(modes) = &self.modes {
            screen.transport.available_modes = modes
                .iter()
                .map(|m| parse_mode(m))
                .collect::<CliResult<Vec<_>>>()?;
        }
        if let Some(real_time) = self.real_time {
            screen.transport.real_time_enabled = real_time;
        }
        if let Some(meters) = self.distance_threshold {
            screen.transport.distance_threshold_meters = meters;
        }

        Ok(())
    }
}

fn parse_mode(mode: &str) -> CliResult<TransportMode> {
    mode.parse::<TransportMode>()
        .map_err(|e| CliError::validation(e.to_string()))
}

/// Clears stored settings without reading them.
fn reset(store: Box<dyn SettingsStore>) -> CliResult<()> {
    let mut screen = SettingsScreen::with_defaults(store, NullView);
    screen
        .reset_all()
        .map_err(|e| CliError::io(format!("Failed to reset settings: {e:#}")))?;

    println!("Settings reset to defaults.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_set_args_empty() {
        assert!(SettingsSetArgs::default().is_empty());
        let args = SettingsSetArgs {
            reminder: Some(false),
            ..SettingsSetArgs::default()
        };
        assert!(!args.is_empty());
    }

    #[test]
    fn test_apply_updates_containers() {
        let mut screen = SettingsScreen::init(MemoryStore::new(), NullView).unwrap();
        let args = SettingsSetArgs {
            provider: Some("baidu".to_string()),
            api_key: Some("k-123".to_string()),
            traffic: Some(true),
            offline: Some(true),
            max_free: Some(90),
            modes: Some(vec!["bus".to_string(), "metro".to_string()]),
            default_mode: Some("bus".to_string()),
            distance_threshold: Some(1500),
            ..SettingsSetArgs::default()
        };

        args.apply(&mut screen).unwrap();

        assert_eq!(screen.map_provider.provider, MapProvider::BMap);
        assert_eq!(screen.map_provider.api_key(MapProvider::BMap), "k-123");
        assert_eq!(screen.map_provider.api_key(MapProvider::AMap), "");
        assert!(screen.map_provider.traffic_enabled);
        assert!(screen.map_provider.offline_mode);
        assert_eq!(screen.transport.distance_threshold_meters, 1500);
        assert_eq!(screen.free_time.max_minutes, 90);
        assert_eq!(
            screen.transport.available_modes,
            vec![TransportMode::Bus, TransportMode::Subway]
        );
        assert_eq!(screen.transport.default_mode, TransportMode::Bus);
        assert!(screen.validate().is_empty());
    }

    #[test]
    fn test_apply_rejects_unknown_mode() {
        let mut screen = SettingsScreen::init(MemoryStore::new(), NullView).unwrap();
        let args = SettingsSetArgs {
            modes: Some(vec!["walk".to_string(), "teleport".to_string()]),
            ..SettingsSetArgs::default()
        };

        let err = args.apply(&mut screen).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.message.contains("teleport"));
    }
}
