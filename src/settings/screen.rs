//! The settings screen: composes the three containers over one store.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::info;

use super::validation::describe_issues;
use super::{
    ApiKeyStatus, FreeTimeConfig, MapProviderConfig, SettingsSection, SettingsStore,
    TransportConfig, ValidationIssue,
};

/// Receives the current settings whenever the screen refreshes.
pub trait SettingsView {
    /// Shows the given settings.
    fn update_ui(
        &mut self,
        map_provider: &MapProviderConfig,
        free_time: &FreeTimeConfig,
        transport: &TransportConfig,
    );
}

/// A view that shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl SettingsView for NullView {
    fn update_ui(&mut self, _: &MapProviderConfig, _: &FreeTimeConfig, _: &TransportConfig) {}
}

/// A view that renders a plain-text summary.
#[derive(Debug, Clone, Default)]
pub struct SummaryView {
    text: String,
}

impl SummaryView {
    /// The most recently rendered summary.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl SettingsView for SummaryView {
    fn update_ui(
        &mut self,
        map_provider: &MapProviderConfig,
        free_time: &FreeTimeConfig,
        transport: &TransportConfig,
    ) {
        let mut out = String::new();
        let yes_no = |b: bool| if b { "on" } else { "off" };

        out.push_str("Map Provider:\n");
        let _ = writeln!(
            out,
            "  Provider: {} ({})",
            map_provider.provider.display_name(),
            map_provider.provider
        );
        match map_provider.key_status() {
            ApiKeyStatus::NotSet => out.push_str("  API Key: (not set)\n"),
            status => {
                let _ = writeln!(
                    out,
                    "  API Key: {} ({status})",
                    map_provider.masked_api_key()
                );
            }
        }
        let _ = writeln!(out, "  Traffic: {}", yes_no(map_provider.traffic_enabled));
        let _ = writeln!(out, "  Offline Mode: {}", yes_no(map_provider.offline_mode));
        out.push('\n');

        out.push_str("Free Time:\n");
        let _ = writeln!(
            out,
            "  Window: {}-{} minutes",
            free_time.min_minutes, free_time.max_minutes
        );
        let _ = writeln!(out, "  Reminder: {}", yes_no(free_time.reminder_enabled));
        out.push('\n');

        out.push_str("Transport:\n");
        let _ = writeln!(out, "  Default Mode: {}", transport.default_mode);
        let modes: Vec<&str> = transport.available_modes.iter().map(|m| m.id()).collect();
        let _ = writeln!(out, "  Available Modes: {}", modes.join(", "));
        let _ = writeln!(out, "  Real-time: {}", yes_no(transport.real_time_enabled));
        let _ = writeln!(
            out,
            "  Walking Distance: {} m",
            transport.distance_threshold_meters
        );

        self.text = out;
    }
}

/// All three containers together, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// Map provider settings
    pub map_provider: MapProviderConfig,
    /// Free-time window
    pub free_time: FreeTimeConfig,
    /// Transport preferences
    pub transport: TransportConfig,
}

/// Composition root for the settings containers.
///
/// `init` builds default containers, loads each from the store and hands them to
/// the view. `save` validates and writes all containers back in one store call.
#[derive(Debug)]
pub struct SettingsScreen<S: SettingsStore, V: SettingsView = NullView> {
    store: S,
    view: V,
    /// Map provider settings
    pub map_provider: MapProviderConfig,
    /// Free-time window
    pub free_time: FreeTimeConfig,
    /// Transport preferences
    pub transport: TransportConfig,
}

impl<S: SettingsStore, V: SettingsView> SettingsScreen<S, V> {
    /// Constructs the containers, loads them, and refreshes the view.
    pub fn init(store: S, view: V) -> Result<Self> {
        let mut screen = Self::with_defaults(store, view);
        screen.load()?;
        screen.update_ui();
        Ok(screen)
    }

    /// Constructs default containers without reading the store.
    #[must_use]
    pub fn with_defaults(store: S, view: V) -> Self {
        Self {
            store,
            view,
            map_provider: MapProviderConfig::default(),
            free_time: FreeTimeConfig::default(),
            transport: TransportConfig::default(),
        }
    }

    /// Reloads every container from the store.
    pub fn load(&mut self) -> Result<()> {
        self.map_provider.load(&self.store)?;
        self.free_time.load(&self.store)?;
        self.transport.load(&self.store)?;
        Ok(())
    }

    /// Pushes the current settings to the view.
    pub fn update_ui(&mut self) {
        self.view
            .update_ui(&self.map_provider, &self.free_time, &self.transport);
    }

    /// Collects validation issues from every container.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = self.map_provider.validate();
        issues.extend(self.free_time.validate());
        issues.extend(self.transport.validate());
        issues
    }

    /// Validates and saves every container.
    ///
    /// # Errors
    ///
    /// Returns an error listing every issue if any container is invalid; nothing
    /// is written in that case. Store failures are returned as-is.
    pub fn save(&mut self) -> Result<()> {
        let issues = self.validate();
        if !issues.is_empty() {
            anyhow::bail!("Settings are invalid:\n{}", describe_issues(&issues));
        }

        self.store.save_sections(vec![
            (MapProviderConfig::SECTION, self.map_provider.to_value()?),
            (FreeTimeConfig::SECTION, self.free_time.to_value()?),
            (TransportConfig::SECTION, self.transport.to_value()?),
        ])?;
        info!(store = self.store.name(), "settings saved");
        Ok(())
    }

    /// Clears the store and puts every container back to its defaults.
    ///
    /// Stored values are never read, so this also recovers from a store whose
    /// contents no longer parse.
    pub fn reset_all(&mut self) -> Result<()> {
        self.store.clear()?;
        self.map_provider = MapProviderConfig::default();
        self.free_time = FreeTimeConfig::default();
        self.transport = TransportConfig::default();
        info!(store = self.store.name(), "settings reset");
        self.update_ui();
        Ok(())
    }

    /// Copies the current settings.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            map_provider: self.map_provider.clone(),
            free_time: self.free_time.clone(),
            transport: self.transport.clone(),
        }
    }

    /// The attached view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
