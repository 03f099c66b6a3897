//! User settings: map provider, free-time window and transport preferences.
//!
//! Each container holds its defaults and delegates persistence to an injected
//! [`SettingsStore`]. [`SettingsScreen`] composes the three over one store.

pub mod free_time;
pub mod map_provider;
pub mod screen;
pub mod store;
pub mod transport;
pub mod validation;

pub use free_time::FreeTimeConfig;
pub use map_provider::{ApiKeyStatus, MapProvider, MapProviderConfig};
pub use screen::{NullView, SettingsScreen, SettingsSnapshot, SettingsView, SummaryView};
pub use store::{open_store, MemoryStore, NoopStore, SettingsSection, SettingsStore, TomlFileStore};
pub use transport::{TransportConfig, TransportMode};
pub use validation::ValidationIssue;
