//! Map provider selection.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{SettingsSection, ValidationIssue};

/// Supported map providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MapProvider {
    /// AMap (Gaode)
    #[default]
    #[serde(rename = "amap")]
    AMap,
    /// Baidu Map
    #[serde(rename = "bmap")]
    BMap,
}

impl MapProvider {
    /// All providers.
    pub const ALL: [Self; 2] = [Self::AMap, Self::BMap];

    /// Stored identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AMap => "amap",
            Self::BMap => "bmap",
        }
    }

    /// Display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::AMap => "AMap (Gaode)",
            Self::BMap => "Baidu Map",
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MapProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "amap" | "gaode" => Ok(Self::AMap),
            "bmap" | "baidu" => Ok(Self::BMap),
            other => anyhow::bail!("Invalid map provider '{other}'. Must be 'amap' or 'bmap'"),
        }
    }
}

/// How a stored API key looks before any network check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyStatus {
    /// No key stored
    NotSet,
    /// Key is present and well formed
    Present,
    /// Key contains characters a provider never issues
    Malformed,
}

impl ApiKeyStatus {
    /// Classifies `key`.
    #[must_use]
    pub fn of(key: &str) -> Self {
        if key.is_empty() {
            Self::NotSet
        } else if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Self::Malformed
        } else {
            Self::Present
        }
    }
}

impl fmt::Display for ApiKeyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotSet => "not set",
            Self::Present => "set",
            Self::Malformed => "malformed",
        })
    }
}

/// Map provider settings.
///
/// Each provider keeps its own key so switching providers does not lose the
/// other one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapProviderConfig {
    /// Which provider to use
    pub provider: MapProvider,
    /// AMap API key
    pub amap_api_key: String,
    /// Baidu Map API key
    pub bmap_api_key: String,
    /// Overlay live traffic on routes
    pub traffic_enabled: bool,
    /// Use downloaded map data instead of the network
    pub offline_mode: bool,
}

impl MapProviderConfig {
    /// Stored key for `provider`.
    #[must_use]
    pub fn api_key(&self, provider: MapProvider) -> &str {
        match provider {
            MapProvider::AMap => &self.amap_api_key,
            MapProvider::BMap => &self.bmap_api_key,
        }
    }

    /// Replaces the key for `provider`.
    pub fn set_api_key(&mut self, provider: MapProvider, key: impl Into<String>) {
        let slot = match provider {
            MapProvider::AMap => &mut self.amap_api_key,
            MapProvider::BMap => &mut self.bmap_api_key,
        };
        *slot = key.into();
    }

    /// Key of the selected provider.
    #[must_use]
    pub fn active_api_key(&self) -> &str {
        self.api_key(self.provider)
    }

    /// Status of the selected provider's key.
    #[must_use]
    pub fn key_status(&self) -> ApiKeyStatus {
        ApiKeyStatus::of(self.active_api_key())
    }

    /// Active API key with all but the last four characters masked, for display.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.active_api_key().chars().collect();
        let visible = chars.len().min(4);
        let hidden = chars.len() - visible;
        let tail: String = chars[hidden..].iter().collect();
        format!("{}{tail}", "*".repeat(hidden))
    }
}

impl SettingsSection for MapProviderConfig {
    const SECTION: &'static str = "map_provider";

    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.traffic_enabled && self.active_api_key().trim().is_empty() {
            issues.push(ValidationIssue::new(
                Self::SECTION,
                key_field(self.provider),
                format!(
                    "an API key for {} is required when traffic is enabled",
                    self.provider.display_name()
                ),
            ));
        }

        for provider in MapProvider::ALL {
            if ApiKeyStatus::of(self.api_key(provider)) == ApiKeyStatus::Malformed {
                issues.push(ValidationIssue::new(
                    Self::SECTION,
                    key_field(provider),
                    "must not contain whitespace",
                ));
            }
        }

        issues
    }
}

const fn key_field(provider: MapProvider) -> &'static str {
    match provider {
        MapProvider::AMap => "amap_api_key",
        MapProvider::BMap => "bmap_api_key",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::NoopStore;

    #[test]
    fn test_defaults() {
        let config = MapProviderConfig::default();
        assert_eq!(config.provider, MapProvider::AMap);
        assert_eq!(config.active_api_key(), "");
        assert_eq!(config.key_status(), ApiKeyStatus::NotSet);
        assert!(!config.traffic_enabled);
        assert!(!config.offline_mode);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!("amap".parse::<MapProvider>().unwrap(), MapProvider::AMap);
        assert_eq!("Gaode".parse::<MapProvider>().unwrap(), MapProvider::AMap);
        assert_eq!(" BMAP ".parse::<MapProvider>().unwrap(), MapProvider::BMap);
        assert_eq!("baidu".parse::<MapProvider>().unwrap(), MapProvider::BMap);
        assert!("google".parse::<MapProvider>().is_err());

        for provider in MapProvider::ALL {
            assert_eq!(provider.id().parse::<MapProvider>().unwrap(), provider);
        }
    }

    #[test]
    fn test_keys_are_kept_per_provider() {
        let mut config = MapProviderConfig::default();
        config.set_api_key(MapProvider::AMap, "amap-key");
        config.set_api_key(MapProvider::BMap, "bmap-key");

        assert_eq!(config.active_api_key(), "amap-key");
        config.provider = MapProvider::BMap;
        assert_eq!(config.active_api_key(), "bmap-key");
        assert_eq!(config.api_key(MapProvider::AMap), "amap-key");
    }

    #[test]
    fn test_traffic_requires_active_key() {
        let mut config = MapProviderConfig {
            provider: MapProvider::BMap,
            traffic_enabled: true,
            ..MapProviderConfig::default()
        };
        config.set_api_key(MapProvider::AMap, "abc123");

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "bmap_api_key");
        assert!(issues[0].message.contains("Baidu Map"));

        config.set_api_key(MapProvider::BMap, "def456");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_api_key_whitespace_in_either_slot() {
        let config = MapProviderConfig {
            bmap_api_key: "abc 123".to_string(),
            ..MapProviderConfig::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "bmap_api_key");
    }

    #[test]
    fn test_key_status() {
        assert_eq!(ApiKeyStatus::of(""), ApiKeyStatus::NotSet);
        assert_eq!(ApiKeyStatus::of("k-123"), ApiKeyStatus::Present);
        assert_eq!(ApiKeyStatus::of("k 123"), ApiKeyStatus::Malformed);
        assert_eq!(ApiKeyStatus::of("k\t"), ApiKeyStatus::Malformed);
        assert_eq!(ApiKeyStatus::Malformed.to_string(), "malformed");
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = MapProviderConfig::default();
        assert_eq!(config.masked_api_key(), "");

        config.set_api_key(MapProvider::AMap, "abc");
        assert_eq!(config.masked_api_key(), "abc");

        config.set_api_key(MapProvider::AMap, "0123456789");
        assert_eq!(config.masked_api_key(), "******6789");
    }

    #[test]
    fn test_noop_save_then_load_keeps_values() {
        let mut config = MapProviderConfig {
            provider: MapProvider::BMap,
            traffic_enabled: true,
            offline_mode: true,
            ..MapProviderConfig::default()
        };
        config.set_api_key(MapProvider::BMap, "k-123");
        let expected = config.clone();

        config.save(&mut NoopStore).unwrap();
        config.load(&NoopStore).unwrap();

        assert_eq!(config, expected);
    }

    #[test]
    fn test_old_sections_load_with_new_fields_defaulted() {
        let config: MapProviderConfig =
            toml::from_str("provider = \"bmap\"\ntraffic_enabled = false").unwrap();
        assert_eq!(config.provider, MapProvider::BMap);
        assert!(!config.offline_mode);
        assert_eq!(config.bmap_api_key, "");
    }
}
