//! Transport mode preferences.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{SettingsSection, ValidationIssue};

/// A way of getting from A to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// On foot
    #[default]
    Walk,
    /// City bus
    Bus,
    /// Subway / metro
    Subway,
    /// Private car
    Drive,
}

impl TransportMode {
    /// All modes in preference order.
    pub const ALL: [Self; 4] = [Self::Walk, Self::Bus, Self::Subway, Self::Drive];

    /// Stored identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Bus => "bus",
            Self::Subway => "subway",
            Self::Drive => "drive",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TransportMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "walk" | "walking" => Ok(Self::Walk),
            "bus" => Ok(Self::Bus),
            "subway" | "metro" => Ok(Self::Subway),
            "drive" | "driving" | "car" => Ok(Self::Drive),
            other => anyhow::bail!(
                "Invalid transport mode '{other}'. Must be 'walk', 'bus', 'subway', or 'drive'"
            ),
        }
    }
}

/// One kilometer.
pub const DEFAULT_DISTANCE_THRESHOLD_METERS: u32 = 1000;

/// Transport preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Mode preselected when planning
    pub default_mode: TransportMode,
    /// Modes offered to the user, in display order
    pub available_modes: Vec<TransportMode>,
    /// Use real-time arrival data
    pub real_time_enabled: bool,
    /// Distance under which walking is suggested, in meters
    pub distance_threshold_meters: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            default_mode: TransportMode::Walk,
            available_modes: TransportMode::ALL.to_vec(),
            real_time_enabled: true,
            distance_threshold_meters: DEFAULT_DISTANCE_THRESHOLD_METERS,
        }
    }
}

impl TransportConfig {
    /// Returns true if `mode` is offered.
    #[must_use]
    pub fn is_available(&self, mode: TransportMode) -> bool {
        self.available_modes.contains(&mode)
    }
}

impl SettingsSection for TransportConfig {
    const SECTION: &'static str = "transport";

    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.available_modes.is_empty() {
            issues.push(ValidationIssue::new(
                Self::SECTION,
                "available_modes",
                "at least one mode must be available",
            ));
        }

        let mut seen = Vec::with_capacity(self.available_modes.len());
        for mode in &self.available_modes {
            if seen.contains(mode) {
                issues.push(ValidationIssue::new(
                    Self::SECTION,
                    "available_modes",
                    format!("'{mode}' is listed more than once"),
                ));
            } else {
                seen.push(*mode);
            }
        }

        if self.distance_threshold_meters == 0 {
            issues.push(ValidationIssue::new(
                Self::SECTION,
                "distance_threshold_meters",
                "must be greater than zero",
            ));
        }

        if !self.available_modes.is_empty() && !self.is_available(self.default_mode) {
            issues.push(ValidationIssue::new(
                Self::SECTION,
                "default_mode",
                format!("'{}' is not one of the available modes", self.default_mode),
            ));
        }

        issues
    }
}
