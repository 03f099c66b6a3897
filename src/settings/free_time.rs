//! Free-time window settings.

use serde::{Deserialize, Serialize};

use super::{SettingsSection, ValidationIssue};

/// Longest window accepted by validation: one day.
pub const MAX_WINDOW_MINUTES: u32 = 24 * 60;

/// The range of idle minutes between trips that counts as free time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeTimeConfig {
    /// Shortest gap worth planning for, in minutes
    pub min_minutes: u32,
    /// Longest gap considered, in minutes
    pub max_minutes: u32,
    /// Remind the user when a free window starts
    pub reminder_enabled: bool,
}

impl Default for FreeTimeConfig {
    fn default() -> Self {
        Self {
            min_minutes: 30,
            max_minutes: 120,
            reminder_enabled: true,
        }
    }
}

impl SettingsSection for FreeTimeConfig {
    const SECTION: &'static str = "free_time";

    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.min_minutes > self.max_minutes {
            issues.push(ValidationIssue::new(
                Self::SECTION,
                "min_minutes",
                format!(
                    "must not exceed max_minutes ({} > {})",
                    self.min_minutes, self.max_minutes
                ),
            ));
        }

        if self.max_minutes > MAX_WINDOW_MINUTES {
            issues.push(ValidationIssue::new(
                Self::SECTION,
                "max_minutes",
                format!("must be at most {MAX_WINDOW_MINUTES} (one day)"),
            ));
        }

        issues
    }
}
