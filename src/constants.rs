//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and default file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Travel Plan UI";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "TravelPlan";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TRAVELPLAN_CONFIG_DIR";

/// Default file name of the exported JSON style document.
pub const DEFAULT_SPEC_FILE_NAME: &str = "travel_plan_ui_spec.json";

/// Default file name of the generated Kotlin scaffold.
pub const DEFAULT_SOURCE_FILE_NAME: &str = "TravelPlanUi.kt";
