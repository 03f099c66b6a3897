//! Data models for the UI style tables.
//!
//! This module contains the fixed palette and layout tables plus the value types
//! they are built from. Models are independent of export and settings logic.

pub mod color_palette;
pub mod layout_spec;
pub mod rgb;

// Re-export all model types
pub use color_palette::{ColorPalette, ColorRole, MONET_PALETTE};
pub use layout_spec::{
    Component, ComponentSpec, Dimension, LayoutSpec, Metric, MetricValue, MODERN_LAYOUT,
};
pub use rgb::RgbColor;
