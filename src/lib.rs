//! Travel Plan UI Library
//!
//! This library provides the style exporter for the travel planner's Android
//! client (palette, layout metrics, JSON document and Kotlin scaffold) and the
//! persisted settings containers behind its settings screen.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod settings;
