//! Persistence backends for settings containers.
//!
//! Containers never touch storage directly; they hand a TOML value for their
//! section to a [`SettingsStore`] and read it back the same way.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::ValidationIssue;
use crate::config::{StorageBackend, StorageConfig};

/// Storage collaborator behind the `save`/`load` hooks.
pub trait SettingsStore {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Reads a section. `None` means nothing has been stored for it.
    fn load_section(&self, section: &str) -> Result<Option<toml::Value>>;

    /// Replaces a section.
    fn save_section(&mut self, section: &str, value: toml::Value) -> Result<()>;

    /// Replaces several sections in one write.
    fn save_sections(&mut self, sections: Vec<(&'static str, toml::Value)>) -> Result<()> {
        for (section, value) in sections {
            self.save_section(section, value)?;
        }
        Ok(())
    }

    /// Drops every stored section without reading them first.
    fn clear(&mut self) -> Result<()>;
}

/// A settings container with defaults and a named storage section.
pub trait SettingsSection: Serialize + DeserializeOwned + Default {
    /// Section key in the store.
    const SECTION: &'static str;

    /// Reports violations of the container's intended invariants.
    fn validate(&self) -> Vec<ValidationIssue>;

    /// Serializes the container into its section value.
    fn to_value(&self) -> Result<toml::Value> {
        toml::Value::try_from(self)
            .with_context(|| format!("Failed to serialize [{}] settings", Self::SECTION))
    }

    /// Writes the container through `store`.
    fn save(&self, store: &mut dyn SettingsStore) -> Result<()> {
        store.save_section(Self::SECTION, self.to_value()?)?;
        debug!(section = Self::SECTION, store = store.name(), "saved settings");
        Ok(())
    }

    /// Replaces the container with what `store` holds; unchanged if nothing is stored.
    ///
    /// Fields missing from the stored section take their default values.
    fn load(&mut self, store: &dyn SettingsStore) -> Result<()> {
        let Some(value) = store.load_section(Self::SECTION)? else {
            debug!(section = Self::SECTION, store = store.name(), "no stored settings");
            return Ok(());
        };

        *self = value.try_into().with_context(|| {
            format!(
                "Invalid [{}] settings in {} store",
                Self::SECTION,
                store.name()
            )
        })?;

        for issue in self.validate() {
            warn!(%issue, "loaded settings failed validation");
        }
        debug!(section = Self::SECTION, store = store.name(), "loaded settings");
        Ok(())
    }
}

/// A store whose hooks do nothing: saving discards, loading finds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl SettingsStore for NoopStore {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn load_section(&self, _section: &str) -> Result<Option<toml::Value>> {
        Ok(None)
    }

    fn save_section(&mut self, _section: &str, _value: toml::Value) -> Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Process-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sections: HashMap<String, toml::Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load_section(&self, section: &str) -> Result<Option<toml::Value>> {
        Ok(self.sections.get(section).cloned())
    }

    fn save_section(&mut self, section: &str, value: toml::Value) -> Result<()> {
        self.sections.insert(section.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.sections.clear();
        Ok(())
    }
}

/// A single TOML file with one table per section.
///
/// A missing file reads as an empty store. Writes go through a temp file and
/// rename, creating the parent directory when needed.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    /// Creates a store backed by `path`. The file is not touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", self.path.display()))
    }

    fn write_table(&self, table: &toml::Table) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(table).context("Failed to serialize settings")?;
        let temp_path = self.path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp settings file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp settings file to: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl SettingsStore for TomlFileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn load_section(&self, section: &str) -> Result<Option<toml::Value>> {
        Ok(self.read_table()?.remove(section))
    }

    fn save_section(&mut self, section: &str, value: toml::Value) -> Result<()> {
        let mut table = self.read_table()?;
        table.insert(section.to_string(), value);
        self.write_table(&table)
    }

    fn save_sections(&mut self, sections: Vec<(&'static str, toml::Value)>) -> Result<()> {
        let mut table = self.read_table()?;
        for (section, value) in sections {
            table.insert(section.to_string(), value);
        }
        self.write_table(&table)
    }

    /// Deletes the backing file, even if it cannot be parsed. Missing file is not an error.
    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove settings file: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn load_section(&self, section: &str) -> Result<Option<toml::Value>> {
        (**self).load_section(section)
    }

    fn save_section(&mut self, section: &str, value: toml::Value) -> Result<()> {
        (**self).save_section(section, value)
    }

    fn save_sections(&mut self, sections: Vec<(&'static str, toml::Value)>) -> Result<()> {
        (**self).save_sections(sections)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Opens the store selected by the storage configuration.
pub fn open_store(config: &StorageConfig) -> Result<Box<dyn SettingsStore>> {
    match config.backend {
        StorageBackend::File => {
            let store = TomlFileStore::new(config.settings_file_path()?);
            debug!(path = %store.path().display(), "using settings file");
            Ok(Box::new(store))
        }
        StorageBackend::None => Ok(Box::new(NoopStore)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> toml::Value {
        let mut table = toml::Table::new();
        table.insert("min_minutes".to_string(), toml::Value::Integer(15));
        toml::Value::Table(table)
    }

    #[test]
    fn test_noop_store_forgets() {
        let mut store = NoopStore;
        store.save_section("free_time", sample()).unwrap();
        assert_eq!(store.load_section("free_time").unwrap(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_section("free_time").unwrap(), None);
        store.save_section("free_time", sample()).unwrap();
        assert_eq!(store.load_section("free_time").unwrap(), Some(sample()));
        assert_eq!(store.load_section("transport").unwrap(), None);

        store.clear().unwrap();
        assert_eq!(store.load_section("free_time").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = TomlFileStore::new(temp.path().join("settings.toml"));
        assert_eq!(store.load_section("free_time").unwrap(), None);
    }

    #[test]
    fn test_file_store_keeps_other_sections() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");
        let mut store = TomlFileStore::new(&path);

        store.save_section("free_time", sample()).unwrap();
        store
            .save_section("other", toml::Value::Table(toml::Table::new()))
            .unwrap();

        let reopened = TomlFileStore::new(&path);
        assert_eq!(reopened.load_section("free_time").unwrap(), Some(sample()));
        assert!(reopened.load_section("other").unwrap().is_some());
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let store = TomlFileStore::new(&path);
        let err = store.load_section("free_time").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse settings file"));
    }

    #[test]
    fn test_file_store_clear() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        let mut store = TomlFileStore::new(&path);

        store.clear().unwrap();
        store.save_section("free_time", sample()).unwrap();
        assert!(path.exists());
        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_clears_unparseable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "[transport]\ndefault_mode = \"hovercraft\"\n[[[").unwrap();

        let mut store = TomlFileStore::new(&path);
        assert!(store.load_section("transport").is_err());
        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.load_section("transport").unwrap(), None);
    }

    #[test]
    fn test_file_store_save_sections_merges_into_one_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        let mut store = TomlFileStore::new(&path);
        store.save_section("kept", sample()).unwrap();

        store
            .save_sections(vec![
                ("free_time", sample()),
                ("transport", toml::Value::Table(toml::Table::new())),
            ])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let table: toml::Table = toml::from_str(&content).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("free_time"), Some(&sample()));
        assert_eq!(table.get("kept"), Some(&sample()));
        assert!(!path.with_extension("toml.tmp").exists());
    }

    /// Counts per-section writes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: usize,
    }

    impl SettingsStore for CountingStore {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn load_section(&self, section: &str) -> Result<Option<toml::Value>> {
            self.inner.load_section(section)
        }

        fn save_section(&mut self, section: &str, value: toml::Value) -> Result<()> {
            self.writes += 1;
            self.inner.save_section(section, value)
        }

        fn clear(&mut self) -> Result<()> {
            self.inner.clear()
        }
    }

    #[test]
    fn test_default_save_sections_falls_back_per_section() {
        let mut store = CountingStore::default();
        store
            .save_sections(vec![("a", sample()), ("b", sample())])
            .unwrap();
        assert_eq!(store.writes, 2);
        assert_eq!(store.load_section("b").unwrap(), Some(sample()));
    }

    #[test]
    fn test_open_store_by_backend() {
        let temp = TempDir::new().unwrap();
        let file = StorageConfig {
            backend: StorageBackend::File,
            settings_file: Some(temp.path().join("settings.toml")),
        };
        assert_eq!(open_store(&file).unwrap().name(), "file");

        let none = StorageConfig {
            backend: StorageBackend::None,
            settings_file: None,
        };
        assert_eq!(open_store(&none).unwrap().name(), "noop");
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn SettingsStore> = Box::new(MemoryStore::new());
        store.save_section("free_time", sample()).unwrap();
        assert_eq!(store.name(), "memory");
        assert_eq!(store.load_section("free_time").unwrap(), Some(sample()));

        store.save_sections(vec![("transport", sample())]).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load_section("transport").unwrap(), None);
    }
}
