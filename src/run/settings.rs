//! Per-run alignment settings store
//!
//! Settings are kept in memory keyed by run name and can be written to a
//! TOML file with one table per run:
//!
//! ```toml
//! [run3]
//! reference_x = 0
//! reference_y = 0
//! series_x = 12
//! series_y = -4
//! transparency = 0.5
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use log::{info, warn};

use crate::aligner::errors::{AlignError, AlignResult};
use crate::aligner::{check_offset, AlignmentSettings, DEFAULT_TRANSPARENCY};

/// Mapping from run name to its alignment settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsStore {
    runs: BTreeMap<String, AlignmentSettings>,
}

impl SettingsStore {
    pub fn new() -> Self {
        SettingsStore::default()
    }

    /// Load a store from disk; a missing file gives an empty store
    pub fn load<P: AsRef<Path>>(path: P) -> AlignResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings file at {}, starting empty", path.display());
            return Ok(SettingsStore::new());
        }

        let content = fs::read_to_string(path)?;
        let store = Self::from_str(&content)?;
        info!("Loaded settings for {} runs from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse a store from TOML text
    pub fn from_str(content: &str) -> AlignResult<Self> {
        let toml_value: toml::Value = content.parse()?;
        let Some(table) = toml_value.as_table() else {
            return Ok(SettingsStore::new());
        };

        let mut store = SettingsStore::new();
        for (run_name, value) in table {
            let Some(run_table) = value.as_table() else {
                warn!("Ignoring non-table settings entry '{}'", run_name);
                continue;
            };
            store.set(run_name, Self::parse_run(run_name, run_table)?);
        }
        Ok(store)
    }

    /// Write the store to disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> AlignResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_toml_string()?)?;
        info!("Saved settings for {} runs to {}", self.len(), path.display());
        Ok(())
    }

    /// Serialize the store to TOML text
    pub fn to_toml_string(&self) -> AlignResult<String> {
        let mut root = toml::value::Table::new();
        for (run_name, settings) in &self.runs {
            let mut table = toml::value::Table::new();
            table.insert("reference_x".to_string(), toml::Value::Integer(settings.reference_x));
            table.insert("reference_y".to_string(), toml::Value::Integer(settings.reference_y));
            table.insert("series_x".to_string(), toml::Value::Integer(settings.series_x));
            table.insert("series_y".to_string(), toml::Value::Integer(settings.series_y));
            table.insert("transparency".to_string(), toml::Value::Float(settings.transparency));
            root.insert(run_name.clone(), toml::Value::Table(table));
        }
        Ok(toml::to_string(&root)?)
    }

    /// Settings stored for a run
    pub fn get(&self, run_name: &str) -> Option<&AlignmentSettings> {
        self.runs.get(run_name)
    }

    /// Settings for a run, or the reset defaults when none are stored
    pub fn get_or_default(&self, run_name: &str) -> AlignmentSettings {
        self.get(run_name).copied().unwrap_or_default()
    }

    /// Store the current settings of a run
    pub fn set(&mut self, run_name: &str, settings: AlignmentSettings) {
        self.runs.insert(run_name.to_string(), settings);
    }

    /// Reset a run to the default settings and return them
    pub fn reset(&mut self, run_name: &str) -> AlignmentSettings {
        let settings = AlignmentSettings::default();
        self.set(run_name, settings);
        settings
    }

    pub fn remove(&mut self, run_name: &str) -> Option<AlignmentSettings> {
        self.runs.remove(run_name)
    }

    pub fn contains(&self, run_name: &str) -> bool {
        self.runs.contains_key(run_name)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterate over runs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AlignmentSettings)> {
        self.runs.iter()
    }

    fn parse_run(run_name: &str, table: &toml::value::Table) -> AlignResult<AlignmentSettings> {
        let offset = |key: &str| -> AlignResult<i64> {
            match table.get(key) {
                None => Ok(0),
                Some(v) => {
                    let offset = v.as_integer().ok_or_else(|| {
                        AlignError::ConfigError(format!("{}.{} must be an integer", run_name, key))
                    })?;
                    check_offset(offset)
                }
            }
        };

        let transparency = match table.get("transparency") {
            None => DEFAULT_TRANSPARENCY,
            Some(v) => v.as_float()
                .or_else(|| v.as_integer().map(|i| i as f64))
                .ok_or_else(|| AlignError::ConfigError(format!("{}.transparency must be a number", run_name)))?,
        };

        Ok(AlignmentSettings::new(offset("reference_x")?, offset("reference_y")?,
                                  offset("series_x")?, offset("series_y")?)
            .with_transparency(transparency))
    }
}
