//! Tool configuration
//!
//! Defaults are embedded from `runalign.toml` at build time. A user file
//! with the same layout can override any subset of the keys.

use std::fs;
use std::path::Path;
use lazy_static::lazy_static;
use log::{info, warn};

use crate::aligner::errors::{AlignError, AlignResult};
use crate::geometry::OutputSize;

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: ToolConfig = {
        let content = include_str!("../../runalign.toml");
        ToolConfig::from_str_with_base(content, ToolConfig::builtin()).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse default configuration: {}", e);
            ToolConfig::builtin()
        })
    };
}

/// Settings that stay fixed for one tool instance
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    /// Size of every aligned crop
    pub output_size: OutputSize,
    /// File name of the reference image in each run folder
    pub reference_name: String,
    /// File name of the series image used to compute the overlap
    pub series_name: String,
    /// Directory created next to the base directory for aligned output
    pub output_dir_name: String,
    /// File name of the per-run settings store inside the base directory
    pub settings_name: String,
    /// Image extensions picked up when applying an alignment (lowercase)
    pub extensions: Vec<String>,
}

impl ToolConfig {
    /// Hard-coded fallback used when the embedded file cannot be parsed
    fn builtin() -> Self {
        ToolConfig {
            output_size: OutputSize::default(),
            reference_name: "single.png".to_string(),
            series_name: "series_0.jpg".to_string(),
            output_dir_name: "UNSLICED_NOBLUR_ALIGNED".to_string(),
            settings_name: "alignment.toml".to_string(),
            extensions: vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()],
        }
    }

    /// Parse a configuration, falling back to the defaults for missing keys
    pub fn from_str(content: &str) -> AlignResult<Self> {
        Self::from_str_with_base(content, Self::default())
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AlignResult<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Replace the output size
    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }

    /// Whether a file name carries one of the configured image extensions
    pub fn is_image_name(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .map_or(false, |ext| self.extensions.iter().any(|e| *e == ext))
    }

    fn from_str_with_base(content: &str, base: ToolConfig) -> AlignResult<Self> {
        let toml_value: toml::Value = content.parse()?;
        let mut config = base;

        if let Some(output) = toml_value.get("output").and_then(|v| v.as_table()) {
            let width = Self::read_dimension(output, "width")?.unwrap_or(config.output_size.width);
            let height = Self::read_dimension(output, "height")?.unwrap_or(config.output_size.height);
            config.output_size = OutputSize::new(width, height);
        }

        if let Some(layout) = toml_value.get("layout").and_then(|v| v.as_table()) {
            Self::read_string(layout, "reference_name", &mut config.reference_name);
            Self::read_string(layout, "series_name", &mut config.series_name);
            Self::read_string(layout, "output_dir_name", &mut config.output_dir_name);
            Self::read_string(layout, "settings_name", &mut config.settings_name);

            if let Some(list) = layout.get("extensions").and_then(|v| v.as_array()) {
                config.extensions = list.iter()
                    .filter_map(|v| v.as_str())
                    .map(|s| s.trim_start_matches('.').to_lowercase())
                    .collect();
                if config.extensions.is_empty() {
                    warn!("Configuration lists no image extensions; nothing will be aligned");
                }
            }
        }

        Ok(config)
    }

    fn read_dimension(table: &toml::value::Table, key: &str) -> AlignResult<Option<u32>> {
        let Some(value) = table.get(key) else {
            return Ok(None);
        };

        match value.as_integer() {
            Some(n) if n >= 1 && n <= i64::from(u32::MAX) => Ok(Some(n as u32)),
            _ => Err(AlignError::ConfigError(format!("output.{} must be a positive integer", key))),
        }
    }

    fn read_string(table: &toml::value::Table, key: &str, target: &mut String) {
        if let Some(value) = table.get(key).and_then(|v| v.as_str()) {
            *target = value.to_string();
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
