// ABOUTME: TOML configuration for the relnum binary
// ABOUTME: Maps the [relative_line_numbers] table and raw [settings] onto host settings

use anyhow::{Context, Result};
use relnum_core::MemorySettings;
use relnum_types::RelativeLineNumbersConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "relnum.toml";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relative_line_numbers: RelativeLineNumbersConfig,

    /// Raw host settings applied after the typed table
    pub settings: toml::Table,
}

/// Default configuration directory, `<config dir>/relnum`
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("relnum"))
}

impl Config {
    /// Load from `path` when given, otherwise from the default location.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        match config_dir().map(|dir| dir.join(CONFIG_FILE_NAME)) {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => {
                relnum_logging::info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        relnum_logging::info!(config_path = %path.display(), "Loading configuration");

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        relnum_logging::debug!(
            enabled = config.relative_line_numbers.enabled,
            color = %config.relative_line_numbers.color,
            zero_color = %config.relative_line_numbers.zero_color,
            extra_settings = config.settings.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Host settings for every view opened by the binary
    pub fn to_settings(&self) -> Result<MemorySettings> {
        let mut values = self.relative_line_numbers.to_settings();
        for (key, value) in &self.settings {
            let value = serde_json::to_value(value)
                .with_context(|| format!("Setting '{key}' cannot be expressed as a host value"))?;
            values.insert(key.clone(), value);
        }
        Ok(MemorySettings::from_map(values))
    }
}
