// ABOUTME: Configuration data types for the relative line number overlay
// ABOUTME: Setting keys, defaults, and the serde-backed config table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace key under which the overlay phantoms are registered with the host
pub const PHANTOM_KEY: &str = "RelativeLineNumbers";

/// Setting key: whether relative line numbers are drawn at all
pub const OPT_ENABLED: &str = "relative_line_numbers_enabled";
pub const DEFAULT_ENABLED: bool = true;

/// Setting key: color of every number except the current line
pub const OPT_COLOR: &str = "relative_line_numbers_color";
pub const DEFAULT_COLOR: &str = "#75715e";

/// Setting key: color of the current line number
pub const OPT_ZERO_COLOR: &str = "relative_line_numbers_zero_color";
pub const DEFAULT_ZERO_COLOR: &str = "#fd971f";

/// A CSS color string as configured by the user.
///
/// The value is passed through to the markup untouched; only the CLI
/// needs to interpret it, via [`Color::to_rgb`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color '{0}' is not a #rgb or #rrggbb hex value")]
    NotHex(String),
}

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `#rgb` / `#rrggbb` into components
    pub fn to_rgb(&self) -> Result<(u8, u8, u8), ColorError> {
        let err = || ColorError::NotHex(self.0.clone());
        let hex = self.0.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match hex.len() {
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok((expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The `[relative_line_numbers]` configuration table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeLineNumbersConfig {
    /// Draw relative line numbers
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Color for offsets from the current line
    #[serde(default = "default_color")]
    pub color: Color,

    /// Color for the current line's absolute number
    #[serde(default = "default_zero_color")]
    pub zero_color: Color,
}

impl Default for RelativeLineNumbersConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            color: default_color(),
            zero_color: default_zero_color(),
        }
    }
}

impl RelativeLineNumbersConfig {
    /// Express the table as host settings, keyed by the setting names
    pub fn to_settings(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert(OPT_ENABLED.to_string(), self.enabled.into());
        map.insert(OPT_COLOR.to_string(), self.color.as_str().into());
        map.insert(OPT_ZERO_COLOR.to_string(), self.zero_color.as_str().into());
        map
    }
}

fn default_enabled() -> bool {
    DEFAULT_ENABLED
}

fn default_color() -> Color {
    Color::new(DEFAULT_COLOR)
}

fn default_zero_color() -> Color {
    Color::new(DEFAULT_ZERO_COLOR)
}
