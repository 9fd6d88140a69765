// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer for all other relnum crates

pub mod config;
pub mod editor_types;

// Re-export commonly used types
pub use config::{
    Color, ColorError, DEFAULT_COLOR, DEFAULT_ENABLED, DEFAULT_ZERO_COLOR, OPT_COLOR, OPT_ENABLED,
    OPT_ZERO_COLOR, PHANTOM_KEY, RelativeLineNumbersConfig,
};
pub use editor_types::{Region, RowCol, ViewId};
