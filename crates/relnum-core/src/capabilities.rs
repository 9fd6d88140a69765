// ABOUTME: Capability traits that define the host editor seam
// ABOUTME: The renderer only ever talks to the host through these traits

use relnum_types::{Region, RowCol, ViewId};
use serde_json::Value;

use crate::phantom::Phantom;

/// Read-only queries against a view and the document it shows.
///
/// Offsets are character offsets into the document. Out-of-range input is
/// clamped to the document rather than rejected.
pub trait ViewQuery {
    fn id(&self) -> ViewId;

    /// Number of characters in the document
    fn size(&self) -> usize;

    /// Row and column of `offset`
    fn rowcol(&self, offset: usize) -> RowCol;

    /// Offset of `row`/`col`. Rows outside the document clamp to the first
    /// or last row.
    fn text_point(&self, row: i64, col: usize) -> usize;

    /// Every line intersecting `region`, without line terminators
    fn lines(&self, region: Region) -> Vec<Region>;

    /// Region currently shown in the viewport
    fn visible_region(&self) -> Region;

    /// Selection regions; the first one is the primary selection
    fn selection(&self) -> Vec<Region>;
}

/// Named settings lookup, as the host's settings store exposes it
pub trait Settings {
    fn get(&self, key: &str) -> Option<Value>;

    /// Boolean setting, or `default` when missing, null, or not a boolean
    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(value)) => value,
            Some(other) => {
                tracing::warn!(key, value = %other, "Expected a boolean setting, using default");
                default
            }
        }
    }

    /// String setting, or `default` when missing, null, or not a string
    fn get_string_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(value)) => value,
            Some(other) => {
                tracing::warn!(key, value = %other, "Expected a string setting, using default");
                default.to_string()
            }
        }
    }
}

/// Host side of the phantom (inline overlay) rendering interface
pub trait PhantomHost {
    /// Replace every phantom registered under `key` with `phantoms`
    fn update_phantoms(&mut self, key: &str, phantoms: &[Phantom]) -> Result<(), HostError>;

    /// Remove every phantom registered under `key`
    fn erase_phantoms(&mut self, key: &str) -> Result<(), HostError>;
}

/// Everything the overlay needs from a single host view
pub trait View: ViewQuery + PhantomHost {
    fn settings(&self) -> &dyn Settings;
}

/// Lookup of live views by id, used when routing events
pub trait ViewHost {
    fn view_mut(&mut self, id: ViewId) -> Option<&mut dyn View>;
}

/// Failures reported by the host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("{0} is closed")]
    ViewClosed(ViewId),

    #[error(
        "region {}..{} is outside a document of {size} characters",
        .region.begin(),
        .region.end()
    )]
    InvalidRegion { region: Region, size: usize },
}
