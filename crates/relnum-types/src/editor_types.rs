// ABOUTME: Core editor data types
// ABOUTME: Pure data structures for view identity, text regions, and positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a host view
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// A span of character offsets in a document.
///
/// `a` and `b` are unordered: a selection made backwards has `a > b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub a: usize,
    pub b: usize,
}

impl Region {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn begin(&self) -> usize {
        self.a.min(self.b)
    }

    pub fn end(&self) -> usize {
        self.a.max(self.b)
    }

    pub fn len(&self) -> usize {
        self.end() - self.begin()
    }

    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }
}

/// Zero-based row and column of an offset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowCol {
    pub row: usize,
    pub col: usize,
}

impl RowCol {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
