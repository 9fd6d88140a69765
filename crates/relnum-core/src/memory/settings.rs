use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::capabilities::Settings;

/// Global settings shared by every view of a workspace
pub type SharedSettings = Arc<RwLock<MemorySettings>>;

/// A JSON-valued settings store that falls back to a parent store
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: Map<String, Value>,
    parent: Option<SharedSettings>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: Map<String, Value>) -> Self {
        Self {
            values,
            parent: None,
        }
    }

    /// Look keys missing here up in `parent`
    pub fn with_parent(mut self, parent: SharedSettings) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn into_shared(self) -> SharedSettings {
        Arc::new(RwLock::new(self))
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Remove a local value so the parent's shows through again
    pub fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Whether `key` is set locally, ignoring the parent
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

impl Settings for MemorySettings {
    fn get(&self, key: &str) -> Option<Value> {
        match self.values.get(key) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref().and_then(|parent| parent.read().get(key)),
        }
    }
}
