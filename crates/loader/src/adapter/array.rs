//! In-memory adapter owning its own map.

use indexmap::IndexMap;

use super::{Adapter, AdapterKind};
use crate::value::Value;

/// Stores variables in a map owned by the adapter instance.
#[derive(Debug, Default)]
pub struct ArrayAdapter {
    data: IndexMap<String, Value>,
}

impl ArrayAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored variable, in insertion order.
    pub fn entries(&self) -> &IndexMap<String, Value> {
        &self.data
    }
}

impl Adapter for ArrayAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Array
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn has(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.data.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: Value) {
        self.data.insert(name.to_string(), value);
    }

    fn clear(&mut self, name: &str) {
        self.data.shift_remove(name);
    }
}
