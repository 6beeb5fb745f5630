//! Adapter over the process-wide globals table.

use super::host::{self, Table};
use super::{Adapter, AdapterKind};
use crate::value::Value;

/// Globals treat a null value as unset, both for `has` and `get`.
#[derive(Debug)]
pub struct GlobalAdapter {
    table: &'static Table,
}

impl GlobalAdapter {
    pub fn new() -> Self {
        Self {
            table: host::globals(),
        }
    }
}

impl Default for GlobalAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for GlobalAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Global
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.table.get(name).filter(|value| !value.is_null())
    }

    fn set(&mut self, name: &str, value: Value) {
        self.table.insert(name, value);
    }

    fn clear(&mut self, name: &str) {
        self.table.remove(name);
    }
}
