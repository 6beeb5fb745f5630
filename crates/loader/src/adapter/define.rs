//! Define-once constants adapter.

use tracing::debug;

use super::host::{self, Table};
use super::{Adapter, AdapterKind};
use crate::value::Value;

/// Constants can be defined once and never redefined or removed.
#[derive(Debug)]
pub struct DefineAdapter {
    table: &'static Table,
}

impl DefineAdapter {
    pub fn new() -> Self {
        Self {
            table: host::constants(),
        }
    }
}

impl Default for DefineAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for DefineAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Define
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn has(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.table.get(name)
    }

    fn set(&mut self, name: &str, value: Value) {
        if !self.table.insert_if_absent(name, value) {
            debug!(name, "Constant already defined, keeping existing value");
        }
    }

    fn clear(&mut self, _name: &str) {
        // Constants cannot be undefined.
    }
}
