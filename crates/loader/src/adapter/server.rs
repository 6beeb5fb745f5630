//! Adapter over the process-wide server-context table.

use super::host::{self, Table};
use super::{Adapter, AdapterKind};
use crate::value::Value;

#[derive(Debug)]
pub struct ServerAdapter {
    table: &'static Table,
}

impl ServerAdapter {
    pub fn new() -> Self {
        Self {
            table: host::server(),
        }
    }
}

impl Default for ServerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for ServerAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Server
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
        self.table.insert(name, value);
    }

    fn clear(&mut self, name: &str) {
        self.table.remove(name);
    }
}
