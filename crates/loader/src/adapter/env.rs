//! Adapter over the process-wide environment table.

use super::host::{self, Table};
use super::{Adapter, AdapterKind};
use crate::value::Value;

/// Writes to the environment table seeded from the OS environment.
///
/// Values keep their native kind; the OS environment itself is untouched
/// (see `PutenvAdapter` for that).
#[derive(Debug)]
pub struct EnvAdapter {
    table: &'static Table,
}

impl EnvAdapter {
    pub fn new() -> Self {
        Self { table: host::env() }
    }
}

impl Default for EnvAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for EnvAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Env
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
