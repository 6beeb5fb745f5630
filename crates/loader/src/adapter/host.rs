//! Process-wide variable tables shared by the host-backed adapters.
//!
//! Responsibilities:
//! - Own the environment, server-context, globals and constants tables.
//! - Give embedders read access to what adapters have written.
//!
//! Invariants:
//! - Each table is created once per process on first access and never dropped.
//! - The environment and server-context tables are seeded from the OS
//!   environment at creation; globals and constants start empty.
//! - A poisoned lock is recovered rather than propagated; tables hold plain
//!   data that cannot be left half-written.
//!
//! These tables are the one place adapters touch genuinely global state
//! (together with the OS environment written by `PutenvAdapter`). No locking
//! spans a whole load; callers must not race concurrent loads.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::value::Value;

/// A named, mutex-guarded variable table.
#[derive(Debug)]
pub struct Table {
    name: &'static str,
    entries: Mutex<IndexMap<String, Value>>,
}

impl Table {
    fn new(name: &'static str, entries: IndexMap<String, Value>) -> Self {
        Self {
            name,
            entries: Mutex::new(entries),
        }
    }

    /// Table name, used in log output.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.lock().get(key).cloned()
    }

    /// Insert or replace `key`, returning the previous value.
    pub fn insert(&self, key: &str, value: Value) -> Option<Value> {
        self.lock().insert(key.to_string(), value)
    }

    /// Insert `key` only if absent. Returns whether the value was stored.
    pub fn insert_if_absent(&self, key: &str, value: Value) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(key) {
            return false;
        }
        entries.insert(key.to_string(), value);
        true
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.lock().shift_remove(key)
    }

    /// Copy of every entry, in insertion order.
    pub fn snapshot(&self) -> IndexMap<String, Value> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The process-wide environment table used by `EnvAdapter`.
pub fn env() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| Table::new("env", os_environment()))
}

/// The process-wide server-context table used by `ServerAdapter`.
pub fn server() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| Table::new("server", os_environment()))
}

/// The process-wide globals table used by `GlobalAdapter`.
pub fn globals() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| Table::new("global", IndexMap::new()))
}

/// The process-wide define-once constants table used by `DefineAdapter`.
pub fn constants() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| Table::new("define", IndexMap::new()))
}

/// Snapshot of the OS environment; entries that are not valid UTF-8 are skipped.
fn os_environment() -> IndexMap<String, Value> {
    std::env::vars_os()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let value = value.into_string().ok()?;
            Some((key, Value::String(value)))
        })
        .collect()
}
