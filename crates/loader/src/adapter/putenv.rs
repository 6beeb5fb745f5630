//! Adapter over the real OS environment.
//!
//! Responsibilities:
//! - Read and write variables with `std::env`.
//! - Skip writes the OS environment cannot represent instead of panicking.
//!
//! Invariants:
//! - A variable set to the empty string counts as absent for `has` and `get`.
//! - Values are written in their environment string form (`true` → `"1"`).

use tracing::warn;

use super::{Adapter, AdapterKind};
use crate::value::Value;

#[derive(Debug, Default)]
pub struct PutenvAdapter;

impl PutenvAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Names `std::env::set_var` would reject.
    fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && !name.contains(['=', '\0'])
    }
}

impl Adapter for PutenvAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Putenv
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn get(&self, name: &str) -> Option<Value> {
        if !Self::is_valid_name(name) {
            return None;
        }
        std::env::var(name)
            .ok()
            .filter(|value| !value.is_empty())
            .map(Value::String)
    }

    fn set(&mut self, name: &str, value: Value) {
        let value = value.to_env_string();
        if !Self::is_valid_name(name) || value.contains('\0') {
            warn!(name, "Skipping variable the OS environment cannot hold");
            return;
        }
        // SAFETY: the loader is single-threaded; callers must not read or write
        // the process environment from other threads during a load.
        unsafe {
            std::env::set_var(name, value);
        }
    }

    fn clear(&mut self, name: &str) {
        if !Self::is_valid_name(name) {
            return;
        }
        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(name);
        }
    }
}
