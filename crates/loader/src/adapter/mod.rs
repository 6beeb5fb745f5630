//! Destination adapters for loaded variables.
//!
//! Responsibilities:
//! - Define the `Adapter` capability contract (support check, has/get/set/clear).
//! - Enumerate the closed set of known adapter kinds and their identifiers.
//! - Provide the `AdapterRegistry` that activates and caches adapter instances.
//!
//! Does NOT handle:
//! - Deciding which variables are written or whether existing values are kept
//!   (see `Loader::load` / `Loader::overload`).
//!
//! Invariants:
//! - `get` never fails for a missing key; it returns `None`.
//! - `set` on a define-once store never overwrites an existing name.
//! - Stores without a deletion primitive treat `clear` as a no-op.
//! - Every adapter except `array` touches process-wide state (see `host`).

mod apache;
mod array;
mod define;
mod env;
mod global;
pub mod host;
mod putenv;
mod registry;
mod server;

use std::fmt;

pub use apache::{ApacheAdapter, WebServerEnv, install_host_api};
pub use array::ArrayAdapter;
pub use define::DefineAdapter;
pub use env::EnvAdapter;
pub use global::GlobalAdapter;
pub use putenv::PutenvAdapter;
pub use registry::AdapterRegistry;
pub use server::ServerAdapter;

use crate::value::Value;

/// A uniform connector over one variable store.
pub trait Adapter: fmt::Debug + Send {
    /// Which kind of adapter this is.
    fn kind(&self) -> AdapterKind;

    /// Whether the underlying host store is available. Must not panic.
    fn is_supported(&self) -> bool;

    /// Whether `name` exists in this store (no fallback to defaults).
    fn has(&self, name: &str) -> bool;

    /// The stored value, if present.
    fn get(&self, name: &str) -> Option<Value>;

    /// Write `value` through to the store.
    fn set(&mut self, name: &str, value: Value);

    /// Remove `name` from the store where deletion is supported.
    fn clear(&mut self, name: &str);
}

/// The closed set of known adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdapterKind {
    /// Host web-server environment API.
    Apache,
    /// In-memory map owned by the adapter.
    Array,
    /// Define-once constant table.
    Define,
    /// Process-wide environment table.
    Env,
    /// Process-wide globals table.
    Global,
    /// The real OS environment.
    Putenv,
    /// Process-wide server-context table.
    Server,
}

impl AdapterKind {
    /// Every known adapter kind.
    pub const ALL: [AdapterKind; 7] = [
        AdapterKind::Apache,
        AdapterKind::Array,
        AdapterKind::Define,
        AdapterKind::Env,
        AdapterKind::Global,
        AdapterKind::Putenv,
        AdapterKind::Server,
    ];

    /// Canonical identifier, e.g. `"putenv"`.
    pub fn identifier(self) -> &'static str {
        match self {
            AdapterKind::Apache => "apache",
            AdapterKind::Array => "array",
            AdapterKind::Define => "define",
            AdapterKind::Env => "env",
            AdapterKind::Global => "global",
            AdapterKind::Putenv => "putenv",
            AdapterKind::Server => "server",
        }
    }

    /// Resolve a user-supplied adapter name.
    ///
    /// Matching ignores case and whitespace, and tolerates an `Adapter`
    /// suffix, so `"env"`, `"Env"` and `"EnvAdapter"` all resolve to `Env`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = normalize(name);
        Self::ALL
            .into_iter()
            .find(|kind| kind.identifier() == normalized)
    }

    /// Create a fresh adapter of this kind.
    pub(crate) fn instantiate(self) -> Box<dyn Adapter> {
        match self {
            AdapterKind::Apache => Box::new(ApacheAdapter::new()),
            AdapterKind::Array => Box::new(ArrayAdapter::new()),
            AdapterKind::Define => Box::new(DefineAdapter::new()),
            AdapterKind::Env => Box::new(EnvAdapter::new()),
            AdapterKind::Global => Box::new(GlobalAdapter::new()),
            AdapterKind::Putenv => Box::new(PutenvAdapter::new()),
            AdapterKind::Server => Box::new(ServerAdapter::new()),
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("adapter", "")
}
