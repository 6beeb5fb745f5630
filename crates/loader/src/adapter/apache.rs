//! Adapter over a host web-server environment API.
//!
//! The embedding application installs the host API once per process with
//! [`install_host_api`]. Until then the adapter reports itself unsupported.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use super::{Adapter, AdapterKind};
use crate::value::Value;

/// Web-server environment primitives supplied by the host.
///
/// The host API has no way to unset a variable.
pub trait WebServerEnv: Send + Sync {
    fn getenv(&self, name: &str) -> Option<String>;
    fn setenv(&self, name: &str, value: &str);
}

static HOST_API: OnceLock<Box<dyn WebServerEnv>> = OnceLock::new();

/// Install the host web-server API. Returns `false` if one was already installed.
pub fn install_host_api(api: Box<dyn WebServerEnv>) -> bool {
    let installed = HOST_API.set(api).is_ok();
    debug!(installed, "Installing web server environment API");
    installed
}

pub struct ApacheAdapter {
    host: Option<&'static dyn WebServerEnv>,
}

impl ApacheAdapter {
    pub fn new() -> Self {
        Self {
            host: HOST_API.get().map(|api| api.as_ref()),
        }
    }
}

impl Default for ApacheAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ApacheAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApacheAdapter")
            .field("host_installed", &self.host.is_some())
            .finish()
    }
}

impl Adapter for ApacheAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Apache
    }

    fn is_supported(&self) -> bool {
        self.host.is_some()
    }

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.host?.getenv(name).map(Value::String)
    }

    fn set(&mut self, name: &str, value: Value) {
        if let Some(host) = self.host {
            host.setenv(name, &value.to_env_string());
        }
    }

    fn clear(&mut self, _name: &str) {
        // No unset primitive on the host API.
    }
}
