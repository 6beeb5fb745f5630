//! Adapter activation and instance caching.
//!
//! Responsibilities:
//! - Track which known adapters are active, in activation order.
//! - Lazily create one instance per active adapter and cache it.
//! - Reject lookups of unknown, inactive or unsupported adapters.
//!
//! Invariants:
//! - An adapter is instantiated at most once per activation cycle.
//! - Deactivating an adapter (or disabling all) drops its cached instance.
//! - Only active adapters ever have a cached instance.
//! - Activating an unknown name is a silent no-op.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::{Adapter, AdapterKind};
use crate::error::LoaderError;

/// Registry of active adapters and their instances.
///
/// The known adapters are the fixed [`AdapterKind::ALL`] table.
#[derive(Debug)]
pub struct AdapterRegistry {
    active: Vec<AdapterKind>,
    instances: HashMap<AdapterKind, Box<dyn Adapter>>,
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AdapterRegistry {
    /// Create a registry with no adapter active.
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            instances: HashMap::new(),
        }
    }

    /// Whether `name` identifies a known adapter.
    pub fn exists(&self, name: &str) -> bool {
        AdapterKind::from_name(name).is_some()
    }

    /// Whether `name` identifies an active adapter. Unknown names are inactive.
    pub fn is_active(&self, name: &str) -> bool {
        AdapterKind::from_name(name).is_some_and(|kind| self.active.contains(&kind))
    }

    /// Active adapter kinds, in activation order.
    pub fn active(&self) -> &[AdapterKind] {
        &self.active
    }

    /// Activate an adapter by name. Unknown names are ignored.
    pub fn activate(&mut self, name: &str) {
        match AdapterKind::from_name(name) {
            Some(kind) => self.activate_kind(kind),
            None => debug!(name, "Ignoring activation of unknown adapter"),
        }
    }

    pub fn activate_kind(&mut self, kind: AdapterKind) {
        if !self.active.contains(&kind) {
            debug!(adapter = %kind, "Activating adapter");
            self.active.push(kind);
        }
    }

    /// Deactivate an adapter by name and drop its cached instance.
    pub fn deactivate(&mut self, name: &str) {
        if let Some(kind) = AdapterKind::from_name(name) {
            self.deactivate_kind(kind);
        }
    }

    pub fn deactivate_kind(&mut self, kind: AdapterKind) {
        self.active.retain(|active| *active != kind);
        if self.instances.remove(&kind).is_some() {
            debug!(adapter = %kind, "Dropped cached adapter instance");
        }
    }

    /// Deactivate every adapter and drop all cached instances.
    pub fn disable_all(&mut self) {
        self.active.clear();
        self.instances.clear();
    }

    /// Fetch an active adapter by name, creating it on first use.
    ///
    /// # Errors
    ///
    /// - `LoaderError::UnknownAdapter` if the name matches no known adapter.
    /// - `LoaderError::AdapterNotActive` if the adapter is known but inactive.
    /// - `LoaderError::UnsupportedAdapter` if the host store is unavailable.
    pub fn get(&mut self, name: &str) -> Result<&mut dyn Adapter, LoaderError> {
        let kind = AdapterKind::from_name(name)
            .ok_or_else(|| LoaderError::UnknownAdapter(name.to_string()))?;
        self.get_kind(kind)
    }

    /// Fetch an active adapter by kind, creating it on first use.
    pub fn get_kind(&mut self, kind: AdapterKind) -> Result<&mut dyn Adapter, LoaderError> {
        if !self.active.contains(&kind) {
            return Err(LoaderError::AdapterNotActive(kind));
        }

        match self.instances.entry(kind) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_mut()),
            Entry::Vacant(entry) => {
                let adapter = kind.instantiate();
                if !adapter.is_supported() {
                    return Err(LoaderError::UnsupportedAdapter(kind));
                }
                debug!(adapter = %kind, "Instantiated adapter");
                Ok(entry.insert(adapter).as_mut())
            }
        }
    }

    /// Every active adapter, in activation order.
    ///
    /// # Errors
    ///
    /// Fails with `LoaderError::UnsupportedAdapter` if any active adapter
    /// cannot be instantiated; no adapter is skipped.
    pub fn all(&mut self) -> Result<Vec<&mut dyn Adapter>, LoaderError> {
        for kind in self.active.clone() {
            self.get_kind(kind)?;
        }

        let active = &self.active;
        let mut adapters: Vec<(usize, &mut dyn Adapter)> = self
            .instances
            .iter_mut()
            .filter_map(|(kind, adapter)| {
                let position = active.iter().position(|active| active == kind)?;
                Some((position, adapter.as_mut() as &mut dyn Adapter))
            })
            .collect();
        adapters.sort_by_key(|(position, _)| *position);

        Ok(adapters.into_iter().map(|(_, adapter)| adapter).collect())
    }
}
