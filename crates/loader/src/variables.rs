//! Registry of parsed variables, defaults and required flags.
//!
//! Responsibilities:
//! - Hold explicit variables, default values and required flags by name.
//! - Compute effective values (explicit value, else default).
//! - Report required variables that have no explicit value.
//!
//! Does NOT handle:
//! - Reading or parsing `.env` files (see `loader`).
//! - Writing values to destination stores (see `adapter`).
//!
//! Invariants:
//! - All three maps keep insertion order; merges are right-biased and an
//!   overwritten key keeps its original position.
//! - `clear` removes a name from variables, defaults and required flags together.
//! - Defaults never satisfy a requirement.

use indexmap::IndexMap;

use crate::options::Required;
use crate::value::Value;

#[derive(Debug, Clone, Default)]
pub struct VariableRegistry {
    variables: IndexMap<String, Value>,
    defaults: IndexMap<String, Value>,
    required: IndexMap<String, bool>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has an explicit value. Defaults are not consulted.
    pub fn has(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// The effective value: explicit value, else default, else `None`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables
            .get(name)
            .or_else(|| self.get_default(name))
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Remove `name` from variables, defaults and required flags.
    pub fn clear(&mut self, name: &str) -> &mut Self {
        self.variables.shift_remove(name);
        self.defaults.shift_remove(name);
        self.required.shift_remove(name);
        self
    }

    /// Every variable with defaults filled in; explicit values win.
    ///
    /// Defaults come first in their own order, followed by variables that
    /// have no default.
    pub fn all(&self) -> IndexMap<String, Value> {
        let mut all = self.defaults.clone();
        for (name, value) in &self.variables {
            all.insert(name.clone(), value.clone());
        }
        all
    }

    /// Explicit variables only.
    pub fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }

    /// Merge `variables` into the registry; later entries win.
    pub fn populate<I, K, V>(&mut self, variables: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in variables {
            self.variables.insert(name.into(), value.into());
        }
        self
    }

    pub fn has_default(&self, name: &str) -> bool {
        self.defaults.contains_key(name)
    }

    pub fn get_default(&self, name: &str) -> Option<&Value> {
        self.defaults.get(name)
    }

    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn clear_default(&mut self, name: &str) -> &mut Self {
        self.defaults.shift_remove(name);
        self
    }

    pub fn all_defaults(&self) -> &IndexMap<String, Value> {
        &self.defaults
    }

    /// Merge `defaults` into the registry's defaults; later entries win.
    pub fn populate_defaults<I, K, V>(&mut self, defaults: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in defaults {
            self.defaults.insert(name.into(), value.into());
        }
        self
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.get(name).copied().unwrap_or(false)
    }

    pub fn make_required(&mut self, name: impl Into<String>) -> &mut Self {
        self.required.insert(name.into(), true);
        self
    }

    /// Unmark `name` as required, but only if it already has an explicit value.
    pub fn make_not_required(&mut self, name: &str) -> &mut Self {
        if self.has(name) {
            self.required.insert(name.to_string(), false);
        }
        self
    }

    /// Apply required flags.
    ///
    /// A single name is marked required. A list replaces every existing flag
    /// with the listed names, each required. A map is merged flag by flag.
    pub fn populate_required(&mut self, required: impl Into<Required>) -> &mut Self {
        match required.into() {
            Required::One(name) => {
                self.make_required(name);
            }
            Required::List(names) => {
                self.required = names.into_iter().map(|name| (name, true)).collect();
            }
            Required::Flags(flags) => {
                self.required.extend(flags);
            }
        }
        self
    }

    /// Names flagged as required, in the order they were first flagged.
    pub fn all_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|(_, required)| **required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Raw required flags, including names explicitly marked not required.
    pub fn required_flags(&self) -> &IndexMap<String, bool> {
        &self.required
    }

    /// Required names with no explicit value.
    pub fn all_required_but_not_set(&self) -> Vec<String> {
        self.all_required()
            .into_iter()
            .filter(|name| !self.has(name))
            .map(str::to_string)
            .collect()
    }

    /// Empty all three maps.
    pub fn reset(&mut self) -> &mut Self {
        self.variables.clear();
        self.defaults.clear();
        self.required.clear();
        self
    }
}
