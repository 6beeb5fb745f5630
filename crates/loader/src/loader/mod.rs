//! `.env` loader orchestrating parsing, validation and propagation.
//!
//! Responsibilities:
//! - Apply configuration options (adapters, defaults, required variables).
//! - Parse the first existing `.env` candidate into the variable registry.
//! - Check required variables and propagate values to every active adapter.
//!
//! Does NOT handle:
//! - The `.env` grammar (delegated to dotenvy).
//! - Store-specific write semantics (see `adapter`).
//!
//! Invariants / Assumptions:
//! - `check_required` and `validate` fail with `NotParsed` until `parse` has run.
//! - The parsed flag only ever goes from false to true.
//! - `load` never overwrites a value an adapter already has; `overload` always does.
//! - No adapter is written if the required-variable check fails.

mod parse;

#[cfg(test)]
mod tests;

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::adapter::{Adapter, AdapterRegistry};
use crate::constants::DEFAULT_ADAPTERS;
use crate::error::LoaderError;
use crate::options::{LoaderOptions, Required};
use crate::validator::Validator;
use crate::value::Value;
use crate::variables::VariableRegistry;

/// Loads `.env` variables into the active adapters.
#[derive(Debug)]
pub struct Loader {
    adapters: AdapterRegistry,
    variables: VariableRegistry,
    parsed: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Create a loader with the `env`, `putenv` and `server` adapters active.
    pub fn new() -> Self {
        let mut adapters = AdapterRegistry::new();
        for kind in DEFAULT_ADAPTERS {
            adapters.activate_kind(kind);
        }
        Self {
            adapters,
            variables: VariableRegistry::new(),
            parsed: false,
        }
    }

    /// Alias for [`Loader::new`].
    pub fn create() -> Self {
        Self::new()
    }

    /// Apply configuration options.
    ///
    /// Adapters are activated in order (unknown names are ignored), defaults
    /// are merged, and required variables are marked.
    pub fn config(&mut self, options: LoaderOptions) -> &mut Self {
        for adapter in &options.adapters {
            self.adapters.activate(adapter);
        }
        self.variables.populate_defaults(options.defaults);
        if let Some(required) = options.required {
            self.variables.populate_required(required);
        }
        self
    }

    /// Apply loosely-typed JSON configuration options.
    ///
    /// # Errors
    ///
    /// Returns the shape errors of [`LoaderOptions::from_json`]; nothing is
    /// applied when the options are invalid.
    pub fn config_json(&mut self, options: &serde_json::Value) -> Result<&mut Self, LoaderError> {
        let options = LoaderOptions::from_json(options)?;
        Ok(self.config(options))
    }

    /// Parse the first existing `.env` file among `candidates`.
    ///
    /// An empty candidate list parses nothing but still marks the loader parsed.
    ///
    /// # Errors
    ///
    /// - `LoaderError::UnreadableFile` if the first existing candidate cannot be read.
    /// - `LoaderError::EnvFileNotFound` if no candidate exists.
    /// - `LoaderError::Parse` if the file has invalid syntax or is not UTF-8.
    pub fn parse<P: AsRef<Path>>(&mut self, candidates: &[P]) -> Result<&mut Self, LoaderError> {
        if candidates.is_empty() {
            debug!("No .env candidates given, nothing to parse");
        } else {
            let (path, contents) = parse::read_first_existing(candidates)?;
            let origin = path.display().to_string();
            let pairs = parse::parse_contents(&origin, &contents)?;
            debug!(path = %origin, variables = pairs.len(), "Parsed .env file");
            self.variables.populate(pairs);
        }

        self.parsed = true;
        Ok(self)
    }

    /// Parse a single `.env` file.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, LoaderError> {
        self.parse(&[path.as_ref()])
    }

    /// Parse `.env` text held in memory.
    pub fn parse_str(&mut self, contents: &str) -> Result<&mut Self, LoaderError> {
        let pairs = parse::parse_contents("<string>", contents)?;
        debug!(variables = pairs.len(), "Parsed .env contents");
        self.variables.populate(pairs);
        self.parsed = true;
        Ok(self)
    }

    /// Whether `parse` (or `parse_str`) has run.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Propagate variables to every active adapter without overwriting
    /// values the adapters already have.
    ///
    /// # Errors
    ///
    /// Fails before any write if required variables are missing, and with
    /// `LoaderError::UnsupportedAdapter` if an active adapter is unavailable.
    pub fn load(&mut self) -> Result<&mut Self, LoaderError> {
        self.propagate(false)
    }

    /// Propagate variables to every active adapter, overwriting existing values.
    pub fn overload(&mut self) -> Result<&mut Self, LoaderError> {
        self.propagate(true)
    }

    fn propagate(&mut self, overwrite: bool) -> Result<&mut Self, LoaderError> {
        self.check_required()?;

        let variables = self.variables.all();
        for adapter in self.adapters.all()? {
            let (written, skipped) = write_variables(adapter, &variables, overwrite);
            debug!(
                adapter = %adapter.kind(),
                written,
                skipped,
                overwrite,
                "Propagated variables"
            );
        }
        Ok(self)
    }

    /// Whether `name` has an explicit value.
    pub fn has(&self, name: &str) -> bool {
        self.variables.has(name)
    }

    /// The effective value of `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.variables.set(name, value);
        self
    }

    /// Remove `name` along with its default and required flag.
    pub fn clear(&mut self, name: &str) -> &mut Self {
        self.variables.clear(name);
        self
    }

    /// Every variable with defaults filled in.
    pub fn all(&self) -> IndexMap<String, Value> {
        self.variables.all()
    }

    /// Mark variables as required.
    ///
    /// A single name is added to the required set; a list replaces it.
    pub fn required(&mut self, names: impl Into<Required>) -> &mut Self {
        self.variables.populate_required(names);
        self
    }

    /// Check that every required variable has an explicit value.
    ///
    /// # Errors
    ///
    /// - `LoaderError::NotParsed` before `parse` has run.
    /// - `LoaderError::MissingRequired` listing every missing name.
    pub fn check_required(&self) -> Result<&Self, LoaderError> {
        if !self.parsed {
            return Err(LoaderError::NotParsed {
                operation: "checking if required variables exist",
            });
        }

        let missing = self.variables.all_required_but_not_set();
        if !missing.is_empty() {
            return Err(LoaderError::MissingRequired(missing));
        }
        Ok(self)
    }

    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.variables.set_default(name, value);
        self
    }

    pub fn set_defaults<I, K, V>(&mut self, defaults: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.variables.populate_defaults(defaults);
        self
    }

    /// Start validating a single variable.
    ///
    /// # Errors
    ///
    /// `LoaderError::NotParsed` before `parse` has run.
    pub fn validate(&self, name: &str) -> Result<Validator<'_>, LoaderError> {
        if !self.parsed {
            return Err(LoaderError::NotParsed {
                operation: "running validation rules",
            });
        }
        Ok(Validator::new(name, &self.variables))
    }

    /// Fetch an active adapter by name.
    pub fn get_adapter(&mut self, name: &str) -> Result<&mut dyn Adapter, LoaderError> {
        self.adapters.get(name)
    }

    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    /// Mutable access to the adapter registry, e.g. to deactivate the defaults.
    pub fn adapters_mut(&mut self) -> &mut AdapterRegistry {
        &mut self.adapters
    }

    pub fn variables(&self) -> &VariableRegistry {
        &self.variables
    }
}

/// Write `variables` to `adapter`, returning `(written, skipped)` counts.
fn write_variables(
    adapter: &mut dyn Adapter,
    variables: &IndexMap<String, Value>,
    overwrite: bool,
) -> (usize, usize) {
    let mut written = 0;
    let mut skipped = 0;
    for (name, value) in variables {
        if !overwrite && adapter.has(name) {
            skipped += 1;
            continue;
        }
        adapter.set(name, value.clone());
        written += 1;
    }
    (written, skipped)
}
