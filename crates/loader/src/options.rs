//! Loader configuration options.
//!
//! Responsibilities:
//! - Define the typed options accepted by `Loader::config`.
//! - Validate loosely-typed JSON options into typed ones, reporting shape errors.
//!
//! Invariants:
//! - `defaults` must be a map of scalars.
//! - `required` must be a single name, a list of names, or a name → bool map.
//! - `adapters` may be a single name or a list of names.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LoaderError;
use crate::value::Value;

/// Which variables must have an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Required {
    One(String),
    List(Vec<String>),
    Flags(IndexMap<String, bool>),
}

impl From<&str> for Required {
    fn from(name: &str) -> Self {
        Required::One(name.to_string())
    }
}

impl From<String> for Required {
    fn from(name: String) -> Self {
        Required::One(name)
    }
}

impl From<Vec<String>> for Required {
    fn from(names: Vec<String>) -> Self {
        Required::List(names)
    }
}

impl From<Vec<&str>> for Required {
    fn from(names: Vec<&str>) -> Self {
        Required::List(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Required {
    fn from(names: [&str; N]) -> Self {
        Required::List(names.into_iter().map(str::to_string).collect())
    }
}

impl From<IndexMap<String, bool>> for Required {
    fn from(flags: IndexMap<String, bool>) -> Self {
        Required::Flags(flags)
    }
}

/// Options applied by `Loader::config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Adapter names to activate, in order.
    pub adapters: Vec<String>,
    /// Default values, consulted when a variable has no explicit value.
    pub defaults: IndexMap<String, Value>,
    /// Variables that must have an explicit value after parsing.
    pub required: Option<Required>,
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adapters<I, S>(mut self, adapters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adapters = adapters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn with_required(mut self, required: impl Into<Required>) -> Self {
        self.required = Some(required.into());
        self
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoaderError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| LoaderError::InvalidOptions(e.to_string()))?;
        Self::from_json(&value)
    }

    /// Validate loosely-typed options.
    ///
    /// Missing or `null` keys are treated as absent.
    ///
    /// # Errors
    ///
    /// - `LoaderError::InvalidOptions` if `options` is not an object.
    /// - `LoaderError::InvalidAdapters` if `adapters` is not a name or list of names.
    /// - `LoaderError::InvalidDefaults` if `defaults` is not a map of scalars.
    /// - `LoaderError::InvalidRequired` if `required` has any other shape than
    ///   a name, a list of names, or a map of booleans.
    pub fn from_json(options: &serde_json::Value) -> Result<Self, LoaderError> {
        let object = options.as_object().ok_or_else(|| {
            LoaderError::InvalidOptions(format!(
                "expected an object, got {}",
                json_type_name(options)
            ))
        })?;

        let mut parsed = LoaderOptions::default();

        if let Some(adapters) = object.get("adapters").filter(|v| !v.is_null()) {
            parsed.adapters = match adapters {
                serde_json::Value::String(name) => vec![name.clone()],
                serde_json::Value::Array(_) => Vec::<String>::deserialize(adapters).map_err(
                    |_| LoaderError::InvalidAdapters {
                        found: json_type_name(adapters),
                    },
                )?,
                other => {
                    return Err(LoaderError::InvalidAdapters {
                        found: json_type_name(other),
                    });
                }
            };
        }

        if let Some(defaults) = object.get("defaults").filter(|v| !v.is_null()) {
            if !defaults.is_object() {
                return Err(LoaderError::InvalidDefaults {
                    found: json_type_name(defaults),
                });
            }
            parsed.defaults = IndexMap::<String, Value>::deserialize(defaults).map_err(|_| {
                LoaderError::InvalidDefaults {
                    found: json_type_name(defaults),
                }
            })?;
        }

        if let Some(required) = object.get("required").filter(|v| !v.is_null()) {
            parsed.required = Some(Required::deserialize(required).map_err(|_| {
                LoaderError::InvalidRequired {
                    found: json_type_name(required),
                }
            })?);
        }

        Ok(parsed)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
