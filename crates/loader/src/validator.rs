//! Assertions against a single variable's effective value.
//!
//! Responsibilities:
//! - Evaluate built-in assertions (allowed values, boolean, integer, not empty).
//! - Evaluate custom predicates.
//! - Resolve assertion names for string-driven validation rules.
//!
//! Invariants:
//! - Assertions see the effective value (explicit, else default, else `None`).
//! - A failed assertion is a `LoaderError::AssertionFailed` naming the variable.
//! - Names equal to `apply` or containing `assert` never resolve.

use std::fmt;

use crate::constants::BOOLEAN_TOKENS;
use crate::error::LoaderError;
use crate::value::Value;
use crate::variables::VariableRegistry;

/// Custom predicate over a variable's effective value.
pub type Predicate<'f> = Box<dyn Fn(Option<&Value>) -> bool + 'f>;

/// A single validation rule.
pub enum Assertion<'f> {
    /// The value equals one of the choices exactly.
    AllowedValues(Vec<Value>),
    /// The value is absent, null, a boolean, or a recognized boolean token.
    IsBoolean,
    /// The value is natively an integer.
    IsInteger,
    /// The value is present and not loosely empty.
    NotEmpty,
    /// The predicate returns true for the value.
    Custom(Predicate<'f>),
}

impl Assertion<'_> {
    /// Resolve a built-in assertion by name.
    ///
    /// Accepts camelCase (`isInteger`) and snake_case (`is_integer`) names.
    /// `allowedValues` takes its choices from `arguments`.
    ///
    /// # Errors
    ///
    /// `LoaderError::InvalidAssertion` if the name is `apply`, contains
    /// `assert`, or matches no built-in.
    pub fn from_name(name: &str, arguments: &[Value]) -> Result<Self, LoaderError> {
        if name == "apply" || name.contains("assert") {
            return Err(LoaderError::InvalidAssertion(name.to_string()));
        }
        match name {
            "allowedValues" | "allowed_values" => Ok(Assertion::AllowedValues(arguments.to_vec())),
            "isBoolean" | "is_boolean" => Ok(Assertion::IsBoolean),
            "isInteger" | "is_integer" => Ok(Assertion::IsInteger),
            "notEmpty" | "not_empty" => Ok(Assertion::NotEmpty),
            _ => Err(LoaderError::InvalidAssertion(name.to_string())),
        }
    }

    /// Short rule name used in errors.
    pub fn rule(&self) -> &'static str {
        match self {
            Assertion::AllowedValues(_) => "allowed_values",
            Assertion::IsBoolean => "is_boolean",
            Assertion::IsInteger => "is_integer",
            Assertion::NotEmpty => "not_empty",
            Assertion::Custom(_) => "custom",
        }
    }

    fn holds(&self, value: Option<&Value>) -> bool {
        match self {
            Assertion::AllowedValues(choices) => value.is_some_and(|v| choices.contains(v)),
            Assertion::IsBoolean => value.is_none_or(is_boolean),
            Assertion::IsInteger => matches!(value, Some(Value::Integer(_))),
            Assertion::NotEmpty => value.is_some_and(|v| !v.is_empty()),
            Assertion::Custom(predicate) => predicate(value),
        }
    }

    fn failure_message(&self, name: &str) -> String {
        match self {
            Assertion::AllowedValues(choices) => {
                let choices: Vec<String> = choices.iter().map(ToString::to_string).collect();
                format!("{} is not one of [{}]", name, choices.join(", "))
            }
            Assertion::IsBoolean => format!("{} is not a boolean", name),
            Assertion::IsInteger => format!("{} is not an integer", name),
            Assertion::NotEmpty => format!("{} is empty", name),
            Assertion::Custom(_) => format!("{} failed a custom validation assertion", name),
        }
    }
}

impl fmt::Debug for Assertion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assertion::AllowedValues(choices) => {
                f.debug_tuple("AllowedValues").field(choices).finish()
            }
            Assertion::Custom(_) => f.write_str("Custom(..)"),
            other => f.write_str(other.rule()),
        }
    }
}

fn is_boolean(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(_) => true,
        Value::Integer(i) => *i == 0 || *i == 1,
        Value::Float(f) => *f == 0.0 || *f == 1.0,
        Value::String(s) => {
            let token = s.trim().to_ascii_lowercase();
            BOOLEAN_TOKENS.contains(&token.as_str())
        }
    }
}

/// Validator bound to one variable.
#[derive(Debug)]
pub struct Validator<'a> {
    name: String,
    registry: &'a VariableRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(name: impl Into<String>, registry: &'a VariableRegistry) -> Self {
        Self {
            name: name.into(),
            registry,
        }
    }

    /// The variable under validation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply a built-in assertion by name.
    ///
    /// # Errors
    ///
    /// - `LoaderError::InvalidAssertion` if the name does not resolve.
    /// - `LoaderError::AssertionFailed` if the assertion does not hold.
    pub fn apply(&self, assertion: &str, arguments: &[Value]) -> Result<&Self, LoaderError> {
        self.check(Assertion::from_name(assertion, arguments)?)
    }

    /// Evaluate `assertion` against the effective value.
    pub fn check(&self, assertion: Assertion<'_>) -> Result<&Self, LoaderError> {
        if assertion.holds(self.registry.get(&self.name)) {
            return Ok(self);
        }
        Err(LoaderError::AssertionFailed {
            name: self.name.clone(),
            rule: assertion.rule(),
            message: assertion.failure_message(&self.name),
        })
    }

    pub fn allowed_values<I, V>(&self, choices: I) -> Result<&Self, LoaderError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.check(Assertion::AllowedValues(
            choices.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn is_boolean(&self) -> Result<&Self, LoaderError> {
        self.check(Assertion::IsBoolean)
    }

    pub fn is_integer(&self) -> Result<&Self, LoaderError> {
        self.check(Assertion::IsInteger)
    }

    pub fn not_empty(&self) -> Result<&Self, LoaderError> {
        self.check(Assertion::NotEmpty)
    }

    pub fn assert<F>(&self, predicate: F) -> Result<&Self, LoaderError>
    where
        F: Fn(Option<&Value>) -> bool,
    {
        self.check(Assertion::Custom(Box::new(predicate)))
    }
}
