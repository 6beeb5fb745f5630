//! Error types for loading and validating variables.
//!
//! Responsibilities:
//! - Define error variants for every loader, adapter registry and validator failure.
//! - Classify each variant as an invalid argument, a logic error, or a validation failure.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, identifiers).
//! - Parse errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::adapter::AdapterKind;

/// Broad category of a [`LoaderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed options, files or assertion names.
    InvalidArgument,
    /// An operation was invoked before its precondition was met.
    Logic,
    /// A required variable is missing or an assertion failed.
    Validation,
}

/// Errors that can occur while configuring, parsing, loading or validating.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Invalid format for default variables. Must be a map; '{found}' provided")]
    InvalidDefaults { found: &'static str },

    #[error("Invalid format for required variables: {found} provided")]
    InvalidRequired { found: &'static str },

    #[error("Invalid format for adapters. Must be a name or a list of names; '{found}' provided")]
    InvalidAdapters { found: &'static str },

    #[error("Invalid loader options: {0}")]
    InvalidOptions(String),

    #[error("Environment file '{}' is not readable: {kind}", .path.display())]
    UnreadableFile { path: PathBuf, kind: IoErrorKind },

    #[error("Unable to find .env file (tried {} candidate(s))", .candidates.len())]
    EnvFileNotFound { candidates: Vec<PathBuf> },

    /// The `.env` contents have invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, never the line content.
    #[error("Failed to parse .env contents from {origin} at position {error_index}")]
    Parse { origin: String, error_index: usize },

    #[error("Invalid assertion name: {0}")]
    InvalidAssertion(String),

    #[error("A .env file must be parsed before {operation}")]
    NotParsed { operation: &'static str },

    #[error("Invalid adapter name: {0}")]
    UnknownAdapter(String),

    #[error("Cannot fetch inactive adapter: {0}")]
    AdapterNotActive(AdapterKind),

    #[error("Unsupported adapter: {0}")]
    UnsupportedAdapter(AdapterKind),

    #[error("Required variables are not set: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("{message}")]
    AssertionFailed {
        name: String,
        rule: &'static str,
        message: String,
    },
}

impl LoaderError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoaderError::InvalidDefaults { .. }
            | LoaderError::InvalidRequired { .. }
            | LoaderError::InvalidAdapters { .. }
            | LoaderError::InvalidOptions(_)
            | LoaderError::UnreadableFile { .. }
            | LoaderError::EnvFileNotFound { .. }
            | LoaderError::Parse { .. }
            | LoaderError::InvalidAssertion(_) => ErrorKind::InvalidArgument,
            LoaderError::NotParsed { .. }
            | LoaderError::UnknownAdapter(_)
            | LoaderError::AdapterNotActive(_)
            | LoaderError::UnsupportedAdapter(_) => ErrorKind::Logic,
            LoaderError::MissingRequired(_) | LoaderError::AssertionFailed { .. } => {
                ErrorKind::Validation
            }
        }
    }
}
