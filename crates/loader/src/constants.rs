//! Centralized constants for the loader.

use crate::adapter::AdapterKind;

/// Adapters activated by every new `Loader`.
pub const DEFAULT_ADAPTERS: [AdapterKind; 3] =
    [AdapterKind::Env, AdapterKind::Putenv, AdapterKind::Server];

/// Tokens (compared case-insensitively after trimming) accepted as booleans.
///
/// The empty string is accepted as `false`.
pub const BOOLEAN_TOKENS: [&str; 9] = ["1", "true", "on", "yes", "0", "false", "off", "no", ""];
