//! Tests for the `.env` loader.
//!
//! Responsibilities:
//! - Test candidate lookup and parsing through `Loader::parse`.
//! - Test required-variable checks and the parse precondition.
//! - Test load/overload propagation into adapters.
//! - Test configuration options and validation entry points.
//!
//! Invariants:
//! - Tests that write to process-wide stores hold `env_lock()` and use
//!   `_DOTENV_LOADER_TEST_` prefixed names.
//! - Tests that only need a destination use the in-memory `array` adapter.

use std::sync::Mutex;

use super::Loader;

pub mod config_tests;
pub mod parse_tests;
pub mod required_tests;
pub mod validate_tests;

/// Returns the global test lock for process-wide store isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A loader writing only to an in-memory adapter.
pub fn array_loader() -> Loader {
    let mut loader = Loader::new();
    loader.adapters_mut().disable_all();
    loader.adapters_mut().activate("array");
    loader
}
