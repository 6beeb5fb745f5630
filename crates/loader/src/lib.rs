//! Load `.env` variables into pluggable destination stores.
//!
//! This crate parses `.env` files into a registry of variables, defaults and
//! required flags, validates them, and writes them to the active adapters
//! (process environment, server context, constants, globals, or memory).
//!
//! ```no_run
//! use dotenv_loader::{Loader, LoaderOptions};
//!
//! # fn main() -> Result<(), dotenv_loader::LoaderError> {
//! let mut loader = Loader::create();
//! loader
//!     .config(LoaderOptions::new().with_default("PORT", 8080).with_required(["APP_KEY"]))
//!     .parse(&[".env.local", ".env"])?
//!     .load()?;
//! loader.validate("PORT")?.not_empty()?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
mod constants;
mod error;
mod loader;
mod options;
mod validator;
mod value;
mod variables;

pub use adapter::{Adapter, AdapterKind, AdapterRegistry};
pub use constants::DEFAULT_ADAPTERS;
pub use error::{ErrorKind, LoaderError};
pub use loader::Loader;
pub use options::{LoaderOptions, Required};
pub use validator::{Assertion, Predicate, Validator};
pub use value::Value;
pub use variables::VariableRegistry;

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
