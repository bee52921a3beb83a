//! Secret sources.
//!
//! A source answers one question: what is the raw value stored under a key?
//! Any failure to read is reported as "not found", never as an error, so a
//! resolver can move on to the next source.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `Source` trait
//! 2. Add the implementation in a new file (e.g., `dotenv.rs`)
//! 3. Re-export from this module

use crate::core::types::{RawValue, SecretKey};

mod env;
mod file;

pub use env::Environment;
pub use file::SecretDir;

/// A place secrets can be read from.
pub trait Source {
    /// Short name used in log events.
    fn name(&self) -> &'static str;

    /// Read the raw value stored under `key`.
    ///
    /// Returns `None` when the key is absent or cannot be read. An empty
    /// value is `Some("")`, not `None`.
    fn read(&self, key: &SecretKey) -> Option<RawValue>;
}
