//! get-secret - fetch secrets for your application.
//!
//! A secret is looked up as a file in a secrets directory (`/run/secrets`
//! by default, where Docker mounts them), then as an environment variable.
//! The value is cleaned, cast to the requested type, and replaced by a
//! default when it is missing or invalid.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── error             # Error types
//! └── core/
//!     ├── config        # Resolver options (TOML)
//!     ├── paths         # Default secrets directory
//!     ├── source/       # Secret sources
//!     │   ├── file      # Secrets directory
//!     │   └── env       # Environment variables
//!     ├── clean         # Raw value normalization
//!     ├── cast          # Typed conversion
//!     └── resolver      # Lookup, clean, cast, default policy
//! ```
//!
//! # Example
//!
//! ```no_run
//! use get_secret::{parse, Resolver, Text};
//!
//! let password = get_secret::get("DB_PASSWORD");
//! let workers: Option<usize> = get_secret::get_as("MAX_WORKERS");
//!
//! let secrets = Resolver::default().secret_dir("/etc/app/secrets").exception(true);
//! let port = secrets.get_or("DB_PORT", 5432u16, parse())?;
//! let host = secrets.get("DB_HOST", None, Text)?;
//! # Ok::<(), get_secret::Error>(())
//! ```

pub mod core;
pub mod error;

use std::str::FromStr;

pub use crate::core::cast::{parse, Bool, Cast, CastTarget, Parse, Text, Value};
pub use crate::core::clean::{default_clean, Cleaner};
pub use crate::core::config::Options;
pub use crate::core::paths::default_secret_dir;
pub use crate::core::resolver::Resolver;
pub use crate::core::source::{Environment, SecretDir, Source};
pub use crate::error::{BoxError, CastError, CleanError, ConfigError, Error, Result};

/// Fetch a secret as a cleaned string using the default resolver.
///
/// `None` if the secret is in neither `/run/secrets` nor the environment.
pub fn get(key: &str) -> Option<String> {
    Resolver::default().get(key, None, Text).ok().flatten()
}

/// Fetch a secret and parse it as `T` using the default resolver.
///
/// `None` if the secret is missing or does not parse.
pub fn get_as<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Resolver::default().get(key, None, parse::<T>()).ok().flatten()
}

/// Fetch a secret as a boolean using the default resolver.
///
/// `true` only when the value is `"true"` in any case.
pub fn get_bool(key: &str) -> bool {
    Resolver::default()
        .get_or(key, false, Bool)
        .unwrap_or(false)
}
