//! Resolver.
//!
//! The primary interface: find a secret, clean it, cast it, and apply the
//! default/exception policy.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cast::Cast;
use crate::core::clean::{self, Cleaner};
use crate::core::config::Options;
use crate::core::source::{Environment, SecretDir, Source};
use crate::core::types::{RawValue, SecretKey};
use crate::error::{CastError, CleanError, Result};

/// Resolves secrets from a secrets directory, falling back to the environment.
///
/// Cheap to clone and safe to share between threads. Every call reads the
/// filesystem and environment afresh; nothing is cached.
///
/// ```no_run
/// use get_secret::{parse, Bool, Resolver, Text};
///
/// let secrets = Resolver::default();
/// let host = secrets.get("DB_HOST", Some("localhost".to_string()), Text)?;
/// let port = secrets.get_or("DB_PORT", 5432u16, parse())?;
/// let send_emails = secrets.get_or("SEND_EMAILS", false, Bool)?;
/// # Ok::<(), get_secret::Error>(())
/// ```
#[derive(Clone)]
pub struct Resolver {
    options: Options,
    clean: Cleaner,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Resolver {
    // --- Construction ---

    /// Create a resolver using the default cleaner.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            clean: clean::default_cleaner(),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Look for secret files in `path` instead of the default directory.
    pub fn secret_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.secret_dir = path.into();
        self
    }

    /// Enable or disable the environment fallback.
    pub fn env(mut self, env: bool) -> Self {
        self.options.env = env;
        self
    }

    /// Return clean and cast failures instead of the default value.
    pub fn exception(mut self, exception: bool) -> Self {
        self.options.exception = exception;
        self
    }

    /// Replace the default cleaner.
    ///
    /// ```
    /// use get_secret::Resolver;
    ///
    /// let upper = Resolver::default()
    ///     .clean_fn(|v: &str| Ok::<_, std::convert::Infallible>(v.trim().to_uppercase()));
    /// ```
    pub fn clean_fn<F, E>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, E> + Send + Sync + 'static,
        E: Into<crate::error::BoxError>,
    {
        self.clean = clean::cleaner(f);
        self
    }

    // --- Resolution ---

    /// Raw value of `key`: the secret file if readable, otherwise the
    /// environment variable when fallback is enabled.
    pub fn lookup(&self, key: &SecretKey) -> Option<RawValue> {
        let dir = SecretDir::new(&self.options.secret_dir);
        if let Some(raw) = read_from(&dir, key) {
            return Some(raw);
        }

        if self.options.env {
            read_from(&Environment, key)
        } else {
            None
        }
    }

    /// Fetch, clean and cast `key`, reporting every failure.
    ///
    /// Ignores the `exception` option. Returns `Ok(None)` when the secret is
    /// not found.
    ///
    /// # Errors
    ///
    /// Returns `Error::Clean` if the clean function fails, or `Error::Cast`
    /// if the cleaned value cannot be converted.
    pub fn fetch<T, C>(&self, key: &SecretKey, cast: C) -> Result<Option<T>>
    where
        C: Cast<T>,
    {
        let Some(raw) = self.lookup(key) else {
            debug!(key, "secret not found");
            return Ok(None);
        };

        let cleaned = Zeroizing::new((self.clean)(raw.as_str()).map_err(|source| CleanError {
            key: key.to_string(),
            source,
        })?);

        let value = cast.cast(cleaned.as_str()).map_err(|source| CastError {
            key: key.to_string(),
            source,
        })?;

        Ok(Some(value))
    }

    /// Resolve `key`, substituting `default` when it is not found.
    ///
    /// Clean and cast failures also yield `default` unless the `exception`
    /// option is set. The default is returned as given, never cast.
    ///
    /// # Errors
    ///
    /// Only with `exception` enabled: `Error::Clean` or `Error::Cast`.
    pub fn get<T, C>(&self, key: &SecretKey, default: Option<T>, cast: C) -> Result<Option<T>>
    where
        C: Cast<T>,
    {
        match self.fetch(key, cast) {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => Ok(default),
            Err(e) if self.options.exception => Err(e),
            Err(e) => {
                debug!(key, error = %e, "using default value");
                Ok(default)
            }
        }
    }

    /// Like [`get`](Self::get) with a value that is always present.
    ///
    /// # Errors
    ///
    /// Only with `exception` enabled: `Error::Clean` or `Error::Cast`.
    pub fn get_or<T, C>(&self, key: &SecretKey, default: T, cast: C) -> Result<T>
    where
        C: Cast<T>,
    {
        Ok(self.get(key, None, cast)?.unwrap_or(default))
    }
}

fn read_from(source: &dyn Source, key: &SecretKey) -> Option<RawValue> {
    let value = source.read(key);
    if value.is_some() {
        debug!(key, source = source.name(), "secret found");
    }
    value
}
