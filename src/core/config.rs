//! Resolver options.
//!
//! Options can be built in code or loaded from a TOML file. Every field is
//! optional in TOML and falls back to the same default as `Options::default()`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::paths;
use crate::error::{ConfigError, Result};

/// Settings shared by every lookup a resolver performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Directory holding one file per secret
    pub secret_dir: PathBuf,
    /// Fall back to environment variables when no secret file can be read
    pub env: bool,
    /// Return clean and cast failures instead of the default value
    pub exception: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            secret_dir: paths::default_secret_dir().to_path_buf(),
            env: true,
            exception: false,
        }
    }
}

impl Options {
    /// Parse options from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or has unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let options: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(options)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// or `ConfigError::Parse` if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading options");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let options = Self::from_toml(&contents)?;

        debug!(
            secret_dir = %options.secret_dir.display(),
            env = options.env,
            exception = options.exception,
            "options loaded"
        );

        Ok(options)
    }
}
