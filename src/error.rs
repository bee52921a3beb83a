//! Error types for secret resolution.
//!
//! A missing secret is never an error. Only a failing clean function, a
//! failing cast, or an unreadable options file surface here, and only the
//! first two are subject to the resolver's `exception` policy.

use thiserror::Error;

/// Boxed error produced by user-supplied clean and cast functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Clean(#[from] CleanError),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The clean function failed on a fetched value.
///
/// Carries the key, never the value.
#[derive(Error, Debug)]
#[error("could not clean secret {key}: {source}")]
pub struct CleanError {
    pub key: String,
    #[source]
    pub source: BoxError,
}

/// The cleaned value could not be converted to the requested type.
#[derive(Error, Debug)]
#[error("could not cast secret {key}: {source}")]
pub struct CastError {
    pub key: String,
    #[source]
    pub source: BoxError,
}

/// Errors loading resolver options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read options file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse options: {0}")]
    Parse(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Key of the secret that failed, if the error came from resolution.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Clean(e) => Some(&e.key),
            Error::Cast(e) => Some(&e.key),
            Error::Config(_) => None,
        }
    }
}
