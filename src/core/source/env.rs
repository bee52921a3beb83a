//! Environment variable source.

use tracing::trace;
use zeroize::Zeroizing;

use super::Source;
use crate::core::types::{RawValue, SecretKey};

/// Process environment, looked up by exact variable name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment;

impl Environment {
    /// Whether `key` can name an environment variable at all.
    fn is_valid_name(key: &SecretKey) -> bool {
        !key.is_empty() && !key.contains(['=', '\0'])
    }
}

impl Source for Environment {
    fn name(&self) -> &'static str {
        "env"
    }

    fn read(&self, key: &SecretKey) -> Option<RawValue> {
        if !Self::is_valid_name(key) {
            trace!(key, "key is not a valid variable name, skipping environment");
            return None;
        }

        match std::env::var_os(key)?.into_string() {
            Ok(value) => Some(Zeroizing::new(value)),
            Err(_) => {
                trace!(key, "environment variable is not valid unicode");
                None
            }
        }
    }
}
