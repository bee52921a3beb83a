//! Secrets directory source.
//!
//! Each file in the directory is one secret: the file name is the key and
//! the whole content, trailing newline included, is the raw value.

use std::path::{Component, Path, PathBuf};

use tracing::trace;
use zeroize::Zeroizing;

use super::Source;
use crate::core::types::{RawValue, SecretKey};

/// A directory of secret files, such as `/run/secrets`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretDir {
    path: PathBuf,
}

impl SecretDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the file holding `key`.
    ///
    /// Nested keys such as `db/password` resolve below the directory. `None`
    /// for keys with `..`, root or prefix components, or no file name at all,
    /// so a key can never name the directory itself or a file outside it.
    pub fn secret_path(&self, key: &SecretKey) -> Option<PathBuf> {
        let mut named = false;
        for component in Path::new(key).components() {
            match component {
                Component::Normal(_) => named = true,
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }

        named.then(|| self.path.join(key))
    }
}

impl Source for SecretDir {
    fn name(&self) -> &'static str {
        "file"
    }

    fn read(&self, key: &SecretKey) -> Option<RawValue> {
        let Some(path) = self.secret_path(key) else {
            trace!(key, "key escapes the secrets directory, skipping it");
            return None;
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => Some(Zeroizing::new(contents)),
            Err(e) => {
                trace!(key, path = %path.display(), error = %e, "secret file not readable");
                None
            }
        }
    }
}
