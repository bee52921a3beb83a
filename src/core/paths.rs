//! Default secrets directory.

use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::sync::OnceLock;

use crate::core::constants::SECRET_DIR_COMPONENTS;

static DEFAULT_SECRET_DIR: OnceLock<PathBuf> = OnceLock::new();

/// The platform secrets directory (`/run/secrets` on Unix).
///
/// Computed on first use and shared for the rest of the process.
pub fn default_secret_dir() -> &'static Path {
    DEFAULT_SECRET_DIR.get_or_init(|| {
        SECRET_DIR_COMPONENTS
            .iter()
            .fold(PathBuf::from(MAIN_SEPARATOR_STR), |dir, part| dir.join(part))
    })
}
