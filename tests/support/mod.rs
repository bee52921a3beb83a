//! Test support utilities for get-secret integration tests.
//!
//! Provides an isolated secrets directory per test plus uniquely named
//! environment variables, so tests can run in parallel.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use std::cell::RefCell;
use std::path::Path;

use get_secret::Resolver;
use tempfile::TempDir;

/// Test environment with an isolated secrets directory.
///
/// Environment variables set through `set_env` get a per-test suffix and
/// are removed again when the `Test` is dropped.
pub struct Test {
    /// Temporary secrets directory
    pub dir: TempDir,
    suffix: String,
    env_vars: RefCell<Vec<String>>,
}

impl Test {
    /// Create an empty secrets directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let suffix = uuid::Uuid::new_v4().simple().to_string().to_uppercase();

        Self {
            dir,
            suffix,
            env_vars: RefCell::new(Vec::new()),
        }
    }

    /// Create a secrets directory holding `SECRET_FILES`, with `ENV_VARS`
    /// exported under their suffixed names.
    pub fn standard() -> Self {
        let t = Self::new();
        for (key, value) in SECRET_FILES {
            t.secret(key, value);
        }
        for (key, value) in ENV_VARS {
            t.set_env(key, value);
        }
        t
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a secret file.
    pub fn secret(&self, key: &str, value: &str) {
        std::fs::write(self.dir.path().join(key), value).expect("failed to write secret");
    }

    /// Process-unique environment variable name for `key`.
    pub fn env_key(&self, key: &str) -> String {
        format!("{}_{}", key, self.suffix)
    }

    /// Export an environment variable and return its real name.
    pub fn set_env(&self, key: &str, value: &str) -> String {
        let name = self.env_key(key);
        std::env::set_var(&name, value);
        self.env_vars.borrow_mut().push(name.clone());
        name
    }

    /// Resolver reading from this test's secrets directory.
    pub fn resolver(&self) -> Resolver {
        Resolver::default().secret_dir(self.dir.path())
    }
}

impl Drop for Test {
    fn drop(&mut self) {
        for name in self.env_vars.borrow().iter() {
            std::env::remove_var(name);
        }
    }
}
