//! Type aliases for domain concepts.

use zeroize::Zeroizing;

/// A secret key name (e.g., DB_PASSWORD, API_KEY).
///
/// Used both as a file name in the secrets directory and as an
/// environment variable name.
pub type SecretKey = str;

/// An uncleaned secret value as read from a file or the environment.
///
/// Wiped from memory when dropped.
pub type RawValue = Zeroizing<String>;
