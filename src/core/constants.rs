//! Constants used throughout get-secret.

/// Path components of the default secrets directory, below the filesystem root.
///
/// Docker and Swarm mount secrets at `/run/secrets`.
pub const SECRET_DIR_COMPONENTS: &[&str] = &["run", "secrets"];

/// The only string (compared case-insensitively) that casts to `true`.
pub const TRUE_LITERAL: &str = "true";
