//! Core library components.
//!
//! Sources, cleaning, casting and the resolver that ties them together.

pub mod cast;
pub mod clean;
pub mod config;
pub mod constants;
pub mod paths;
pub mod resolver;
pub mod source;
pub mod types;
