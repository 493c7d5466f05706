//! relnotes core - shared foundations for changelog generation
//!
//! This crate provides the error types, configuration loading and the
//! changelog file workflow used by the other relnotes crates.

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use error::{ChangelogError, ConfigError, GitError, RelnotesError, Result};
pub use types::ChangelogKind;
