//! Exit codes for the CLI

use relnotes_core::{GitError, RelnotesError};

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Commit input error
pub const INPUT_ERROR: i32 = 4;

/// Exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<GitError>().is_some() {
        return GIT_ERROR;
    }

    match err.downcast_ref::<RelnotesError>() {
        Some(RelnotesError::Config(_)) => CONFIG_ERROR,
        Some(RelnotesError::Git(_)) => GIT_ERROR,
        Some(RelnotesError::Changelog(_)) | Some(RelnotesError::Json(_)) => INPUT_ERROR,
        _ => ERROR,
    }
}
