//! Exit codes for the CLI

use commitlens_core::GitError;

/// General error (failed history query, I/O failure)
pub const ERROR: i32 = 1;

/// Current directory is not a git repository
pub const NOT_A_REPOSITORY: i32 = 2;

/// Map a failure to its process exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GitError>() {
        Some(GitError::NotARepository(_)) => NOT_A_REPOSITORY,
        _ => ERROR,
    }
}
