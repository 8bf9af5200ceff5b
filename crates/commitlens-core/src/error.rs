//! Error types for commitlens

use std::path::PathBuf;
use thiserror::Error;

/// Errors from git history queries
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside a git working tree
    #[error("not a git repository: {0}")]
    NotARepository(PathBuf),

    /// git ran but the history query failed; carries git's diagnostic output
    #[error("git history query failed: {0}")]
    QueryFailed(String),

    /// git itself could not be invoked
    #[error("failed to invoke git: {0}")]
    Io(#[from] std::io::Error),
}
