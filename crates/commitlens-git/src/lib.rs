//! Commitlens Git - Read-only git history queries
//!
//! This crate shells out to the `git` CLI; it never writes to the repository.

pub mod history;

pub use history::{GitHistory, Result};
