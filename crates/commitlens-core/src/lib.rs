//! Commitlens Core - Shared types for the commit-style analyzer
//!
//! This crate provides the error taxonomy shared by the git query layer and
//! the CLI.

pub mod error;

pub use error::GitError;
