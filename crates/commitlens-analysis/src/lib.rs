//! Commitlens Analysis - Commit subject classification and reporting
//!
//! This crate classifies commit subjects against the Conventional Commits
//! pattern and renders the textual analysis report.

pub mod aggregate;
pub mod classifier;
pub mod report;

pub use aggregate::{AggregateCounts, FrequencyTable};
pub use classifier::{classify, Classification};
