//! Aggregate counts over classified subjects

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifier::classify;

/// Frequency table that remembers first-encounter order.
///
/// The report sorts entries by descending count; ties keep the order in
/// which the tokens were first seen, so output is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    /// Record one occurrence of a token
    pub fn record(&mut self, token: &str) {
        if !self.counts.contains_key(token) {
            self.order.push(token.to_string());
        }
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// Whether no tokens were recorded
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total occurrences across all tokens
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` most frequent tokens with their counts, descending by count,
    /// ties in first-encounter order.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .order
            .iter()
            .map(|token| (token.clone(), self.counts[token]))
            .collect();
        // Stable sort keeps first-encounter order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Aggregate counts for one analysis run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateCounts {
    /// Number of subjects analyzed
    pub total: usize,
    /// Number of subjects matching the conventional pattern
    pub conventional: usize,
    /// Per-type occurrence counts
    pub types: FrequencyTable,
    /// Per-scope occurrence counts
    pub scopes: FrequencyTable,
    /// Number of subjects containing a ticket reference
    pub ticket_refs: usize,
    /// Number of subjects containing an issue/PR reference
    pub issue_refs: usize,
}

impl AggregateCounts {
    /// Fold a list of subjects into aggregate counts.
    ///
    /// An empty list yields all-zero aggregates.
    pub fn from_subjects<S: AsRef<str>>(subjects: &[S]) -> Self {
        let mut counts = Self::default();

        for subject in subjects {
            let result = classify(subject.as_ref());
            counts.total += 1;

            if result.conventional {
                counts.conventional += 1;
            }
            if let Some(commit_type) = &result.commit_type {
                counts.types.record(commit_type);
            }
            if let Some(scope) = &result.scope {
                counts.scopes.record(scope);
            }
            if result.has_ticket_ref {
                counts.ticket_refs += 1;
            }
            if result.has_issue_ref {
                counts.issue_refs += 1;
            }
        }

        debug!(
            total = counts.total,
            conventional = counts.conventional,
            "aggregated commit subjects"
        );
        counts
    }

    /// Share of conventional subjects, in [0.0, 1.0]; 0.0 when empty
    pub fn conventional_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.conventional as f64 / self.total as f64
    }
}
