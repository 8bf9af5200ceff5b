//! Conventional Commits classifier
//!
//! Classifies commit subjects against the Conventional Commits convention:
//! https://www.conventionalcommits.org/

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex for the conventional subject shape: a closed set of type tokens,
/// an optional non-empty parenthesized scope, then `: ` and a non-empty
/// description. Anchored at the start and case-sensitive on the type token.
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>feat|fix|docs|refactor|test|perf|build|ci|chore|revert)(?:\((?P<scope>[^)]+)\))?: .+",
    )
    .expect("Invalid regex")
});

/// Regex for tracker ticket references such as `ABC-123`
static TICKET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,10}-[0-9]+\b").expect("Invalid regex"));

/// Regex for issue/PR references such as `#42`
static ISSUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9]+\b").expect("Invalid regex"));

/// Classification of a single commit subject
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Whether the subject matches the conventional pattern
    pub conventional: bool,
    /// The matched type token, if conventional
    pub commit_type: Option<String>,
    /// The scope taken verbatim from inside the parentheses, if present
    pub scope: Option<String>,
    /// Whether the subject contains a ticket reference
    pub has_ticket_ref: bool,
    /// Whether the subject contains an issue/PR reference
    pub has_issue_ref: bool,
}

/// Classify a single commit subject.
///
/// The conventional, ticket and issue tests are independent; a subject may
/// count toward all three at once. A scope must be non-empty: `feat(): x`
/// matches neither the scope group nor the bare `type: ` shape, so it is not
/// conventional.
pub fn classify(subject: &str) -> Classification {
    let caps = CONVENTIONAL_REGEX.captures(subject);

    let commit_type = caps
        .as_ref()
        .and_then(|c| c.name("type"))
        .map(|m| m.as_str().to_string());
    let scope = caps
        .as_ref()
        .and_then(|c| c.name("scope"))
        .map(|m| m.as_str().to_string());

    Classification {
        conventional: commit_type.is_some(),
        commit_type,
        scope,
        has_ticket_ref: TICKET_REGEX.is_match(subject),
        has_issue_ref: ISSUE_REGEX.is_match(subject),
    }
}
