//! Report rendering

use crate::aggregate::{AggregateCounts, FrequencyTable};

/// How many types/scopes the report lists at most
const TOP_ENTRIES: usize = 8;

/// Conventional-match ratio at which adopting the convention is recommended
const ADOPTION_THRESHOLD: f64 = 0.6;

const TITLE: &str = "Commit Message Style Report";

/// Render the report for a repository with no commits yet.
pub fn render_empty() -> String {
    let mut out = String::new();
    push_title(&mut out);
    out.push_str("No commits found; nothing to analyze.\n");
    out
}

/// Render the full analysis report.
///
/// Output is deterministic for a given `AggregateCounts`. A zero-subject
/// aggregate falls back to the no-commits report so no percentage is ever
/// computed against a zero total.
pub fn render(counts: &AggregateCounts) -> String {
    if counts.total == 0 {
        return render_empty();
    }

    let mut out = String::new();
    push_title(&mut out);

    out.push_str(&format!("Subjects analyzed: {}\n", counts.total));
    out.push_str(&format!(
        "Conventional commits: {} ({}%)\n\n",
        counts.conventional,
        percent(counts.conventional, counts.total)
    ));

    out.push_str("Top types:\n");
    push_table(&mut out, &counts.types);
    out.push('\n');

    out.push_str("Top scopes:\n");
    push_table(&mut out, &counts.scopes);
    out.push('\n');

    out.push_str(&format!(
        "Ticket references (e.g. ABC-123): {} ({}%)\n",
        counts.ticket_refs,
        percent(counts.ticket_refs, counts.total)
    ));
    out.push_str(&format!(
        "Issue references (e.g. #123): {} ({}%)\n\n",
        counts.issue_refs,
        percent(counts.issue_refs, counts.total)
    ));

    out.push_str("Recommendation:\n");
    if counts.conventional_ratio() >= ADOPTION_THRESHOLD {
        out.push_str("  Adopt Conventional Commits: type(scope): subject\n");
    } else {
        out.push_str("  Mimic the dominant pattern already used in this history.\n");
    }

    out
}

fn push_title(out: &mut String) {
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push_str("\n\n");
}

fn push_table(out: &mut String, table: &FrequencyTable) {
    if table.is_empty() {
        out.push_str("  (none detected)\n");
        return;
    }
    for (token, count) in table.top(TOP_ENTRIES) {
        out.push_str(&format!("  {:<12} {}\n", token, count));
    }
}

/// Whole-percent share, rounded to nearest. Callers guarantee `total > 0`.
fn percent(part: usize, total: usize) -> u32 {
    ((part as f64 / total as f64) * 100.0).round() as u32
}
