//! The analysis flow: verify repository, fetch subjects, classify, report

use std::path::Path;

use tracing::info;

use commitlens_analysis::{report, AggregateCounts};
use commitlens_git::GitHistory;

/// How many recent commits the analysis considers
const HISTORY_LIMIT: usize = 50;

/// Run the full analysis against the repository containing `path` and return
/// the rendered report.
///
/// A repository with zero commits is a valid input and yields the no-commits
/// report without touching the log.
pub fn run(path: &Path) -> anyhow::Result<String> {
    let history = GitHistory::open(path)?;

    if !history.has_commits()? {
        info!("repository has no commits");
        return Ok(report::render_empty());
    }

    let subjects = history.recent_subjects(HISTORY_LIMIT)?;
    let counts = AggregateCounts::from_subjects(&subjects);

    Ok(report::render(&counts))
}
