//! Git history operations

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, info, instrument};

use commitlens_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Read-only view of a repository's history, backed by the `git` CLI.
///
/// Opening verifies the path is inside a working tree; every query is a
/// single synchronous subprocess invocation with its exit status inspected.
pub struct GitHistory {
    path: PathBuf,
}

impl GitHistory {
    /// Open the repository containing the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "verifying git repository");
        let output = Command::new("git")
            .args(["rev-parse", "--is-inside-work-tree"])
            .current_dir(path)
            .output()?;

        if !output.status.success() {
            return Err(GitError::NotARepository(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the repository has at least one commit.
    ///
    /// A repository without a HEAD revision is a valid state (brand-new
    /// repository), not an error; `git log` would fail on it, so callers must
    /// check this before fetching subjects.
    pub fn has_commits(&self) -> Result<bool> {
        let output = self.run_git(&["rev-parse", "--verify", "HEAD"])?;
        Ok(output.status.success())
    }

    /// Fetch the subject lines of the most recent `limit` commits, newest
    /// first. Subjects are trimmed and empty lines discarded.
    #[instrument(skip(self))]
    pub fn recent_subjects(&self, limit: usize) -> Result<Vec<String>> {
        let output = self.run_git(&[
            "log",
            "-n",
            &limit.to_string(),
            "--pretty=format:%s",
        ])?;

        if !output.status.success() {
            let diagnostic = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::QueryFailed(diagnostic));
        }

        let subjects: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        info!(count = subjects.len(), "fetched commit subjects");
        Ok(subjects)
    }

    fn run_git(&self, args: &[&str]) -> Result<Output> {
        debug!(?args, "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(GitError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn init_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        git(temp.path(), &["init", "-q"]);
        git(temp.path(), &["config", "user.name", "Test Author"]);
        git(temp.path(), &["config", "user.email", "test@example.com"]);
        git(temp.path(), &["config", "commit.gpgsign", "false"]);
        temp
    }

    fn commit(dir: &Path, message: &str) {
        git(dir, &["commit", "--allow-empty", "-q", "-m", message]);
    }

    #[test]
    fn test_open_outside_repository() {
        let temp = TempDir::new().unwrap();
        let result = GitHistory::open(temp.path());
        assert!(matches!(result, Err(GitError::NotARepository(_))));
    }

    #[test]
    fn test_open_inside_repository() {
        let temp = init_repo();
        let history = GitHistory::open(temp.path()).unwrap();
        assert_eq!(history.path(), temp.path());
    }

    #[test]
    fn test_has_commits_on_empty_repository() {
        let temp = init_repo();
        let history = GitHistory::open(temp.path()).unwrap();
        assert!(!history.has_commits().unwrap());
    }

    #[test]
    fn test_has_commits_after_commit() {
        let temp = init_repo();
        commit(temp.path(), "feat: first commit");

        let history = GitHistory::open(temp.path()).unwrap();
        assert!(history.has_commits().unwrap());
    }

    #[test]
    fn test_recent_subjects_newest_first() {
        let temp = init_repo();
        commit(temp.path(), "feat: first");
        commit(temp.path(), "fix: second");
        commit(temp.path(), "docs: third");

        let history = GitHistory::open(temp.path()).unwrap();
        let subjects = history.recent_subjects(50).unwrap();

        assert_eq!(subjects, vec!["docs: third", "fix: second", "feat: first"]);
    }

    #[test]
    fn test_recent_subjects_on_broken_repository() {
        let temp = init_repo();
        commit(temp.path(), "feat: first");
        let history = GitHistory::open(temp.path()).unwrap();

        // Drop the object store so the log walk fails
        std::fs::remove_dir_all(temp.path().join(".git").join("objects")).unwrap();

        let err = history.recent_subjects(50).unwrap_err();
        match err {
            GitError::QueryFailed(diagnostic) => assert!(!diagnostic.is_empty()),
            other => panic!("expected QueryFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_recent_subjects_honors_limit() {
        let temp = init_repo();
        for i in 0..5 {
            commit(temp.path(), &format!("chore: commit {}", i));
        }

        let history = GitHistory::open(temp.path()).unwrap();
        let subjects = history.recent_subjects(2).unwrap();

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0], "chore: commit 4");
    }
}
