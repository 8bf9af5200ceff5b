//! CLI definition and command handling

mod analyze;

use clap::Parser;

/// Commitlens - analyze recent commit subjects for Conventional Commits
///
/// Runs against the current directory; takes no arguments.
#[derive(Debug, Parser)]
#[command(name = "commitlens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Execute the analysis and return the rendered report
    pub fn execute(self) -> anyhow::Result<String> {
        let cwd = std::env::current_dir()?;
        analyze::run(&cwd)
    }
}
