//! Commitlens - Commit message style analyzer CLI

mod cli;
mod exit_codes;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cli::Cli;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    match cli.execute() {
        Ok(report) => print!("{}", report),
        Err(err) => {
            eprintln!("[ERROR] {}", err);
            std::process::exit(exit_codes::for_error(&err));
        }
    }
}

/// Set up console tracing controlled by RUST_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}
