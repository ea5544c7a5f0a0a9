use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pockett_docs::orchestrator::{Layout, Orchestrator, ProcessRunner, Task};
use pockett_docs::telemetry;

/// Development and build tasks for the backend and frontend.
#[derive(Debug, Parser)]
#[command(name = "scripts", version)]
struct Cli {
    /// Project root containing Cargo.toml and frontend/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    task: Task,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init();

    let mut orchestrator = Orchestrator::new(Layout::new(cli.root), ProcessRunner);

    match orchestrator.run(cli.task) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("❌ {:?} failed at step '{}': {}", cli.task, err.step(), err);
            ExitCode::FAILURE
        }
    }
}
