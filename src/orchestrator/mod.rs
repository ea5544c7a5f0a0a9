//! Developer task runner.
//!
//! Each task is a fixed sequence of external process invocations. The first
//! step that fails to start or exits non-zero ends the task; nothing after
//! it runs.

pub mod runner;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use runner::{CommandRunner, ProcessRunner, Step};

pub const INSTALL_BACKEND: &str = "install backend dependencies";
pub const INSTALL_FRONTEND: &str = "install frontend dependencies";
pub const BUILD_FRONTEND: &str = "build frontend";
pub const RUN_BACKEND: &str = "run backend";
pub const RUN_FRONTEND: &str = "run frontend";
pub const SERVE: &str = "serve";

const SERVER_BIN: &str = "pockett-server";

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("step '{step}' exited with status {code}")]
    StepFailed { step: &'static str, code: i32 },

    #[error("step '{step}' could not be started: {source}")]
    Spawn {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("frontend build failed - {} not found", .0.display())]
    MissingBuildOutput(PathBuf),
}

impl OrchestratorError {
    /// Label of the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            OrchestratorError::StepFailed { step, .. } | OrchestratorError::Spawn { step, .. } => {
                *step
            }
            OrchestratorError::MissingBuildOutput(_) => "verify build output",
        }
    }
}

/// Developer tasks, one per `scripts` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum Task {
    /// Install backend and frontend dependencies
    InstallAll,
    /// Build the frontend and verify its static export
    BuildAll,
    /// Start the backend development server
    DevBackend,
    /// Start the frontend development server
    DevFrontend,
    /// Build the frontend if needed, then serve it from the backend
    Serve,
}

/// Where the project's pieces live, relative to its root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn frontend_dir(&self) -> PathBuf {
        self.root.join("frontend")
    }

    /// Static export produced by the frontend build.
    pub fn build_output(&self) -> PathBuf {
        self.frontend_dir().join("out")
    }
}

pub struct Orchestrator<R> {
    layout: Layout,
    runner: R,
}

impl<R: CommandRunner> Orchestrator<R> {
    pub fn new(layout: Layout, runner: R) -> Self {
        Self { layout, runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn run(&mut self, task: Task) -> Result<(), OrchestratorError> {
        match task {
            Task::InstallAll => self.install_all(),
            Task::BuildAll => self.build_all(),
            Task::DevBackend => self.dev_backend(),
            Task::DevFrontend => self.dev_frontend(),
            Task::Serve => self.serve(),
        }
    }

    pub fn install_all(&mut self) -> Result<(), OrchestratorError> {
        tracing::info!("🔧 Installing backend dependencies...");
        let backend = Step::new(INSTALL_BACKEND, "cargo", &["fetch"]).in_dir(self.layout.root());
        self.execute(&backend)?;

        tracing::info!("📦 Installing frontend dependencies...");
        let frontend = Step::new(INSTALL_FRONTEND, "npm", &["install"]);
        self.execute(&frontend.in_dir(self.layout.frontend_dir()))?;

        tracing::info!("✅ All dependencies installed successfully!");
        Ok(())
    }

    pub fn build_all(&mut self) -> Result<(), OrchestratorError> {
        tracing::info!("🏗️ Building frontend...");
        let build = Step::new(BUILD_FRONTEND, "npm", &["run", "build"]);
        self.execute(&build.in_dir(self.layout.frontend_dir()))?;

        let out = self.layout.build_output();
        if !out.is_dir() {
            return Err(OrchestratorError::MissingBuildOutput(out));
        }
        tracing::info!("📁 Frontend build completed successfully!");

        tracing::info!("✅ Build completed successfully!");
        Ok(())
    }

    pub fn dev_backend(&mut self) -> Result<(), OrchestratorError> {
        tracing::info!("🚀 Starting backend development server...");
        let run = Step::new(RUN_BACKEND, "cargo", &["run", "--bin", SERVER_BIN]);
        self.execute(&run.in_dir(self.layout.root()))
    }

    pub fn dev_frontend(&mut self) -> Result<(), OrchestratorError> {
        tracing::info!("🚀 Starting frontend development server...");
        let run = Step::new(RUN_FRONTEND, "npm", &["run", "dev"]);
        self.execute(&run.in_dir(self.layout.frontend_dir()))
    }

    pub fn serve(&mut self) -> Result<(), OrchestratorError> {
        tracing::info!("🌐 Starting production server...");

        if !self.layout.build_output().is_dir() {
            tracing::warn!("❌ Frontend build not found. Running build first...");
            self.build_all()?;
        }

        tracing::info!("🚀 Starting server with static frontend...");
        let serve = Step::new(SERVE, "cargo", &["run", "--release", "--bin", SERVER_BIN]);
        self.execute(&serve.in_dir(self.layout.root()))
    }

    fn execute(&mut self, step: &Step) -> Result<(), OrchestratorError> {
        tracing::info!("Running: {}", step);
        if let Some(cwd) = &step.cwd {
            tracing::info!("Working directory: {}", cwd.display());
        }

        let code = self
            .runner
            .run(step)
            .map_err(|source| OrchestratorError::Spawn {
                step: step.label,
                source,
            })?;

        if code != 0 {
            return Err(OrchestratorError::StepFailed {
                step: step.label,
                code,
            });
        }

        Ok(())
    }
}
