use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Step {
    pub fn new(label: &'static str, program: &str, args: &[&str]) -> Self {
        Self {
            label,
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            cwd: None,
        }
    }

    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a step to completion and reports its exit code.
pub trait CommandRunner {
    fn run(&mut self, step: &Step) -> io::Result<i32>;
}

/// Spawns steps as child processes inheriting stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, step: &Step) -> io::Result<i32> {
        let mut command = Command::new(&step.program);
        command.args(&step.args);
        if let Some(cwd) = &step.cwd {
            command.current_dir(cwd);
        }

        let status = command.status()?;
        // Killed by a signal: no code, report as failure.
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        let step = Step::new("build frontend", "npm", &["run", "build"]).in_dir("frontend");
        assert_eq!(step.to_string(), "npm run build");
        assert_eq!(step.cwd, Some(PathBuf::from("frontend")));
    }

    #[test]
    fn test_process_runner_reports_spawn_failure() {
        let step = Step::new("missing", "definitely-not-a-real-program-7f3a", &[]);
        assert!(ProcessRunner.run(&step).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_exit_codes() {
        let ok = Step::new("true", "sh", &["-c", "exit 0"]);
        let failing = Step::new("false", "sh", &["-c", "exit 3"]);

        assert_eq!(ProcessRunner.run(&ok).unwrap(), 0);
        assert_eq!(ProcessRunner.run(&failing).unwrap(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_uses_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let step = Step::new("touch", "sh", &["-c", "touch marker"]).in_dir(dir.path());

        assert_eq!(ProcessRunner.run(&step).unwrap(), 0);
        assert!(dir.path().join("marker").exists());
    }
}
