//! Program launcher port.
//!
//! Run-dispatch resolves a target in core and hands a `LaunchRequest` to a
//! launcher. Implementations own the process lifecycle; core never spawns.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// What to run.
///
/// Scripts carry an interpreter; programs are executed directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    /// Program or script path.
    pub program: PathBuf,
    /// Arguments passed after the program.
    pub args: Vec<String>,
    /// Interpreter to run `program` with, if any.
    pub interpreter: Option<PathBuf>,
    /// Working directory for the child (inherits ours when `None`).
    pub working_dir: Option<PathBuf>,
}

impl LaunchRequest {
    /// Request to run `program` directly with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            interpreter: None,
            working_dir: None,
        }
    }

    /// Set the arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Run through an interpreter.
    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    /// Run in a specific working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The full argument vector, interpreter first when present.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        if let Some(interpreter) = &self.interpreter {
            argv.push(interpreter.to_string_lossy().into_owned());
        }
        argv.push(self.program.to_string_lossy().into_owned());
        argv.extend(self.args.iter().cloned());
        argv
    }
}

/// How a launched process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl LaunchOutcome {
    pub const fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
        }
    }

    pub const fn signaled() -> Self {
        Self { exit_code: None }
    }

    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Launch failures.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The program (or interpreter) does not exist.
    #[error("Program not found: {0}")]
    NotFound(PathBuf),

    /// The process could not be started.
    #[error("Failed to start {program}: {reason}")]
    Spawn { program: PathBuf, reason: String },

    /// The process started but waiting on it failed.
    #[error("Failed to wait for {program}: {reason}")]
    Wait { program: PathBuf, reason: String },
}

/// Runs resolved targets.
#[async_trait]
pub trait ProgramLauncher: Send + Sync {
    /// Run the request to completion, inheriting stdio.
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_puts_interpreter_first() {
        let request = LaunchRequest::new("/src/examples/first.py")
            .with_interpreter("python3")
            .with_args(vec!["--verbose".to_string()]);
        assert_eq!(
            request.argv(),
            vec!["python3", "/src/examples/first.py", "--verbose"]
        );
    }

    #[test]
    fn outcome_success_requires_zero_exit() {
        assert!(LaunchOutcome::exited(0).success());
        assert!(!LaunchOutcome::exited(3).success());
        assert!(!LaunchOutcome::signaled().success());
    }
}
