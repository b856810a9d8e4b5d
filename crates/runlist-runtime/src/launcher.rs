//! `ProgramLauncher` backed by `tokio::process`.

use std::io;

use async_trait::async_trait;
use runlist_core::{LaunchError, LaunchOutcome, LaunchRequest, ProgramLauncher};
use tokio::process::Command;
use tracing::{debug, info};

/// Spawns targets as child processes with inherited stdio and waits for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLauncher;

impl TokioLauncher {
    pub const fn new() -> Self {
        Self
    }

    fn command(request: &LaunchRequest) -> Command {
        let mut cmd = match &request.interpreter {
            Some(interpreter) => {
                let mut cmd = Command::new(interpreter);
                cmd.arg(&request.program);
                cmd
            }
            None => Command::new(&request.program),
        };
        cmd.args(&request.args);
        if let Some(dir) = &request.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl ProgramLauncher for TokioLauncher {
    async fn launch(&self, request: &LaunchRequest) -> Result<LaunchOutcome, LaunchError> {
        // Scripts are checked here; the interpreter itself is found via PATH.
        if request.interpreter.is_some() && !request.program.exists() {
            return Err(LaunchError::NotFound(request.program.clone()));
        }

        info!(argv = ?request.argv(), "Launching target");
        let mut child = Self::command(request).spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LaunchError::NotFound(
                    request
                        .interpreter
                        .clone()
                        .unwrap_or_else(|| request.program.clone()),
                )
            } else {
                LaunchError::Spawn {
                    program: request.program.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = child.wait().await.map_err(|e| LaunchError::Wait {
            program: request.program.clone(),
            reason: e.to_string(),
        })?;

        let outcome = LaunchOutcome {
            exit_code: status.code(),
        };
        debug!(?outcome, "Target exited");
        Ok(outcome)
    }
}
