//! Run command handler.
//!
//! Resolves a target name against the build status and hands the located
//! program or script to the launcher.

use anyhow::Result;
use runlist_core::{LaunchOutcome, LaunchRequest, TargetKind, check_entry_shape, resolve};
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the run command.
///
/// Returns the outcome of the launched process; `main` turns it into the
/// exit code of `runlist` itself.
///
/// # Errors
///
/// Fails when the build is not configured, the name does not resolve to
/// exactly one entry, the entry is malformed, or the process cannot start.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    args: Vec<String>,
    cwd: Option<&str>,
) -> Result<LaunchOutcome> {
    let status = ctx.load_status()?;
    let target = resolve(&status, ctx.naming(), name).map_err(CliError::from)?;

    if let Some(issue) = check_entry_shape(target.entry) {
        return Err(CliError::Config(format!(
            "Recorded {} `{}` is unusable: {issue}",
            target.kind, target.entry
        ))
        .into());
    }

    let path = ctx.paths().locate(target.kind, target.entry);
    let mut request = LaunchRequest::new(path).with_args(args);
    if target.kind == TargetKind::Script {
        request = request.with_interpreter(ctx.config.interpreter.clone());
    }
    if let Some(dir) = cwd {
        request = request.with_working_dir(dir);
    }

    debug!(entry = target.entry, kind = %target.kind, "Dispatching target");
    let outcome = ctx
        .launcher()
        .launch(&request)
        .await
        .map_err(CliError::from)?;
    Ok(outcome)
}
