//! Check command handler.
//!
//! Verifies that every recorded entry exists under its root directory.

use anyhow::Result;
use runlist_core::validate_entries;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the check command.
///
/// # Errors
///
/// Fails when the status cannot be loaded or any entry has a problem.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let status = ctx.load_status()?;
    let problems = validate_entries(&status, ctx.paths());

    if problems.is_empty() {
        println!("All {} recorded target(s) present", status.len());
        return Ok(());
    }

    for problem in &problems {
        println!("{problem}");
    }
    Err(CliError::General(format!(
        "{} of {} recorded target(s) have problems",
        problems.len(),
        status.len()
    ))
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use runlist_core::{BuildStatus, write_atomic};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_passes_when_entries_exist() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        let program = ctx.paths().build_dir.join("ns3-dev-a-debug");
        fs::write(&program, "").unwrap();
        fs::write(dir.path().join("run.py"), "").unwrap();
        write_atomic(
            &ctx.paths().status_file,
            &BuildStatus::new(["ns3-dev-a-debug"], ["run.py"]),
        )
        .unwrap();

        execute(&ctx).unwrap();
    }

    #[test]
    fn test_check_fails_on_missing_entry() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        write_atomic(
            &ctx.paths().status_file,
            &BuildStatus::new(["scratch/ns3-dev-gone-debug"], Vec::<String>::new()),
        )
        .unwrap();

        let err = execute(&ctx).unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 1);
    }

    #[test]
    fn test_empty_status_checks_clean() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        write_atomic(&ctx.paths().status_file, &BuildStatus::empty()).unwrap();

        execute(&ctx).unwrap();
    }
}
