//! Scan command handler.
//!
//! Regenerates the build-status file from the programs found in the build
//! directory, the way the configure step records them.

use anyhow::Result;
use runlist_core::{BuildStatus, render_status, write_atomic};
use runlist_runtime::discover_programs;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the scan command.
///
/// With `dry_run` the rendered file is printed and nothing is written.
pub fn execute(ctx: &CliContext, scripts: Vec<String>, dry_run: bool) -> Result<()> {
    let paths = ctx.paths();
    let programs = discover_programs(&paths.build_dir, ctx.naming()).map_err(CliError::from)?;
    let status = BuildStatus::new(programs, scripts);

    if dry_run {
        print!("{}", render_status(&status));
        return Ok(());
    }

    write_atomic(&paths.status_file, &status).map_err(CliError::from)?;
    info!(
        programs = status.programs().len(),
        scripts = status.scripts().len(),
        "Recorded scan results"
    );
    println!(
        "Recorded {} program(s) and {} script(s) in {}",
        status.programs().len(),
        status.scripts().len(),
        paths.status_file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use std::fs;
    use tempfile::tempdir;

    fn program(ctx: &CliContext, relative: &str) {
        let path = ctx.paths().build_dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn test_scan_records_discovered_programs() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        program(&ctx, "scratch/ns3-dev-ndncc-simple-debug");
        program(&ctx, "scratch/subdir/ns3-dev-subdir-debug");

        execute(&ctx, vec!["examples/tutorial/first.py".into()], false).unwrap();

        let status = ctx.load_status().unwrap();
        assert_eq!(
            status.programs(),
            [
                "scratch/ns3-dev-ndncc-simple-debug",
                "scratch/subdir/ns3-dev-subdir-debug"
            ]
        );
        assert_eq!(status.scripts(), ["examples/tutorial/first.py"]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        program(&ctx, "scratch/ns3-dev-a-debug");

        execute(&ctx, Vec::new(), true).unwrap();
        assert!(!ctx.paths().status_file.exists());
    }

    #[test]
    fn test_scan_without_build_dir_is_config_error() {
        let dir = tempdir().unwrap();
        let ctx = context(dir.path());
        fs::remove_dir(&ctx.paths().build_dir).unwrap();

        let err = execute(&ctx, Vec::new(), false).unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 78);
    }
}
