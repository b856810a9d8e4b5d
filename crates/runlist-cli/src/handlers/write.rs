//! Write command handler.
//!
//! Replaces the build-status file with explicit program and script lists.

use anyhow::Result;
use runlist_core::{BuildStatus, write_atomic};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the write command. Entries are recorded exactly as given.
pub fn execute(ctx: &CliContext, programs: Vec<String>, scripts: Vec<String>) -> Result<()> {
    let status = BuildStatus::new(programs, scripts);
    let path = &ctx.paths().status_file;
    write_atomic(path, &status).map_err(CliError::from)?;

    println!(
        "Wrote {} program(s) and {} script(s) to {}",
        status.programs().len(),
        status.scripts().len(),
        path.display()
    );
    Ok(())
}
