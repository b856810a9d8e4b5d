//! Resolve command handler.

use anyhow::Result;
use runlist_core::resolve;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print `<kind>\t<entry>\t<path>` for the entry `name` resolves to.
pub fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let status = ctx.load_status()?;
    let target = resolve(&status, ctx.naming(), name).map_err(CliError::from)?;
    let path = ctx.paths().locate(target.kind, target.entry);

    println!("{}\t{}\t{}", target.kind, target.entry, path.display());
    Ok(())
}
