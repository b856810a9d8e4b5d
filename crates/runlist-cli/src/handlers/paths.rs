//! Paths command handler.
//!
//! Displays all resolved locations for diagnostics. This is the first
//! thing to run when a command cannot find the build.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print resolved locations in `key = value` format, plus the naming
/// convention and script interpreter in effect.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.paths());
    println!("app_name = {}", ctx.naming().app_name());
    println!("app_version = {}", ctx.naming().version());
    println!("profile = {}", ctx.naming().profile());
    println!("interpreter = {}", ctx.config.interpreter.display());
    Ok(())
}
