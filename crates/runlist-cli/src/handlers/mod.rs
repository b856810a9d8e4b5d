//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<...>`
//! - Thin wrappers that:
//!   1. Load the build status through the context
//!   2. Call runlist-core / runlist-runtime operations
//!   3. Format output for the terminal
//!
//! Domain errors are converted to `CliError` so `main` can pick an exit code.

pub mod check;
pub mod list;
pub mod paths;
pub mod resolve;
pub mod run;
pub mod scan;
pub mod write;
