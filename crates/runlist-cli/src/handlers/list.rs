//! List command handler.
//!
//! Prints the recorded entries, one per line, or the whole status as JSON.

use anyhow::Result;
use runlist_core::{BuildStatus, TargetKind, TargetNaming, short_name};
use serde_json::{Map, Value};

use crate::bootstrap::CliContext;

/// Which entries to print and how.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub json: bool,
    pub short: bool,
    pub programs_only: bool,
    pub scripts_only: bool,
}

impl ListOptions {
    fn kinds(self) -> Vec<TargetKind> {
        match (self.programs_only, self.scripts_only) {
            (true, false) => vec![TargetKind::Program],
            (false, true) => vec![TargetKind::Script],
            _ => vec![TargetKind::Program, TargetKind::Script],
        }
    }
}

/// Execute the list command.
///
/// # Errors
///
/// Fails when the build is not configured or the status file is malformed.
pub fn execute(ctx: &CliContext, options: ListOptions) -> Result<()> {
    let status = ctx.load_status()?;

    if status.is_empty() && !options.json {
        eprintln!(
            "No runnable targets recorded in {}",
            ctx.paths().status_file.display()
        );
        return Ok(());
    }

    print!("{}", format_listing(&status, ctx.naming(), options)?);
    Ok(())
}

/// Render the listing as printed by `execute`.
pub fn format_listing(
    status: &BuildStatus,
    naming: &TargetNaming,
    options: ListOptions,
) -> Result<String> {
    let kinds = options.kinds();

    if options.json {
        let mut object = Map::new();
        for kind in kinds {
            let key = match kind {
                TargetKind::Program => "programs",
                TargetKind::Script => "scripts",
            };
            object.insert(key.to_string(), serde_json::to_value(status.of_kind(kind))?);
        }
        let mut out = serde_json::to_string_pretty(&Value::Object(object))?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = String::new();
    for kind in kinds {
        for entry in status.of_kind(kind) {
            let line = if options.short {
                short_name(kind, entry, naming)
            } else {
                entry.as_str()
            };
            out.push_str(line);
            out.push('\n');
        }
    }
    Ok(out)
}
