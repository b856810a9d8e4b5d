//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

/// Available commands.
///
/// Every command reads or writes the build-status file of the configured
/// build directory.
#[derive(Subcommand)]
pub enum Commands {
    /// List the runnable programs and scripts of the configured build
    List {
        /// Print the status as JSON
        #[arg(long, conflicts_with = "short")]
        json: bool,
        /// Print short names instead of entry paths
        #[arg(long)]
        short: bool,
        /// Only list programs
        #[arg(long, conflicts_with = "scripts_only")]
        programs_only: bool,
        /// Only list scripts
        #[arg(long)]
        scripts_only: bool,
    },

    /// Show which entry a target name resolves to
    Resolve {
        /// Short name, path suffix or full entry path
        name: String,
    },

    /// Run a program or script by name
    Run {
        /// Short name, path suffix or full entry path
        name: String,
        /// Working directory for the target
        #[arg(long)]
        cwd: Option<String>,
        /// Arguments passed to the target (after `--`)
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Write a build-status file from explicit lists
    Write {
        /// Program entry (repeatable, order preserved)
        #[arg(long = "program")]
        programs: Vec<String>,
        /// Script entry (repeatable, order preserved)
        #[arg(long = "script")]
        scripts: Vec<String>,
    },

    /// Discover programs in the build directory and record them
    Scan {
        /// Script entry to record alongside the discovered programs
        #[arg(long = "script")]
        scripts: Vec<String>,
        /// Print the file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that every recorded entry exists
    Check,

    /// Show resolved paths and where each came from
    Paths,
}
