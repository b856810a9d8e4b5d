//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use runlist_core::{ConfigOverrides, PathOverrides};

use crate::commands::Commands;

/// Command-line interface for inspecting and running build targets.
///
/// Global options override the matching `RUNLIST_*` environment variables.
#[derive(Parser)]
#[command(name = "runlist")]
#[command(about = "Inspect, record and run the targets a configured build can run")]
#[command(version)]
pub struct Cli {
    /// Build directory holding compiled programs
    #[arg(long = "build-dir", global = true)]
    pub build_dir: Option<String>,

    /// Build-status file (defaults to <build-dir>/build-status.py)
    #[arg(long = "status-file", global = true)]
    pub status_file: Option<String>,

    /// Source directory script entries are relative to
    #[arg(long = "source-dir", global = true)]
    pub source_dir: Option<String>,

    /// Application name prefix of program binaries
    #[arg(long = "app-name", global = true)]
    pub app_name: Option<String>,

    /// Application version component of program binaries
    #[arg(long = "app-version", global = true)]
    pub app_version: Option<String>,

    /// Build profile: debug, optimized or release
    #[arg(long = "profile", global = true)]
    pub profile: Option<String>,

    /// Interpreter used to run scripts
    #[arg(long = "python", global = true)]
    pub python: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Explicit configuration overrides taken from the global flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            paths: PathOverrides {
                build_dir: self.build_dir.clone(),
                status_file: self.status_file.clone(),
                source_dir: self.source_dir.clone(),
            },
            app_name: self.app_name.clone(),
            app_version: self.app_version.clone(),
            profile: self.profile.clone(),
            interpreter: self.python.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "runlist",
            "--verbose",
            "--build-dir",
            "/tmp/build",
            "list",
            "--profile",
            "optimized",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.build_dir, Some("/tmp/build".to_string()));

        let overrides = cli.overrides();
        assert_eq!(overrides.paths.build_dir, Some("/tmp/build".to_string()));
        assert_eq!(overrides.profile, Some("optimized".to_string()));
        assert_eq!(overrides.interpreter, None);
    }

    #[test]
    fn test_run_passes_trailing_args() {
        let cli = Cli::parse_from(["runlist", "run", "ndncc-simple", "--", "--nodes=4", "-v"]);
        assert!(!cli.verbose);
        match cli.command {
            Some(Commands::Run { name, args, cwd }) => {
                assert_eq!(name, "ndncc-simple");
                assert_eq!(args, vec!["--nodes=4", "-v"]);
                assert_eq!(cwd, None);
            }
            _ => panic!("expected run command"),
        }
    }
}
