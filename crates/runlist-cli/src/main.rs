//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use runlist_cli::handlers::list::ListOptions;
use runlist_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};
use runlist_core::LaunchOutcome;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}

/// Exit code of `runlist run`: the child's own code when it fits, 1 otherwise.
fn outcome_exit_code(outcome: LaunchOutcome) -> u8 {
    outcome
        .exit_code
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}

async fn dispatch(cli: Cli) -> anyhow::Result<u8> {
    let config = CliConfig::new(cli.overrides());

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(0);
    };

    let ctx = bootstrap(&config)?;

    match command {
        Commands::List {
            json,
            short,
            programs_only,
            scripts_only,
        } => {
            handlers::list::execute(
                &ctx,
                ListOptions {
                    json,
                    short,
                    programs_only,
                    scripts_only,
                },
            )?;
        }
        Commands::Resolve { name } => {
            handlers::resolve::execute(&ctx, &name)?;
        }
        Commands::Run { name, cwd, args } => {
            let outcome = handlers::run::execute(&ctx, &name, args, cwd.as_deref()).await?;
            return Ok(outcome_exit_code(outcome));
        }
        Commands::Write { programs, scripts } => {
            handlers::write::execute(&ctx, programs, scripts)?;
        }
        Commands::Scan { scripts, dry_run } => {
            handlers::scan::execute(&ctx, scripts, dry_run)?;
        }
        Commands::Check => {
            handlers::check::execute(&ctx)?;
        }
        Commands::Paths => {
            handlers::paths::execute(&ctx)?;
        }
    }

    Ok(0)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
