//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Configuration (paths, naming, interpreter) via runlist-core
//! - Program launcher via runlist-runtime
//!
//! Command handlers receive the composed `CliContext`.

use std::sync::Arc;

use runlist_core::{
    BuildStatus, ConfigOverrides, ProgramLauncher, ResolvedPaths, RunlistConfig, TargetNaming,
    load,
};
use runlist_runtime::TokioLauncher;
use tracing::debug;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit overrides from global flags.
    pub overrides: ConfigOverrides,
}

impl CliConfig {
    pub const fn new(overrides: ConfigOverrides) -> Self {
        Self { overrides }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Resolved configuration.
    pub config: RunlistConfig,
    /// Launcher used by `run`.
    pub launcher: Arc<dyn ProgramLauncher>,
}

impl CliContext {
    /// Compose a context around an existing configuration and launcher.
    pub fn new(config: RunlistConfig, launcher: Arc<dyn ProgramLauncher>) -> Self {
        Self { config, launcher }
    }

    pub const fn paths(&self) -> &ResolvedPaths {
        &self.config.paths
    }

    pub const fn naming(&self) -> &TargetNaming {
        &self.config.naming
    }

    pub fn launcher(&self) -> &Arc<dyn ProgramLauncher> {
        &self.launcher
    }

    /// Load the build-status file of the configured build.
    pub fn load_status(&self) -> Result<BuildStatus, CliError> {
        Ok(load(&self.config.paths.status_file)?)
    }
}

/// Bootstrap the CLI application.
///
/// Resolves configuration and creates the tokio-backed launcher.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let resolved = RunlistConfig::resolve(&config.overrides)?;
    debug!(
        build_dir = %resolved.paths.build_dir.display(),
        status_file = %resolved.paths.status_file.display(),
        profile = %resolved.naming.profile(),
        "Bootstrapped CLI context"
    );

    let launcher: Arc<dyn ProgramLauncher> = Arc::new(TokioLauncher::new());
    Ok(CliContext::new(resolved, launcher))
}
