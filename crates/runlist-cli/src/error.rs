//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from domain errors to exit codes and user-facing messages.

use runlist_core::{ConfigError, LaunchError, ResolveError, StatusError};
use runlist_runtime::DiscoveryError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// General failure.
    #[error("{0}")]
    General(String),

    /// Argument or target-name error.
    #[error("{0}")]
    Arguments(String),

    /// IO error (unreadable or unwritable files).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error, including an unconfigured or malformed build.
    #[error("{0}")]
    Config(String),

    /// Process launch error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::General(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<StatusError> for CliError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::NotConfigured { .. } | StatusError::Malformed { .. } => {
                Self::Config(err.to_string())
            }
            StatusError::Read { .. }
            | StatusError::TooLarge { .. }
            | StatusError::Encoding { .. }
            | StatusError::Write { .. } => Self::Io(err.to_string()),
        }
    }
}

impl From<ResolveError> for CliError {
    fn from(err: ResolveError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(format!("Configuration error: {err}"))
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        Self::Process(err.to_string())
    }
}

impl From<DiscoveryError> for CliError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::BuildDirMissing(_) => Self::Config(err.to_string()),
            DiscoveryError::Io { .. } => Self::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}
