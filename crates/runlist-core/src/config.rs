//! Runtime configuration composed from overrides, environment and defaults.
//!
//! Precedence for every setting: explicit override, then the `RUNLIST_*`
//! environment variable, then the built-in default.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::naming::{BuildProfile, DEFAULT_APP_NAME, DEFAULT_APP_VERSION, NamingError, TargetNaming};
use crate::paths::{PathError, PathOverrides, ResolvedPaths};

/// Environment variable overriding the application name prefix.
pub const APP_NAME_ENV: &str = "RUNLIST_APP_NAME";

/// Environment variable overriding the application version component.
pub const APP_VERSION_ENV: &str = "RUNLIST_APP_VERSION";

/// Environment variable overriding the build profile.
pub const PROFILE_ENV: &str = "RUNLIST_PROFILE";

/// Environment variable naming the script interpreter.
pub const INTERPRETER_ENV: &str = "RUNLIST_PYTHON";

/// Interpreter used for scripts when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// Explicit settings, typically from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub paths: PathOverrides,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub profile: Option<String>,
    pub interpreter: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunlistConfig {
    pub paths: ResolvedPaths,
    pub naming: TargetNaming,
    pub interpreter: PathBuf,
}

impl RunlistConfig {
    /// Resolve every setting.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let paths = ResolvedPaths::resolve(&overrides.paths)?;

        let app_name = setting(overrides.app_name.as_deref(), APP_NAME_ENV)
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let app_version = setting(overrides.app_version.as_deref(), APP_VERSION_ENV)
            .unwrap_or_else(|| DEFAULT_APP_VERSION.to_string());
        let profile = match setting(overrides.profile.as_deref(), PROFILE_ENV) {
            Some(raw) => raw.parse::<BuildProfile>()?,
            None => BuildProfile::default(),
        };
        let naming = TargetNaming::new(app_name, app_version, profile)?;

        let interpreter = setting(overrides.interpreter.as_deref(), INTERPRETER_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_INTERPRETER), PathBuf::from);

        Ok(Self {
            paths,
            naming,
            interpreter,
        })
    }
}

fn setting(explicit: Option<&str>, env_key: &str) -> Option<String> {
    if let Some(value) = explicit {
        return Some(value.to_string());
    }
    env::var(env_key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
