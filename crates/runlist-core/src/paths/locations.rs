//! Build directory, status file and source directory resolution.
//!
//! Each location is resolved from an explicit value, an environment
//! variable, or a default derived from the working directory.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{absolutize, normalize_user_path};
use crate::store::STATUS_FILE_NAME;

/// Environment variable overriding the build directory.
pub const BUILD_DIR_ENV: &str = "RUNLIST_BUILD_DIR";

/// Environment variable overriding the status file location.
pub const STATUS_FILE_ENV: &str = "RUNLIST_STATUS_FILE";

/// Environment variable overriding the source directory scripts live in.
pub const SOURCE_DIR_ENV: &str = "RUNLIST_SOURCE_DIR";

/// Default build directory, relative to the working directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// How a location was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// The user passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from environment variables / `.env`.
    EnvVar,
    /// Fallback default.
    Default,
}

/// A resolved location and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolution {
    /// The resolved absolute path.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: PathSource,
}

fn resolve_location(
    explicit: Option<&str>,
    env_key: &str,
    default: impl FnOnce() -> Result<PathBuf, PathError>,
) -> Result<PathResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(PathResolution {
            path: normalize_user_path(path_str)?,
            source: PathSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(env_key) {
        if !env_path.trim().is_empty() {
            return Ok(PathResolution {
                path: normalize_user_path(&env_path)?,
                source: PathSource::EnvVar,
            });
        }
    }

    Ok(PathResolution {
        path: default()?,
        source: PathSource::Default,
    })
}

/// Resolve the build directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `RUNLIST_BUILD_DIR` environment variable
/// 3. `./build`
///
/// The directory need not exist yet, but nothing else may occupy its path.
pub fn resolve_build_dir(explicit: Option<&str>) -> Result<PathResolution, PathError> {
    let resolved = resolve_location(explicit, BUILD_DIR_ENV, || {
        absolutize(PathBuf::from(DEFAULT_BUILD_DIR))
    })?;
    if resolved.path.exists() && !resolved.path.is_dir() {
        return Err(PathError::NotADirectory(resolved.path));
    }
    Ok(resolved)
}

/// Resolve the status file.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `RUNLIST_STATUS_FILE` environment variable
/// 3. `build-status.py` inside `build_dir`
pub fn resolve_status_file(
    explicit: Option<&str>,
    build_dir: &Path,
) -> Result<PathResolution, PathError> {
    resolve_location(explicit, STATUS_FILE_ENV, || {
        Ok(build_dir.join(STATUS_FILE_NAME))
    })
}

/// Resolve the source directory that script entries are relative to.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `RUNLIST_SOURCE_DIR` environment variable
/// 3. The parent of `build_dir` (or `build_dir` itself at a filesystem root)
pub fn resolve_source_dir(
    explicit: Option<&str>,
    build_dir: &Path,
) -> Result<PathResolution, PathError> {
    resolve_location(explicit, SOURCE_DIR_ENV, || {
        Ok(build_dir
            .parent()
            .map_or_else(|| build_dir.to_path_buf(), Path::to_path_buf))
    })
}
