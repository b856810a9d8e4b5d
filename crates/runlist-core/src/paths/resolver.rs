//! All resolved locations in one value.
//!
//! `ResolvedPaths` is what the CLI composes once at startup and what
//! `runlist paths` prints, so every command agrees on where the build tree
//! and status file are.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::locations::{
    PathSource, resolve_build_dir, resolve_source_dir, resolve_status_file,
};
use crate::status::TargetKind;

/// Explicit overrides, typically from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathOverrides {
    pub build_dir: Option<String>,
    pub status_file: Option<String>,
    pub source_dir: Option<String>,
}

/// All resolved locations captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory holding compiled programs.
    pub build_dir: PathBuf,
    pub build_dir_source: PathSource,
    /// The build-status artifact.
    pub status_file: PathBuf,
    pub status_file_source: PathSource,
    /// Directory script entries are relative to.
    pub source_dir: PathBuf,
    pub source_dir_source: PathSource,
}

impl ResolvedPaths {
    /// Resolve every location, honoring `overrides` first.
    pub fn resolve(overrides: &PathOverrides) -> Result<Self, PathError> {
        let build = resolve_build_dir(overrides.build_dir.as_deref())?;
        let status = resolve_status_file(overrides.status_file.as_deref(), &build.path)?;
        let source = resolve_source_dir(overrides.source_dir.as_deref(), &build.path)?;

        Ok(Self {
            build_dir: build.path,
            build_dir_source: build.source,
            status_file: status.path,
            status_file_source: status.source,
            source_dir: source.path,
            source_dir_source: source.source,
        })
    }

    /// Directory an entry of `kind` is relative to.
    pub fn root_for(&self, kind: TargetKind) -> &Path {
        match kind {
            TargetKind::Program => &self.build_dir,
            TargetKind::Script => &self.source_dir,
        }
    }

    /// Filesystem location of an entry.
    pub fn locate(&self, kind: TargetKind, entry: &str) -> PathBuf {
        entry
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root_for(kind).to_path_buf(), |path, part| path.join(part))
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "build_dir = {}", self.build_dir.display())?;
        writeln!(f, "build_dir_source = {:?}", self.build_dir_source)?;
        writeln!(f, "status_file = {}", self.status_file.display())?;
        writeln!(f, "status_file_source = {:?}", self.status_file_source)?;
        writeln!(f, "source_dir = {}", self.source_dir.display())?;
        write!(f, "source_dir_source = {:?}", self.source_dir_source)
    }
}
