//! Consumer-side validation of status entries against the filesystem.
//!
//! The artifact itself never checks that its entries exist; this module
//! does, for `runlist check` and for the launcher's early error reporting.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::paths::ResolvedPaths;
use crate::status::{BuildStatus, TargetKind};

/// What is wrong with an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryIssue {
    /// The entry is an empty string.
    Empty,
    /// The entry is an absolute path.
    Absolute,
    /// The entry contains `..` and may point outside its root.
    EscapesRoot,
    /// Nothing exists at the located path.
    Missing(PathBuf),
    /// Something exists, but it is not a regular file.
    NotAFile(PathBuf),
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("entry is empty"),
            Self::Absolute => f.write_str("entry is an absolute path"),
            Self::EscapesRoot => f.write_str("entry escapes its root directory"),
            Self::Missing(path) => write!(f, "{} does not exist", path.display()),
            Self::NotAFile(path) => write!(f, "{} is not a regular file", path.display()),
        }
    }
}

/// A problem found with one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryProblem {
    pub kind: TargetKind,
    pub entry: String,
    pub issue: EntryIssue,
}

impl fmt::Display for EntryProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}`: {}", self.kind, self.entry, self.issue)
    }
}

/// Check a single entry's shape without touching the filesystem.
pub fn check_entry_shape(entry: &str) -> Option<EntryIssue> {
    if entry.is_empty() {
        return Some(EntryIssue::Empty);
    }
    let path = Path::new(entry);
    if path.has_root() || path.is_absolute() {
        return Some(EntryIssue::Absolute);
    }
    if path.components().any(|c| c == Component::ParentDir) {
        return Some(EntryIssue::EscapesRoot);
    }
    None
}

/// Report every entry that is malformed or missing under its root.
///
/// Programs are looked up under the build directory, scripts under the
/// source directory. Problems are returned in status order.
pub fn validate_entries(status: &BuildStatus, paths: &ResolvedPaths) -> Vec<EntryProblem> {
    status
        .entries()
        .filter_map(|(kind, entry)| {
            let issue = check_entry_shape(entry).or_else(|| {
                let located = paths.locate(kind, entry);
                if !located.exists() {
                    Some(EntryIssue::Missing(located))
                } else if !located.is_file() {
                    Some(EntryIssue::NotAFile(located))
                } else {
                    None
                }
            })?;
            Some(EntryProblem {
                kind,
                entry: entry.to_string(),
                issue,
            })
        })
        .collect()
}
