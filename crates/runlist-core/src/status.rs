//! The build-status value.
//!
//! A `BuildStatus` is the in-memory form of the artifact written by the
//! configure step: two ordered lists of relative paths, one for compiled
//! programs and one for interpreted scripts. It is produced once by the
//! parser (or by discovery) and then only read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declaration name holding the runnable programs.
pub const PROGRAMS_DECLARATION: &str = "ns3_runnable_programs";

/// Declaration name holding the runnable scripts.
pub const SCRIPTS_DECLARATION: &str = "ns3_runnable_scripts";

/// Kind of a runnable target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A compiled executable.
    Program,
    /// An interpreted script.
    Script,
}

impl TargetKind {
    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Script => "script",
        }
    }

    /// Declaration name this kind is stored under.
    pub const fn declaration(self) -> &'static str {
        match self {
            Self::Program => PROGRAMS_DECLARATION,
            Self::Script => SCRIPTS_DECLARATION,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runnable targets recorded by a configuration pass.
///
/// Entries are kept exactly as given: order is preserved, duplicates are not
/// removed and strings are never normalized. There are no mutators; a new
/// configuration pass produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStatus {
    programs: Vec<String>,
    scripts: Vec<String>,
}

impl BuildStatus {
    /// Create a status from program and script paths.
    pub fn new<P, S>(programs: P, scripts: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            programs: programs.into_iter().map(Into::into).collect(),
            scripts: scripts.into_iter().map(Into::into).collect(),
        }
    }

    /// A status with no runnable targets of either kind.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            programs: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Runnable program paths in discovery order.
    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    /// Runnable script paths in discovery order.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    /// Entries of one kind.
    pub fn of_kind(&self, kind: TargetKind) -> &[String] {
        match kind {
            TargetKind::Program => &self.programs,
            TargetKind::Script => &self.scripts,
        }
    }

    /// Total number of entries across both lists.
    pub fn len(&self) -> usize {
        self.programs.len() + self.scripts.len()
    }

    /// True when neither list has entries.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty() && self.scripts.is_empty()
    }

    /// Iterate over all entries, programs first.
    pub fn entries(&self) -> impl Iterator<Item = (TargetKind, &str)> + '_ {
        self.programs
            .iter()
            .map(|p| (TargetKind::Program, p.as_str()))
            .chain(self.scripts.iter().map(|s| (TargetKind::Script, s.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_order_and_duplicates() {
        let status = BuildStatus::new(["b/debug", "a/debug", "b/debug"], Vec::<String>::new());
        assert_eq!(status.programs(), ["b/debug", "a/debug", "b/debug"]);
        assert!(status.scripts().is_empty());
        assert_eq!(status.len(), 3);
    }

    #[test]
    fn entries_lists_programs_before_scripts() {
        let status = BuildStatus::new(["p1"], ["s1", "s2"]);
        let entries: Vec<_> = status.entries().collect();
        assert_eq!(
            entries,
            vec![
                (TargetKind::Program, "p1"),
                (TargetKind::Script, "s1"),
                (TargetKind::Script, "s2"),
            ]
        );
    }

    #[test]
    fn empty_status_reports_empty() {
        let status = BuildStatus::empty();
        assert!(status.is_empty());
        assert_eq!(status, BuildStatus::default());
    }

    #[test]
    fn json_uses_field_names_and_lowercase_kinds() {
        let status = BuildStatus::new(["a/debug"], Vec::<String>::new());
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["programs"][0], "a/debug");
        assert_eq!(json["scripts"].as_array().map(Vec::len), Some(0));
        assert_eq!(
            serde_json::to_value(TargetKind::Script).unwrap(),
            serde_json::json!("script")
        );
    }

    #[test]
    fn kind_maps_to_declaration() {
        assert_eq!(TargetKind::Program.declaration(), PROGRAMS_DECLARATION);
        assert_eq!(TargetKind::Script.declaration(), SCRIPTS_DECLARATION);
    }
}
