//! Run-dispatch resolution.
//!
//! Maps a short target name typed by a user (`ndncc-simple`,
//! `scratch/subdir`, or a full entry path) to exactly one entry of a loaded
//! [`BuildStatus`]. Matching is tiered and the first tier with any match
//! wins:
//!
//! 1. exact entry path,
//! 2. short name or file name,
//! 3. path suffix at a component boundary.
//!
//! More than one distinct match in the winning tier is an error; the
//! resolver never guesses.

use thiserror::Error;
use tracing::debug;

use crate::naming::TargetNaming;
use crate::status::{BuildStatus, TargetKind};

const MAX_SUGGESTIONS: usize = 5;

/// Which rule selected the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The query equals the entry path.
    Exact,
    /// The query equals the short name or file name of the entry.
    ShortName,
    /// The query is a trailing component sequence of the entry's short path.
    PathSuffix,
}

/// A successfully resolved target, borrowing from the status it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget<'a> {
    pub kind: TargetKind,
    pub entry: &'a str,
    pub rule: MatchRule,
}

/// Resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Target name cannot be empty")]
    EmptyQuery,

    #[error("No runnable target matches `{query}`{}", suggestion_hint(.suggestions))]
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },

    #[error("Target `{query}` is ambiguous; candidates: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Resolve `query` against the entries of `status`.
pub fn resolve<'a>(
    status: &'a BuildStatus,
    naming: &TargetNaming,
    query: &str,
) -> Result<ResolvedTarget<'a>, ResolveError> {
    let query = normalize_query(query);
    if query.is_empty() {
        return Err(ResolveError::EmptyQuery);
    }

    for rule in [MatchRule::Exact, MatchRule::ShortName, MatchRule::PathSuffix] {
        let mut found: Vec<(TargetKind, &'a str)> = Vec::new();
        for (kind, entry) in status.entries() {
            if matches_rule(rule, kind, entry, naming, query) && !found.contains(&(kind, entry)) {
                found.push((kind, entry));
            }
        }

        match found.as_slice() {
            [] => {}
            [(kind, entry)] => {
                debug!(query, entry = *entry, kind = %kind, rule = ?rule, "Resolved target");
                return Ok(ResolvedTarget {
                    kind: *kind,
                    entry: *entry,
                    rule,
                });
            }
            many => {
                return Err(ResolveError::Ambiguous {
                    query: query.to_string(),
                    candidates: many.iter().map(|(_, entry)| (*entry).to_string()).collect(),
                });
            }
        }
    }

    Err(ResolveError::NotFound {
        query: query.to_string(),
        suggestions: suggestions(status, naming, query),
    })
}

/// Short name of an entry: the undecorated program name, or the script's
/// file stem. Entries that do not follow the convention keep their file name.
pub fn short_name<'a>(kind: TargetKind, entry: &'a str, naming: &TargetNaming) -> &'a str {
    let file = file_name(entry);
    match kind {
        TargetKind::Program => naming.undecorate(file).unwrap_or(file),
        TargetKind::Script => match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file,
        },
    }
}

/// Short names of every entry, programs first, in status order.
pub fn short_names<'a>(
    status: &'a BuildStatus,
    naming: &TargetNaming,
) -> Vec<(TargetKind, &'a str)> {
    status
        .entries()
        .map(|(kind, entry)| (kind, short_name(kind, entry, naming)))
        .collect()
}

fn normalize_query(query: &str) -> &str {
    let query = query.trim();
    let query = query.strip_prefix("./").unwrap_or(query);
    query.trim_end_matches('/')
}

fn file_name(entry: &str) -> &str {
    entry.rsplit_once('/').map_or(entry, |(_, file)| file)
}

fn short_path(entry: &str, short: &str) -> String {
    match entry.rsplit_once('/') {
        Some((dir, _)) => format!("{dir}/{short}"),
        None => short.to_string(),
    }
}

/// Directory of an entry that is named after the program it holds, as
/// with `scratch/<name>/` subdirectory programs.
fn named_directory<'a>(entry: &'a str, short: &str) -> Option<&'a str> {
    let (dir, _) = entry.rsplit_once('/')?;
    (file_name(dir) == short).then_some(dir)
}

fn ends_with_components(path: &str, query: &str) -> bool {
    path == query
        || path
            .strip_suffix(query)
            .is_some_and(|head| head.ends_with('/'))
}

fn matches_rule(
    rule: MatchRule,
    kind: TargetKind,
    entry: &str,
    naming: &TargetNaming,
    query: &str,
) -> bool {
    match rule {
        MatchRule::Exact => entry == query,
        MatchRule::ShortName => {
            short_name(kind, entry, naming) == query || file_name(entry) == query
        }
        MatchRule::PathSuffix => {
            let short = short_name(kind, entry, naming);
            ends_with_components(&short_path(entry, short), query)
                || ends_with_components(entry, query)
                || named_directory(entry, short)
                    .is_some_and(|dir| ends_with_components(dir, query))
        }
    }
}

fn suggestions(status: &BuildStatus, naming: &TargetNaming, query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut out: Vec<String> = Vec::new();
    for (_, short) in short_names(status, naming) {
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
        if short.to_lowercase().contains(&needle) && !out.iter().any(|s| s == short) {
            out.push(short.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BuildStatus {
        BuildStatus::new(
            [
                "scratch/ns3-dev-ndncc-simple-debug",
                "scratch/ns3-dev-ndncc-multihop-simple-debug",
                "scratch/subdir/ns3-dev-subdir-debug",
                "src/ndnSIM/tools/ns3-dev-rocketfuel-maps-cch-to-annotaded-debug",
                "examples/wireless/ns3-dev-wifi-simple-adhoc-debug",
                "examples/routing/ns3-dev-wifi-simple-adhoc-debug",
            ],
            ["examples/tutorial/first.py"],
        )
    }

    #[test]
    fn resolves_exact_entry() {
        let status = sample();
        let target = resolve(
            &status,
            &TargetNaming::default(),
            "scratch/ns3-dev-ndncc-simple-debug",
        )
        .unwrap();
        assert_eq!(target.rule, MatchRule::Exact);
        assert_eq!(target.kind, TargetKind::Program);
    }

    #[test]
    fn resolves_short_name() {
        let status = sample();
        let target = resolve(&status, &TargetNaming::default(), "ndncc-simple").unwrap();
        assert_eq!(target.entry, "scratch/ns3-dev-ndncc-simple-debug");
        assert_eq!(target.rule, MatchRule::ShortName);
    }

    #[test]
    fn resolves_decorated_file_name() {
        let status = sample();
        let target = resolve(
            &status,
            &TargetNaming::default(),
            "ns3-dev-rocketfuel-maps-cch-to-annotaded-debug",
        )
        .unwrap();
        assert_eq!(
            target.entry,
            "src/ndnSIM/tools/ns3-dev-rocketfuel-maps-cch-to-annotaded-debug"
        );
    }

    #[test]
    fn resolves_subdirectory_by_path_suffix() {
        let status = sample();
        let target = resolve(&status, &TargetNaming::default(), "scratch/subdir").unwrap();
        assert_eq!(target.entry, "scratch/subdir/ns3-dev-subdir-debug");
    }

    #[test]
    fn short_name_tier_wins_over_path_suffix() {
        let status = sample();
        let target = resolve(&status, &TargetNaming::default(), "subdir").unwrap();
        assert_eq!(target.rule, MatchRule::ShortName);
        assert_eq!(target.entry, "scratch/subdir/ns3-dev-subdir-debug");
    }

    #[test]
    fn suffix_must_align_with_components() {
        let status = sample();
        let err = resolve(&status, &TargetNaming::default(), "dir").unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { .. }));
    }

    #[test]
    fn resolves_script_by_stem() {
        let status = sample();
        let target = resolve(&status, &TargetNaming::default(), "first").unwrap();
        assert_eq!(target.kind, TargetKind::Script);
        assert_eq!(target.entry, "examples/tutorial/first.py");
    }

    #[test]
    fn ambiguous_short_name_lists_candidates() {
        let status = sample();
        let err = resolve(&status, &TargetNaming::default(), "wifi-simple-adhoc").unwrap_err();
        assert_eq!(
            err,
            ResolveError::Ambiguous {
                query: "wifi-simple-adhoc".to_string(),
                candidates: vec![
                    "examples/wireless/ns3-dev-wifi-simple-adhoc-debug".to_string(),
                    "examples/routing/ns3-dev-wifi-simple-adhoc-debug".to_string(),
                ],
            }
        );
    }

    #[test]
    fn path_suffix_disambiguates() {
        let status = sample();
        let target =
            resolve(&status, &TargetNaming::default(), "routing/wifi-simple-adhoc").unwrap();
        assert_eq!(target.entry, "examples/routing/ns3-dev-wifi-simple-adhoc-debug");
        assert_eq!(target.rule, MatchRule::PathSuffix);
    }

    #[test]
    fn duplicate_entries_resolve_to_one_target() {
        let status = BuildStatus::new(
            ["scratch/ns3-dev-a-debug", "scratch/ns3-dev-a-debug"],
            Vec::<String>::new(),
        );
        let target = resolve(&status, &TargetNaming::default(), "a").unwrap();
        assert_eq!(target.entry, "scratch/ns3-dev-a-debug");
    }

    #[test]
    fn not_found_offers_suggestions() {
        let status = sample();
        let err = resolve(&status, &TargetNaming::default(), "ndncc").unwrap_err();
        match &err {
            ResolveError::NotFound { suggestions, .. } => {
                assert_eq!(suggestions, &["ndncc-simple", "ndncc-multihop-simple"]);
            }
            other => panic!("expected not found, got {other:?}"),
        }
        assert!(err.to_string().contains("did you mean"));
    }

    #[test]
    fn empty_query_is_rejected() {
        let status = sample();
        assert_eq!(
            resolve(&status, &TargetNaming::default(), "  ./ "),
            Err(ResolveError::EmptyQuery)
        );
    }

    #[test]
    fn nothing_resolves_against_an_empty_status() {
        let err = resolve(&BuildStatus::empty(), &TargetNaming::default(), "anything").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                query: "anything".to_string(),
                suggestions: Vec::new(),
            }
        );
    }

    #[test]
    fn short_names_follow_status_order() {
        let status = sample();
        let names = short_names(&status, &TargetNaming::default());
        assert_eq!(names[0], (TargetKind::Program, "ndncc-simple"));
        assert_eq!(names[2], (TargetKind::Program, "subdir"));
        assert_eq!(names.last(), Some(&(TargetKind::Script, "first")));
    }
}
