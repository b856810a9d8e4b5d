//! Program discovery in a build tree.
//!
//! Finds files whose names follow the program naming convention and returns
//! their build-relative, `/`-separated paths in sorted order, ready to be
//! written as the programs list of a status file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use runlist_core::TargetNaming;
use thiserror::Error;
use tracing::{debug, warn};

/// Discovery failures.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Build directory not found: {0}")]
    BuildDirMissing(PathBuf),

    #[error("Failed to read build directory {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

/// Collect every program under `build_dir` named according to `naming`.
///
/// Hidden directories and symlinked directories are not descended into.
/// Unreadable subdirectories are skipped with a warning; only an unreadable
/// `build_dir` itself is an error. On unix a program must also be executable.
pub fn discover_programs(
    build_dir: &Path,
    naming: &TargetNaming,
) -> Result<Vec<String>, DiscoveryError> {
    if !build_dir.is_dir() {
        return Err(DiscoveryError::BuildDirMissing(build_dir.to_path_buf()));
    }

    let mut found = Vec::new();
    let root = fs::read_dir(build_dir).map_err(|e| DiscoveryError::Io {
        path: build_dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    walk(root, "", naming, &mut found);

    found.sort();
    debug!(
        build_dir = %build_dir.display(),
        count = found.len(),
        "Discovered programs"
    );
    Ok(found)
}

fn walk(entries: fs::ReadDir, prefix: &str, naming: &TargetNaming, found: &mut Vec<String>) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(prefix, error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        let relative = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if name.starts_with('.') {
                continue;
            }
            match fs::read_dir(entry.path()) {
                Ok(children) => walk(children, &relative, naming, found),
                Err(e) => warn!(dir = %relative, error = %e, "Skipping unreadable directory"),
            }
        } else if naming.undecorate(&name).is_some() && is_program(&entry.path()) {
            found.push(relative);
        }
    }
}

fn is_program(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && is_executable(&metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot stat candidate program");
            false
        }
    }
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
const fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str, executable: bool) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = if executable { 0o755 } else { 0o644 };
            fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        }
        #[cfg(not(unix))]
        let _ = executable;
    }

    #[test]
    fn finds_decorated_programs_sorted() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "scratch/ns3-dev-ndncc-simple-debug", true);
        touch(dir.path(), "scratch/subdir/ns3-dev-subdir-debug", true);
        touch(dir.path(), "src/ndnSIM/tools/ns3-dev-rocketfuel-debug", true);
        touch(dir.path(), "scratch/ns3-dev-ndncc-bcube-debug", true);

        let found = discover_programs(dir.path(), &TargetNaming::default()).unwrap();
        assert_eq!(
            found,
            vec![
                "scratch/ns3-dev-ndncc-bcube-debug",
                "scratch/ns3-dev-ndncc-simple-debug",
                "scratch/subdir/ns3-dev-subdir-debug",
                "src/ndnSIM/tools/ns3-dev-rocketfuel-debug",
            ]
        );
    }

    #[test]
    fn ignores_foreign_names_and_hidden_dirs() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "libns3-dev-core-debug.so", true);
        touch(dir.path(), "scratch/ns3-dev-a-optimized", true);
        touch(dir.path(), ".lock-dir/ns3-dev-hidden-debug", true);
        touch(dir.path(), "scratch/ns3-dev-a-debug", true);

        let found = discover_programs(dir.path(), &TargetNaming::default()).unwrap();
        assert_eq!(found, vec!["scratch/ns3-dev-a-debug"]);
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_files() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "scratch/ns3-dev-a-debug", false);

        let found = discover_programs(dir.path(), &TargetNaming::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_build_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let err = discover_programs(&dir.path().join("build"), &TargetNaming::default())
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::BuildDirMissing(_)));
    }

    #[test]
    fn discovery_is_repeatable() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "b/ns3-dev-b-debug", true);
        touch(dir.path(), "a/ns3-dev-a-debug", true);

        let naming = TargetNaming::default();
        assert_eq!(
            discover_programs(dir.path(), &naming).unwrap(),
            discover_programs(dir.path(), &naming).unwrap()
        );
    }
}
