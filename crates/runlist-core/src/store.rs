//! Loading and atomically replacing build-status files.
//!
//! Readers fail fast: a missing file means the build has not been
//! configured, and a malformed file is never partially recovered.
//! Writers render to a temporary file next to the destination and rename it
//! into place, so a concurrent reader sees either the old file or the new one.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use thiserror::Error;
use tracing::debug;

use crate::format::{ParseError, parse_status, render_status};
use crate::status::BuildStatus;

/// Status files larger than this are rejected without parsing.
pub const MAX_STATUS_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Default file name of the artifact inside the build directory.
pub const STATUS_FILE_NAME: &str = "build-status.py";

/// Mode of a newly created status file, before the process umask.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Errors from reading or writing a status file.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The status file does not exist.
    #[error("build not configured: {path} does not exist (run the configure step first)")]
    NotConfigured { path: PathBuf },

    /// The status file exists but could not be read.
    #[error("failed to read build-status file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// The status file is larger than `MAX_STATUS_FILE_BYTES`.
    #[error("build-status file {path} exceeds size limit ({size} bytes)")]
    TooLarge { path: PathBuf, size: u64 },

    /// The status file is not valid UTF-8.
    #[error("build-status file {path} must be utf-8")]
    Encoding { path: PathBuf },

    /// The status file does not follow the format.
    #[error("malformed build-status file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The status file could not be written.
    #[error("failed to write build-status file {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

impl StatusError {
    /// True when the error means "run the configure step" rather than a
    /// problem with existing content.
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}

/// Load and parse a status file.
pub fn load(path: &Path) -> Result<BuildStatus, StatusError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StatusError::NotConfigured {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(StatusError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    if metadata.is_file() && metadata.len() > MAX_STATUS_FILE_BYTES {
        return Err(StatusError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }

    // Metadata lengths lie for pipes, devices and growing files; cap the read too.
    let read_err = |e: io::Error| StatusError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let file = File::open(path).map_err(read_err)?;
    let bytes = match read_capped(file, MAX_STATUS_FILE_BYTES).map_err(read_err)? {
        Capped::Complete(bytes) => bytes,
        Capped::Exceeded(size) => {
            return Err(StatusError::TooLarge {
                path: path.to_path_buf(),
                size,
            });
        }
    };
    let text = String::from_utf8(bytes).map_err(|_| StatusError::Encoding {
        path: path.to_path_buf(),
    })?;

    let status = parse_status(&text).map_err(|source| StatusError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        programs = status.programs().len(),
        scripts = status.scripts().len(),
        "Loaded build status"
    );
    Ok(status)
}

enum Capped {
    Complete(Vec<u8>),
    /// More than the limit was available; carries the number of bytes read.
    Exceeded(u64),
}

fn read_capped(reader: impl Read, limit: u64) -> io::Result<Capped> {
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;
    let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if size > limit {
        Ok(Capped::Exceeded(size))
    } else {
        Ok(Capped::Complete(bytes))
    }
}

/// Render `status` and atomically replace the file at `path`.
///
/// The parent directory must already exist. On failure the destination is
/// left untouched and the temporary file is removed. A replaced file keeps
/// its permissions; a new one gets `0o644` less the umask on unix.
pub fn write_atomic(path: &Path, status: &BuildStatus) -> Result<(), StatusError> {
    let write_err = |reason: String| StatusError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if path.file_name().is_none() {
        return Err(write_err("path does not name a file".to_string()));
    }
    if !parent.is_dir() {
        return Err(write_err(format!(
            "directory {} does not exist",
            parent.display()
        )));
    }

    let rendered = render_status(status);
    let existing = fs::metadata(path)
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|metadata| metadata.permissions());

    let mut builder = Builder::new();
    builder.prefix(".build-status-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    // Dropping the NamedTempFile on any early return deletes it.
    let mut temp = builder
        .tempfile_in(parent)
        .map_err(|e| write_err(e.to_string()))?;
    temp.write_all(rendered.as_bytes())
        .map_err(|e| write_err(e.to_string()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| write_err(e.to_string()))?;
    if let Some(permissions) = existing {
        temp.as_file()
            .set_permissions(permissions)
            .map_err(|e| write_err(e.to_string()))?;
    }
    temp.persist(path).map_err(|e| write_err(e.error.to_string()))?;

    debug!(
        path = %path.display(),
        bytes = rendered.len(),
        "Wrote build status"
    );
    Ok(())
}
