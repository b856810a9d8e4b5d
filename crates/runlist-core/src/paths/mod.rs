//! Location resolution for the build tree and the build-status file.
//!
//! - Build directory (where programs live)
//! - Status file (the artifact itself)
//! - Source directory (where scripts live)
//!
//! Every location is resolved from an explicit override, a `RUNLIST_*`
//! environment variable, or a default. No terminal I/O happens here.

mod error;
mod locations;
mod platform;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::PathError;
pub use locations::{
    BUILD_DIR_ENV, DEFAULT_BUILD_DIR, PathResolution, PathSource, SOURCE_DIR_ENV,
    STATUS_FILE_ENV, resolve_build_dir, resolve_source_dir, resolve_status_file,
};
pub use resolver::{PathOverrides, ResolvedPaths};
