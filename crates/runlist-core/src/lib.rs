//! Core model for the build-status artifact.
//!
//! The configure step of the build records which programs and scripts are
//! runnable in a small Python-syntax file (`build/build-status.py`). This
//! crate owns that contract: the [`BuildStatus`] value, its canonical
//! text format, atomic persistence, the program naming convention, and
//! run-dispatch resolution from a short name to one entry.
//!
//! Process spawning and filesystem discovery live in `runlist-runtime`;
//! the command-line surface lives in `runlist-cli`.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod format;
pub mod naming;
pub mod paths;
pub mod ports;
pub mod resolve;
pub mod status;
pub mod store;
pub mod validate;

// Re-export commonly used types for convenience
pub use config::{
    APP_NAME_ENV, APP_VERSION_ENV, ConfigError, ConfigOverrides, DEFAULT_INTERPRETER,
    INTERPRETER_ENV, PROFILE_ENV, RunlistConfig,
};
pub use format::{ParseError, ParseErrorKind, parse_status, render_status};
pub use naming::{BuildProfile, DEFAULT_APP_NAME, DEFAULT_APP_VERSION, NamingError, TargetNaming};
pub use ports::{LaunchError, LaunchOutcome, LaunchRequest, ProgramLauncher};
pub use resolve::{MatchRule, ResolveError, ResolvedTarget, resolve, short_name, short_names};
pub use status::{BuildStatus, PROGRAMS_DECLARATION, SCRIPTS_DECLARATION, TargetKind};
pub use store::{MAX_STATUS_FILE_BYTES, STATUS_FILE_NAME, StatusError, load, write_atomic};
pub use validate::{EntryIssue, EntryProblem, check_entry_shape, validate_entries};

// Re-export path utilities
pub use paths::{
    PathError, PathOverrides, PathResolution, PathSource, ResolvedPaths, resolve_build_dir,
    resolve_source_dir, resolve_status_file,
};
