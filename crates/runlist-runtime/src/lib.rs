//! Runtime adapters for runlist.
//!
//! - [`TokioLauncher`] implements the core `ProgramLauncher` port with
//!   `tokio::process`.
//! - [`discover_programs`] walks a build tree for program binaries that
//!   follow the naming convention.

#![deny(unsafe_code)]

mod discovery;
mod launcher;

pub use discovery::{DiscoveryError, discover_programs};
pub use launcher::TokioLauncher;
