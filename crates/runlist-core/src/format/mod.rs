//! The build-status file format.
//!
//! The file is a tiny Python module with two list assignments:
//!
//! ```text
//! #! /usr/bin/env python
//!
//! # Programs that are runnable.
//! ns3_runnable_programs = ['scratch/ns3-dev-example-debug']
//!
//! # Scripts that are runnable.
//! ns3_runnable_scripts = []
//! ```
//!
//! `parse_status` reads it, `render_status` writes the canonical form.

mod error;
mod parse;
mod render;

pub use error::{ParseError, ParseErrorKind};
pub use parse::parse_status;
pub use render::render_status;
