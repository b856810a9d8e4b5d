//! Canonical rendering of build-status files.
//!
//! The layout and quoting match what the configure step has always written,
//! so a file rendered here is byte-identical to one produced by the build
//! system for the same targets.

use std::fmt::Write as _;

use crate::status::{BuildStatus, PROGRAMS_DECLARATION, SCRIPTS_DECLARATION};

const HEADER: &str = "#! /usr/bin/env python\n\n";
const PROGRAMS_COMMENT: &str = "# Programs that are runnable.\n";
const SCRIPTS_COMMENT: &str = "# Scripts that are runnable.\n";

/// Render a status in canonical form.
///
/// Pure and deterministic: the same status always renders to the same bytes.
pub fn render_status(status: &BuildStatus) -> String {
    let estimate: usize = status.entries().map(|(_, entry)| entry.len() + 4).sum();
    let mut out = String::with_capacity(estimate + 160);

    out.push_str(HEADER);
    out.push_str(PROGRAMS_COMMENT);
    push_declaration(&mut out, PROGRAMS_DECLARATION, status.programs());
    out.push('\n');
    out.push_str(SCRIPTS_COMMENT);
    push_declaration(&mut out, SCRIPTS_DECLARATION, status.scripts());
    out.push('\n');

    out
}

fn push_declaration(out: &mut String, name: &str, items: &[String]) {
    out.push_str(name);
    out.push_str(" = [");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(out, item);
    }
    out.push_str("]\n");
}

/// Quote a string the way Python's `repr` does.
///
/// Single quotes are preferred; double quotes are used only when the value
/// contains a single quote and no double quote. Non-printable characters
/// are escaped with the shortest of `\xHH`, `\uHHHH` and `\UHHHHHHHH`.
fn push_quoted(out: &mut String, value: &str) {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = u32::from(c);
                // Writing to a String cannot fail.
                let _ = if code <= 0xff {
                    write!(out, "\\x{code:02x}")
                } else if code <= 0xffff {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

/// Python's `str.isprintable` for a single character.
///
/// Covers control (Cc), format (Cf), private-use (Co) and separator
/// (Zs, Zl, Zp) characters plus noncharacters. Other unassigned code points
/// are treated as printable and written literally.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    // Every Zs, Zl and Zp character is White_Space; the rest of White_Space is Cc.
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let code = u32::from(c);
    let format = matches!(
        code,
        0xad | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
    );
    let private_use = matches!(
        code,
        0xe000..=0xf8ff | 0xf_0000..=0xf_fffd | 0x10_0000..=0x10_fffd
    );
    let noncharacter = matches!(code, 0xfdd0..=0xfdef) || code & 0xfffe == 0xfffe;
    !(format || private_use || noncharacter)
}
