//! Parse errors for the build-status format.

use thiserror::Error;

/// What went wrong while parsing a build-status file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A required declaration is not present.
    #[error("missing declaration `{0}`")]
    MissingDeclaration(&'static str),

    /// A known declaration appears more than once.
    #[error("duplicate declaration `{0}`")]
    DuplicateDeclaration(String),

    /// A declaration with a name other than the two well-known ones.
    #[error("unexpected declaration `{0}`")]
    UnexpectedDeclaration(String),

    /// A string literal is not closed before the end of the line.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A backslash escape the format does not define.
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(String),

    /// Any other deviation from the grammar.
    #[error("{0}")]
    Syntax(String),
}

/// A parse failure with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column (in characters).
    pub column: usize,
    /// The failure itself.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(line: usize, column: usize, kind: ParseErrorKind) -> Self {
        Self { line, column, kind }
    }

    /// True when the error is a missing declaration.
    pub const fn is_missing_declaration(&self) -> bool {
        matches!(self.kind, ParseErrorKind::MissingDeclaration(_))
    }
}
