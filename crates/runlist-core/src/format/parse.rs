//! Parser for build-status files.
//!
//! The producer writes a small subset of Python literal syntax: comments,
//! and two assignments of a list of string literals. Only that subset is
//! accepted; anything else is reported with its position.

use super::error::{ParseError, ParseErrorKind};
use crate::status::{BuildStatus, PROGRAMS_DECLARATION, SCRIPTS_DECLARATION};

/// Parse the contents of a build-status file.
///
/// Both declarations must be present exactly once, in any order. An empty
/// list is valid and distinct from a missing declaration.
pub fn parse_status(input: &str) -> Result<BuildStatus, ParseError> {
    Parser::new(input).parse_file()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn parse_file(mut self) -> Result<BuildStatus, ParseError> {
        let mut programs: Option<Vec<String>> = None;
        let mut scripts: Option<Vec<String>> = None;

        loop {
            self.skip_inline_space();
            match self.peek() {
                None => break,
                Some('\n') => {
                    self.bump();
                }
                Some('#') => self.skip_comment(),
                Some(c) if is_ident_start(c) => {
                    let (line, column) = self.position();
                    let name = self.identifier();
                    let slot = match name {
                        PROGRAMS_DECLARATION => &mut programs,
                        SCRIPTS_DECLARATION => &mut scripts,
                        other => {
                            return Err(ParseError::new(
                                line,
                                column,
                                ParseErrorKind::UnexpectedDeclaration(other.to_string()),
                            ));
                        }
                    };
                    if slot.is_some() {
                        return Err(ParseError::new(
                            line,
                            column,
                            ParseErrorKind::DuplicateDeclaration(name.to_string()),
                        ));
                    }

                    self.skip_inline_space();
                    self.expect('=')?;
                    self.skip_inline_space();
                    let items = self.list()?;
                    self.end_of_statement()?;
                    *slot = Some(items);
                }
                Some(c) => {
                    return Err(self.syntax(format!("unexpected character `{c}`")));
                }
            }
        }

        let programs = programs.ok_or_else(|| {
            self.error(ParseErrorKind::MissingDeclaration(PROGRAMS_DECLARATION))
        })?;
        let scripts = scripts
            .ok_or_else(|| self.error(ParseErrorKind::MissingDeclaration(SCRIPTS_DECLARATION)))?;

        Ok(BuildStatus::new(programs, scripts))
    }

    fn list(&mut self) -> Result<Vec<String>, ParseError> {
        self.expect('[')?;
        let mut items = Vec::new();

        loop {
            self.skip_trivia();
            match self.peek() {
                Some(']') => {
                    self.bump();
                    return Ok(items);
                }
                Some(_) => {
                    items.push(self.string()?);
                    self.skip_trivia();
                    match self.peek() {
                        Some(',') => {
                            self.bump();
                        }
                        Some(']') => {}
                        Some(c) => {
                            return Err(self.syntax(format!("expected `,` or `]`, found `{c}`")));
                        }
                        None => return Err(self.syntax("unclosed list".to_string())),
                    }
                }
                None => return Err(self.syntax("unclosed list".to_string())),
            }
        }
    }

    fn string(&mut self) -> Result<String, ParseError> {
        let (line, column) = self.position();
        if matches!(self.peek(), Some('u' | 'U')) {
            self.bump();
        }
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => {
                self.bump();
                q
            }
            Some(c) => return Err(self.syntax(format!("expected string literal, found `{c}`"))),
            None => {
                return Err(self.syntax("expected string literal, found end of input".to_string()));
            }
        };

        let mut out = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(ParseError::new(
                        line,
                        column,
                        ParseErrorKind::UnterminatedString,
                    ));
                }
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape(line, column)?),
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self, line: usize, column: usize) -> Result<char, ParseError> {
        let (esc_line, esc_column) = self.position();
        match self.bump() {
            Some('\\') => Ok('\\'),
            Some('\'') => Ok('\''),
            Some('"') => Ok('"'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some(c @ '0'..='7') => Ok(self.octal_escape(c)),
            Some('x') => self.hex_escape('x', 2, esc_line, esc_column),
            Some('u') => self.hex_escape('u', 4, esc_line, esc_column),
            Some('U') => self.hex_escape('U', 8, esc_line, esc_column),
            Some('\n') | None => Err(ParseError::new(
                line,
                column,
                ParseErrorKind::UnterminatedString,
            )),
            Some(c) => Err(ParseError::new(
                esc_line,
                esc_column,
                ParseErrorKind::InvalidEscape(c.to_string()),
            )),
        }
    }

    /// `\o`, `\oo` or `\ooo`; `first` is the digit already consumed.
    fn octal_escape(&mut self, first: char) -> char {
        let mut code = first.to_digit(8).unwrap_or(0);
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(digit) => {
                    self.bump();
                    code = code * 8 + digit;
                }
                None => break,
            }
        }
        // At most 0o777, always a valid scalar value.
        char::from_u32(code).unwrap_or('\0')
    }

    fn hex_escape(
        &mut self,
        tag: char,
        digits: usize,
        line: usize,
        column: usize,
    ) -> Result<char, ParseError> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    self.bump();
                    hex.push(c);
                }
                _ => break,
            }
        }

        let invalid = || {
            ParseError::new(
                line,
                column,
                ParseErrorKind::InvalidEscape(format!("{tag}{hex}")),
            )
        };
        if hex.len() != digits {
            return Err(invalid());
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(invalid)
    }

    fn end_of_statement(&mut self) -> Result<(), ParseError> {
        self.skip_inline_space();
        match self.peek() {
            None => Ok(()),
            Some('\n') => {
                self.bump();
                Ok(())
            }
            Some('#') => {
                self.skip_comment();
                Ok(())
            }
            Some(c) => Err(self.syntax(format!(
                "expected end of line after declaration, found `{c}`"
            ))),
        }
    }

    fn expect(&mut self, wanted: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(c) if c == wanted => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.syntax(format!("expected `{wanted}`, found `{c}`"))),
            None => Err(self.syntax(format!("expected `{wanted}`, found end of input"))),
        }
    }

    fn identifier(&mut self) -> &'a str {
        let src = self.src;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.bump();
            } else {
                break;
            }
        }
        &src[start..self.pos]
    }

    /// Spaces, tabs and carriage returns.
    fn skip_inline_space(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.bump();
        }
    }

    /// Whitespace, newlines and comments (inside brackets).
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => self.skip_comment(),
                _ => return,
            }
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                return;
            }
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    const fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    const fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.line, self.column, kind)
    }

    const fn syntax(&self, message: String) -> ParseError {
        self.error(ParseErrorKind::Syntax(message))
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}
