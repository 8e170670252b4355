//! Scanner: cursor over one resident input string.
//!
//! The scanner owns the only mutable parse position. Productions read the
//! current character, look ahead by a fixed length for keywords, and advance;
//! they never index the input themselves.
//!
//! Invariants
//! - `offset` is always on a UTF-8 boundary and never decreases.
//! - `line`/`column` are 1-based and describe the character at `offset`.
//! - Advancing past the end is a no-op; end of input is observed through
//!   [`Scanner::current`] returning `None`.
//!
//! Newline policy lives here: string bodies advance with
//! `disallow_newline`, while [`Scanner::skip_whitespace`] crosses lines
//! freely.

use crate::error::{ParserError, SyntaxError};

/// Where the cursor is, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset into the input.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn error(self, kind: SyntaxError) -> ParserError {
        ParserError::new(kind, self.line, self.column)
    }
}

#[inline]
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

pub struct Scanner<'src> {
    input: &'src str,
    offset: usize,
    line: usize,
    column: usize,
    allow_unicode_whitespace: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(input: &'src str, allow_unicode_whitespace: bool) -> Self {
        Self {
            input,
            offset: 0,
            line: 1,
            column: 1,
            allow_unicode_whitespace,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The next `n` characters without advancing; shorter near the end.
    pub fn peek(&self, n: usize) -> &'src str {
        let rest = self.rest();
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Moves forward `count` characters.
    ///
    /// With `disallow_newline`, fails if the character the cursor lands on is
    /// a line terminator. The cursor has already moved when that error is
    /// returned, so the error points at the newline itself.
    pub fn advance(&mut self, count: usize, disallow_newline: bool) -> Result<(), ParserError> {
        for _ in 0..count {
            if !self.bump() {
                break;
            }
        }
        if disallow_newline && self.current().is_some_and(is_newline) {
            return Err(self.error(SyntaxError::UnexpectedNewline));
        }
        Ok(())
    }

    /// Skips a maximal run of insignificant whitespace, newlines included.
    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(|c| self.is_whitespace(c)) {
            self.bump();
        }
    }

    /// Skips a maximal run of ASCII digits and returns them.
    pub fn take_digits(&mut self) -> &'src str {
        let start = self.offset;
        while self.current().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        &self.input[start..self.offset]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    /// Builds an error located at the cursor.
    pub fn error(&self, kind: SyntaxError) -> ParserError {
        self.position().error(kind)
    }

    fn is_whitespace(&self, c: char) -> bool {
        match c {
            ' ' | '\t' | '\n' | '\r' => true,
            c => self.allow_unicode_whitespace && c.is_whitespace(),
        }
    }

    #[inline]
    fn rest(&self) -> &'src str {
        &self.input[self.offset..]
    }

    /// Steps over one character, returning `false` at end of input.
    fn bump(&mut self) -> bool {
        let Some(ch) = self.current() else {
            return false;
        };
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        true
    }
}
