//! Recursive-descent grammar over a [`Scanner`].
//!
//! Every production returns an [`Outcome`]:
//! - `Ok(Some(v))`: the production applied and produced `v`,
//! - `Ok(None)`: the production does not start at the cursor; the caller may
//!   try the next alternative,
//! - `Err(e)`: the production applied but the input is malformed. Errors are
//!   never recovered from.
//!
//! Productions are distinguished by their first character, so at most one of
//! them can apply at any position. The dispatcher still tries them in a fixed
//! order: true, false, string, number, array, object, null.
//!
//! All mutable state of one parse (`Scanner` and nesting depth) lives in a
//! `ParseState` that is created per call and threaded through by `&mut`.
//! [`Parser`] itself only holds configuration.

mod scanner;

use alloc::string::String;

use scanner::{Position, Scanner};

use crate::{
    error::{Container, Found, ParserError, SyntaxError},
    options::ParserOptions,
    value::{Array, Map, Value},
};

type Outcome<T> = Result<Option<T>, ParserError>;

/// Result of looking for the separator before a non-first element.
///
/// A missing comma is only an error if another element follows; before the
/// closing delimiter it is a trailing-comma-free list end.
#[derive(Debug, Clone, Copy)]
enum CommaCheck {
    Present,
    Absent { found: Found, at: Position },
}

/// A reusable parser.
///
/// The parser keeps no state between calls, so one instance can be shared
/// across threads.
///
/// ```rust
/// use jsonc_lite::{Parser, ParserOptions, SyntaxError, Value};
///
/// let parser = Parser::new(ParserOptions::default());
/// assert_eq!(parser.parse("[]").unwrap(), Value::Array(vec![]));
/// assert_eq!(parser.parse(" 42 ").unwrap(), Value::Number(42));
///
/// let err = parser.parse("[1,2,,3]").unwrap_err();
/// assert!(matches!(err.kind(), SyntaxError::ExpectedValue(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a complete document.
    ///
    /// The root may be any value. Whitespace around it is ignored; anything
    /// else after it is an error.
    ///
    /// # Errors
    ///
    /// Returns the first [`SyntaxError`] encountered, located by line and
    /// column.
    pub fn parse(&self, text: &str) -> Result<Value, ParserError> {
        tracing::trace!(len = text.len(), "parsing document");
        let mut state = ParseState::new(text, &self.options);
        match state.document() {
            Ok(value) => {
                tracing::trace!(consumed = state.scanner.position().offset, "parsed document");
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(%err, "document rejected");
                Err(err)
            }
        }
    }
}

struct ParseState<'src, 'opt> {
    scanner: Scanner<'src>,
    options: &'opt ParserOptions,
    depth: usize,
}

impl<'src, 'opt> ParseState<'src, 'opt> {
    fn new(text: &'src str, options: &'opt ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(text, options.allow_unicode_whitespace),
            options,
            depth: 0,
        }
    }

    fn document(&mut self) -> Result<Value, ParserError> {
        let Some(value) = self.value()? else {
            return Err(self.found_error(SyntaxError::ExpectedValue));
        };
        if !self.scanner.is_at_end() {
            return Err(self.found_error(SyntaxError::TrailingCharacters));
        }
        Ok(value)
    }

    // --------------------------------------------------------------------------------------------
    // Value dispatch
    // --------------------------------------------------------------------------------------------

    fn value(&mut self) -> Outcome<Value> {
        self.scanner.skip_whitespace();
        let value = self.first_match()?;
        self.scanner.skip_whitespace();
        Ok(value)
    }

    fn first_match(&mut self) -> Outcome<Value> {
        if let Some(v) = self.keyword("true", Value::Boolean(true))? {
            return Ok(Some(v));
        }
        if let Some(v) = self.keyword("false", Value::Boolean(false))? {
            return Ok(Some(v));
        }
        if let Some(s) = self.string()? {
            return Ok(Some(Value::String(s)));
        }
        if let Some(n) = self.number()? {
            return Ok(Some(Value::Number(n)));
        }
        if let Some(a) = self.array()? {
            return Ok(Some(Value::Array(a)));
        }
        if let Some(o) = self.object()? {
            return Ok(Some(Value::Object(o)));
        }
        self.keyword("null", Value::Null)
    }

    // --------------------------------------------------------------------------------------------
    // Scalars
    // --------------------------------------------------------------------------------------------

    fn keyword(&mut self, keyword: &str, value: Value) -> Outcome<Value> {
        let len = keyword.chars().count();
        if self.scanner.peek(len) != keyword {
            return Ok(None);
        }
        self.scanner.advance(len, false)?;
        Ok(Some(value))
    }

    fn string(&mut self) -> Outcome<String> {
        if self.scanner.current() != Some('"') {
            return Ok(None);
        }
        let open = self.scanner.position();
        let mut result = String::new();
        self.scanner.advance(1, true)?;
        loop {
            match self.scanner.current() {
                None => return Err(open.error(SyntaxError::UnterminatedString)),
                Some('"') => break,
                Some(c) => {
                    result.push(c);
                    self.scanner.advance(1, true)?;
                }
            }
        }
        self.scanner.advance(1, false)?;
        Ok(Some(result))
    }

    fn number(&mut self) -> Outcome<u64> {
        if !self.scanner.current().is_some_and(|c| c.is_ascii_digit()) {
            return Ok(None);
        }
        let start = self.scanner.position();
        let digits = self.scanner.take_digits();
        if digits.is_empty() {
            return Ok(None);
        }
        // A pure digit run can only fail to convert by overflowing.
        digits
            .parse::<u64>()
            .map(Some)
            .map_err(|_| start.error(SyntaxError::NumberOverflow(digits.into())))
    }

    // --------------------------------------------------------------------------------------------
    // Containers
    // --------------------------------------------------------------------------------------------

    fn array(&mut self) -> Outcome<Array> {
        if self.scanner.current() != Some('[') {
            return Ok(None);
        }
        let open = self.enter()?;
        let mut result = Array::new();
        self.scanner.advance(1, false)?;
        self.scanner.skip_whitespace();

        loop {
            let comma = if result.is_empty() {
                CommaCheck::Present
            } else {
                self.comma()?
            };
            self.scanner.skip_whitespace();

            let Some(value) = self.value()? else {
                match self.scanner.current() {
                    Some(']') => break,
                    None => {
                        return Err(open.error(SyntaxError::UnterminatedContainer(Container::Array)));
                    }
                    c => return Err(self.scanner.error(SyntaxError::ExpectedValue(c.into()))),
                }
            };
            if let CommaCheck::Absent { found, at } = comma {
                return Err(at.error(SyntaxError::ExpectedComma(found)));
            }
            result.push(value);
            self.scanner.skip_whitespace();
        }

        self.scanner.advance(1, false)?;
        self.depth -= 1;
        Ok(Some(result))
    }

    fn object(&mut self) -> Outcome<Map> {
        if self.scanner.current() != Some('{') {
            return Ok(None);
        }
        let open = self.enter()?;
        let mut result = Map::new();
        let mut is_initial_key = true;
        self.scanner.advance(1, false)?;
        self.scanner.skip_whitespace();

        loop {
            let comma = if is_initial_key {
                CommaCheck::Present
            } else {
                self.comma()?
            };
            self.scanner.skip_whitespace();

            let Some(key) = self.string()? else {
                match self.scanner.current() {
                    Some('}') => break,
                    None => {
                        return Err(open.error(SyntaxError::UnterminatedContainer(Container::Object)));
                    }
                    c => return Err(self.scanner.error(SyntaxError::ExpectedKey(c.into()))),
                }
            };
            if let CommaCheck::Absent { found, at } = comma {
                return Err(at.error(SyntaxError::ExpectedComma(found)));
            }

            self.scanner.skip_whitespace();
            match self.scanner.current() {
                Some(':') => self.scanner.advance(1, false)?,
                None => {
                    return Err(open.error(SyntaxError::UnterminatedContainer(Container::Object)));
                }
                c => return Err(self.scanner.error(SyntaxError::ExpectedColon(c.into()))),
            }

            let Some(value) = self.value()? else {
                return Err(match self.scanner.current() {
                    None => open.error(SyntaxError::UnterminatedContainer(Container::Object)),
                    c => self.scanner.error(SyntaxError::ExpectedValue(c.into())),
                });
            };
            result.insert(key, value);
            is_initial_key = false;
        }

        self.scanner.advance(1, false)?;
        self.depth -= 1;
        Ok(Some(result))
    }

    /// Consumes a `,` if present, remembering what was there instead.
    fn comma(&mut self) -> Result<CommaCheck, ParserError> {
        let at = self.scanner.position();
        match self.scanner.current() {
            Some(',') => {
                self.scanner.advance(1, false)?;
                Ok(CommaCheck::Present)
            }
            c => Ok(CommaCheck::Absent {
                found: c.into(),
                at,
            }),
        }
    }

    /// Records one more level of nesting at the opening delimiter.
    fn enter(&mut self) -> Result<Position, ParserError> {
        let open = self.scanner.position();
        self.depth += 1;
        if let Some(limit) = self.options.max_depth {
            if self.depth > limit {
                return Err(open.error(SyntaxError::DepthLimitExceeded(limit)));
            }
        }
        Ok(open)
    }

    fn found_error(&self, kind: fn(Found) -> SyntaxError) -> ParserError {
        self.scanner.error(kind(self.scanner.current().into()))
    }
}
