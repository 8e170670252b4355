use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// A syntax error together with the 1-based position it was detected at.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    pub(crate) kind: SyntaxError,
    /// Line of the offending character, starting at 1.
    pub line: usize,
    /// Column of the offending character in characters, starting at 1.
    pub column: usize,
}

impl ParserError {
    pub(crate) fn new(kind: SyntaxError, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// The kinds of malformed input the parser reports.
pub enum SyntaxError {
    /// A value was required but no production applies at this position.
    #[error("expected a value but found {0}")]
    ExpectedValue(Found),
    /// An object key was not followed by `:`.
    #[error("expected ':' but found {0}")]
    ExpectedColon(Found),
    /// A non-first array element or object member was not preceded by `,`.
    #[error("expected ',' but found {0}")]
    ExpectedComma(Found),
    /// An object body holds something that is neither a string key nor `}`.
    #[error("expected a string key but found {0}")]
    ExpectedKey(Found),
    /// A line terminator appeared inside a string literal.
    #[error("unexpected newline inside string literal")]
    UnexpectedNewline,
    /// The input ended before the closing quote of a string.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// The input ended before the closing delimiter of a container.
    #[error("unterminated {0}")]
    UnterminatedContainer(Container),
    /// A digit run does not fit in a `u64`.
    #[error("number {0} does not fit in an unsigned 64-bit integer")]
    NumberOverflow(String),
    /// Arrays and objects are nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
    /// Something other than whitespace follows the top-level value.
    #[error("unexpected {0} after the top-level value")]
    TrailingCharacters(Found),
}

/// The token actually seen where something else was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A character of the input.
    Char(char),
    /// The input was exhausted.
    EndOfInput,
}

impl From<Option<char>> for Found {
    fn from(c: Option<char>) -> Self {
        c.map_or(Found::EndOfInput, Found::Char)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "{c:?}"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Which container an [`SyntaxError::UnterminatedContainer`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// A `[`-delimited array.
    Array,
    /// A `{`-delimited object.
    Object,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Array => f.write_str("array"),
            Container::Object => f.write_str("object"),
        }
    }
}
