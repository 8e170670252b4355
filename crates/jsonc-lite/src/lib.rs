//! A recursive-descent parser for "JSONC-lite": JSON that tolerates trailing
//! commas before `]` and `}`.
//!
//! The whole input is resident in memory and parsed eagerly into a [`Value`]
//! tree. Errors carry the 1-based line and column of the first point of
//! failure together with what was expected and what was found.
//!
//! ```rust
//! use jsonc_lite::parse;
//!
//! let v = parse(r#"{ "a": [1, 2, 3,], "b": true, }"#).unwrap();
//! assert_eq!(v.to_string(), r#"{"a":[1,2,3],"b":true}"#);
//!
//! let err = parse("[1 2]").unwrap_err();
//! assert_eq!(err.to_string(), "expected ',' but found '2' at 1:4");
//! ```
//!
//! Supported grammar:
//!
//! - strings are taken verbatim between quotes (no escape decoding) and may
//!   not span lines,
//! - numbers are unsigned decimal digit runs that fit in a `u64`,
//! - comments are not recognised.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Container, Found, ParserError, SyntaxError};
pub use options::ParserOptions;
pub use parser::Parser;
pub use value::{Array, Map, Value};

/// Parses `text` with the default [`ParserOptions`].
///
/// # Errors
///
/// Returns the first syntax error encountered, see [`SyntaxError`].
pub fn parse(text: &str) -> Result<Value, ParserError> {
    Parser::default().parse(text)
}
