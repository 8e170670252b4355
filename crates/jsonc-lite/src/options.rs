/// Configuration options for the parser.
///
/// # Examples
///
/// ```rust
/// use jsonc_lite::{Parser, ParserOptions};
///
/// let parser = Parser::new(ParserOptions {
///     max_depth: Some(32),
///     ..Default::default()
/// });
/// assert!(parser.parse("[[[]]]").is_ok());
/// ```
///
/// # Default
///
/// Only the JSON whitespace characters are skipped and nesting is capped at
/// [`DEFAULT_MAX_DEPTH`](Self::DEFAULT_MAX_DEPTH) levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to allow any Unicode whitespace between tokens.
    ///
    /// By default, the parser only recognizes space (U+0020), horizontal tab
    /// (U+0009), line feed (U+000A) and carriage return (U+000D). Inside
    /// string literals nothing is skipped either way.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_unicode_whitespace: bool,

    /// Maximum nesting depth of arrays and objects.
    ///
    /// Each production recurses once per nesting level. Exceeding the limit
    /// fails with
    /// [`SyntaxError::DepthLimitExceeded`](crate::SyntaxError::DepthLimitExceeded).
    /// `None` removes the cap, in which case deeply nested input can exhaust
    /// the stack.
    ///
    /// # Default
    ///
    /// `Some(`[`DEFAULT_MAX_DEPTH`](Self::DEFAULT_MAX_DEPTH)`)`
    pub max_depth: Option<usize>,
}

impl ParserOptions {
    /// Nesting limit used by [`ParserOptions::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            allow_unicode_whitespace: false,
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
        }
    }
}
