use alloc::string::{String, ToString};

use quickcheck_macros::quickcheck;
use rstest::rstest;

use crate::{Container, Found, ParserOptions, SyntaxError, parse};

fn kind(text: &str) -> SyntaxError {
    parse(text).unwrap_err().kind().clone()
}

#[test]
fn double_comma_is_a_missing_value() {
    assert_eq!(kind("[1,2,,3]"), SyntaxError::ExpectedValue(Found::Char(',')));
}

#[test]
fn missing_colon_reports_what_was_found() {
    let err = parse(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::ExpectedColon(Found::Char('1')));
    assert_eq!(err.to_string(), "expected ':' but found '1' at 1:6");
}

#[test]
fn missing_comma_reports_the_next_token() {
    let err = parse("[1 2]").unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::ExpectedComma(Found::Char('2')));
    assert_eq!(err.to_string(), "expected ',' but found '2' at 1:4");
}

#[test]
fn raw_newline_in_string() {
    assert_eq!(kind("\"line1\nline2\""), SyntaxError::UnexpectedNewline);
    assert_eq!(kind("\"line1\r\nline2\""), SyntaxError::UnexpectedNewline);
}

#[rstest]
#[case("[1, 2", SyntaxError::UnterminatedContainer(Container::Array))]
#[case("[1, [2, 3]", SyntaxError::UnterminatedContainer(Container::Array))]
#[case(r#"{"a": {"b": 1}"#, SyntaxError::UnterminatedContainer(Container::Object))]
#[case(r#"{"a": "b"#, SyntaxError::UnterminatedString)]
#[case(r#"["unclosed, 1]"#, SyntaxError::UnterminatedString)]
fn truncated_documents(#[case] text: &str, #[case] expected: SyntaxError) {
    assert_eq!(kind(text), expected);
}

#[rstest]
#[case("1.5", SyntaxError::TrailingCharacters(Found::Char('.')))]
#[case("[1e3]", SyntaxError::ExpectedValue(Found::Char('e')))]
#[case("[-1]", SyntaxError::ExpectedValue(Found::Char('-')))]
#[case("// c\n{}", SyntaxError::ExpectedValue(Found::Char('/')))]
#[case("{/* c */}", SyntaxError::ExpectedKey(Found::Char('/')))]
#[case("['a']", SyntaxError::ExpectedValue(Found::Char('\'')))]
#[case("{'a': 1}", SyntaxError::ExpectedKey(Found::Char('\'')))]
#[case("[True]", SyntaxError::ExpectedValue(Found::Char('T')))]
fn unsupported_syntax(#[case] text: &str, #[case] expected: SyntaxError) {
    assert_eq!(kind(text), expected);
}

#[test]
fn first_error_wins() {
    // The missing comma comes before the unterminated string.
    assert_eq!(
        kind(r#"[1 2, "abc"#),
        SyntaxError::ExpectedComma(Found::Char('2'))
    );
    // Innermost production fails first.
    assert_eq!(
        kind(r#"{"a": [1, {"b" 2}]}"#),
        SyntaxError::ExpectedColon(Found::Char('2'))
    );
}

#[test]
fn found_end_of_input_is_displayed() {
    let err = parse(" ").unwrap_err();
    assert_eq!(err.to_string(), "expected a value but found end of input at 1:2");
}

#[test]
fn found_newline_is_escaped_in_messages() {
    let err = parse("{\"a\"\n\n1}").unwrap_err();
    assert_eq!(err.to_string(), "expected ':' but found '1' at 3:1");
    let err = parse("[1]\t\n x").unwrap_err();
    assert_eq!(err.to_string(), "unexpected 'x' after the top-level value at 2:2");
    assert_eq!(
        SyntaxError::ExpectedKey(Found::Char('\n')).to_string(),
        r"expected a string key but found '\n'"
    );
}

#[test]
fn found_quote_is_not_escaped_in_messages() {
    assert_eq!(Found::Char('"').to_string(), "'\"'");
    assert_eq!(Found::Char('\'').to_string(), r"'\''");
    let err = parse(r#"{"a": 1 "b": 2}"#).unwrap_err();
    assert_eq!(err.to_string(), r#"expected ',' but found '"' at 1:9"#);
}

#[test]
fn default_parser_rejects_runaway_nesting() {
    let depth = 100_000;
    let text = "[".repeat(depth) + &"]".repeat(depth);
    let err = parse(&text).unwrap_err();
    let limit = ParserOptions::DEFAULT_MAX_DEPTH;
    assert_eq!(err.kind(), &SyntaxError::DepthLimitExceeded(limit));
    assert_eq!((err.line, err.column), (1, limit + 1));

    let text = "{\"a\":".repeat(depth);
    let err = parse(&text).unwrap_err();
    assert_eq!(err.kind(), &SyntaxError::DepthLimitExceeded(limit));
    assert_eq!((err.line, err.column), (1, 5 * limit + 1));
}

/// Arbitrary input must terminate with a value or an error, never panic.
#[quickcheck]
fn arbitrary_text_terminates(text: String) -> bool {
    let _ = parse(&text);
    true
}

/// Every prefix of a valid document is either valid itself or rejected.
#[quickcheck]
fn prefixes_terminate(text: String) -> bool {
    let body = text.replace(['"', '\n', '\r'], "");
    let doc = alloc::format!(r#"{{"k": [1, "{body}", {{"n": null,}},],}}"#);
    for (i, _) in doc.char_indices() {
        let _ = parse(&doc[..i]);
    }
    parse(&doc).is_ok()
}
