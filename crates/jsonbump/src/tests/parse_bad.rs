use std::io::Cursor;

use crate::{Arena, ErrorKind, ParseError, Parser, ParserOptions, parse_slice};

fn parse_err(src: &[u8]) -> ParseError {
    let arena = Arena::new();
    parse_slice(src, &arena).expect_err("document should fail to parse")
}

fn assert_early_eof(src: &[u8], offset: u64) {
    let err = parse_err(src);
    assert!(
        matches!(err.kind, ErrorKind::EarlyEof),
        "expected EarlyEof for {src:?}, got {:?}",
        err.kind
    );
    assert_eq!(err.offset, offset, "offset mismatch for {src:?}");
}

fn assert_unexpected(src: &[u8], found: u8, offset: u64) {
    let err = parse_err(src);
    match err.kind {
        ErrorKind::UnexpectedChar { found: f, .. } => {
            assert_eq!(f, found, "found-byte mismatch for {src:?}");
        }
        other => panic!("expected UnexpectedChar for {src:?}, got {other:?}"),
    }
    assert_eq!(err.offset, offset, "offset mismatch for {src:?}");
}

#[test]
fn empty_input() {
    assert_early_eof(b"", 0);
}

#[test]
fn whitespace_only_input() {
    assert_early_eof(b"  \n\t ", 5);
}

#[test]
fn truncated_literals_hit_early_eof() {
    assert_early_eof(b"tru", 3);
    assert_early_eof(b"fals", 4);
    assert_early_eof(b"nul", 3);
}

#[test]
fn misspelled_literals_hit_the_bad_byte() {
    assert_unexpected(b"trux", b'x', 3);
    assert_unexpected(b"falsy", b'y', 4);
    assert_unexpected(b"nall", b'a', 1);
}

#[test]
fn truncated_object_value() {
    assert_early_eof(b"{\"a\":", 5);
}

#[test]
fn unterminated_containers() {
    assert_early_eof(b"{", 1);
    assert_early_eof(b"[", 1);
    assert_early_eof(b"[1,", 3);
}

#[test]
fn unterminated_strings() {
    assert_early_eof(b"\"abc", 4);
    // A trailing backslash escapes the end of input.
    assert_early_eof(b"\"ab\\", 4);
}

#[test]
fn leading_minus_is_not_a_number_starter() {
    // Only an ASCII digit dispatches into the number production.
    assert_unexpected(b"-1", b'-', 0);
}

#[test]
fn bare_garbage() {
    assert_unexpected(b"x", b'x', 0);
    assert_unexpected(b"[1,x]", b'x', 3);
}

#[test]
fn object_wants_a_quoted_key() {
    assert_unexpected(b"{,}", b',', 1);
    assert_unexpected(b"{1:2}", b'1', 1);
}

#[test]
fn object_wants_a_colon() {
    assert_unexpected(b"{\"a\" 1}", b'1', 5);
}

#[test]
fn object_wants_a_separator_between_pairs() {
    assert_unexpected(b"{\"a\":1 \"b\":2}", b'"', 7);
}

#[test]
fn exponent_without_digits() {
    assert_unexpected(b"[1e,2]", b',', 3);
    assert_early_eof(b"1e", 2);
}

#[test]
fn duplicate_key_aborts_the_parse() {
    let err = parse_err(b"{\"a\":1,\"a\":2}");
    match err.kind {
        ErrorKind::DuplicateKey(key) => assert_eq!(key, "a"),
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

#[test]
fn diagnostic_renders_window_and_caret() {
    let err = parse_err(b"{\n\t\"a\" 1}");
    assert_eq!(
        err.to_string(),
        "unexpected symbol '1', expected ':' at index 7\ncontext:\n{\\n\\t\"a\" 1}\n         ^"
    );
}

#[test]
fn diagnostic_at_end_of_input() {
    let err = parse_err(b"tru");
    assert_eq!(
        err.to_string(),
        "unexpected end of input at index 3\ncontext:\ntru\n   ^"
    );
}

#[test]
fn context_capture_can_be_disabled() {
    let arena = Arena::new();
    let options = ParserOptions { context_len: 0 };
    let err = Parser::with_options(Cursor::new(b"x".as_slice()), &arena, options)
        .parse_value()
        .expect_err("should fail");
    assert!(err.context.is_none());
    assert_eq!(err.to_string(), "unexpected symbol 'x', expected a JSON value at index 0");
}

#[test]
fn failure_discards_cleanly_by_resetting_the_arena() {
    let mut arena = Arena::new();
    assert!(parse_slice(b"{\"a\":[1,2,", &arena).is_err());
    // The half-built tree is abandoned wholesale; the arena is ready for
    // the next parse after one reset.
    arena.reset();
    let value = parse_slice(b"[3]", &arena).unwrap();
    assert_eq!(value.as_array().unwrap(), [crate::Value::Number(3.0)]);
}
