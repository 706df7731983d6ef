//! Error kinds and byte offsets across the failure taxonomy.

use jsondom::{ErrorKind, parse};
use rstest::rstest;

#[rstest]
#[case::empty_input("", ErrorKind::InvalidLiteral(String::new()), 0)]
#[case::missing_value("{\"a\": }", ErrorKind::InvalidLiteral(String::new()), 6)]
#[case::unterminated_string("\"abc", ErrorKind::MalformedString, 4)]
#[case::unquoted_key("{a: 1}", ErrorKind::MalformedString, 1)]
#[case::missing_colon("{\"a\" 1}", ErrorKind::UnexpectedToken("':'"), 5)]
#[case::unclosed_object("{\"a\": 1", ErrorKind::UnexpectedToken("',' or '}'"), 7)]
#[case::unclosed_array("[1", ErrorKind::UnexpectedToken("',' or ']'"), 2)]
#[case::bad_literal("nope", ErrorKind::InvalidLiteral("nope".to_string()), 0)]
#[case::bad_escape("\"\\q\"", ErrorKind::InvalidEscape('q'), 2)]
#[case::bad_hex_escape("\"\\u00G1\"", ErrorKind::InvalidEscape('G'), 5)]
#[case::trailing_garbage("{} x", ErrorKind::UnexpectedToken("end of input"), 3)]
fn parse_failure(#[case] input: &str, #[case] kind: ErrorKind, #[case] offset: usize) {
    let error = parse(input).unwrap_err();
    assert_eq!(error.kind, kind);
    assert_eq!(error.offset, offset);
}

#[test]
fn errors_display_their_offset() {
    let error = parse("\"\\q\"").unwrap_err();
    assert_eq!(error.to_string(), "invalid escape sequence '\\q' at offset 2");
}
