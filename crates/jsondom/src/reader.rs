//! Character-level primitives shared by the parser and the serializer.
//!
//! A [`Reader`] owns the input buffer and the cursor for one parse, exposing
//! `peek`/`advance`/`expect` style primitives so the grammar routines never
//! index the buffer directly. The escape table lives here too, because the
//! serializer applies the exact inverse mapping when quoting strings.

use alloc::string::String;
use core::fmt;

use crate::error::{ErrorKind, ParseError};

/// Whitespace that is insignificant between tokens.
///
/// Space, newline, carriage return, tab and form feed. Never applies inside a
/// quoted string, where every raw character is content.
pub(crate) fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r' | '\t' | '\u{0C}')
}

/// Input buffer plus cursor for a single parse.
pub(crate) struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// The character under the cursor, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Consumes the character under the cursor.
    pub(crate) fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    /// Consumes and returns the character under the cursor.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advances past a maximal run of insignificant whitespace.
    pub(crate) fn skip_spaces(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.advance();
        }
    }

    /// Consumes `ch` or fails with `UnexpectedToken` at the cursor.
    pub(crate) fn expect(&mut self, ch: char, expected: &'static str) -> Result<(), ParseError> {
        if self.peek() == Some(ch) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                kind: ErrorKind::UnexpectedToken(expected),
                offset: self.pos,
            })
        }
    }

    /// Reads a quoted string literal, decoding escapes.
    ///
    /// The cursor must sit on the opening `"`; on success it is left just past
    /// the closing quote. Fails with `MalformedString` if the opening quote is
    /// absent or the buffer ends before the closing quote, and with
    /// `InvalidEscape` on an unrecognized or malformed escape sequence.
    pub(crate) fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        if self.peek() != Some('"') {
            return Err(ParseError {
                kind: ErrorKind::MalformedString,
                offset: self.pos,
            });
        }
        self.advance();
        let mut decoded = String::new();
        loop {
            let Some(ch) = self.bump() else {
                return Err(ParseError {
                    kind: ErrorKind::MalformedString,
                    offset: self.pos,
                });
            };
            match ch {
                '"' => return Ok(decoded),
                '\\' => {
                    let code_at = self.pos;
                    let Some(code) = self.bump() else {
                        return Err(ParseError {
                            kind: ErrorKind::MalformedString,
                            offset: self.pos,
                        });
                    };
                    decoded.push(match code {
                        '\\' => '\\',
                        '"' => '"',
                        'n' => '\n',
                        'b' => '\u{08}',
                        '0' => '\0',
                        'a' => '\u{07}',
                        'f' => '\u{0C}',
                        'r' => '\r',
                        't' => '\t',
                        'v' => '\u{0B}',
                        'u' => self.read_unicode_escape(code_at)?,
                        other => {
                            return Err(ParseError {
                                kind: ErrorKind::InvalidEscape(other),
                                offset: code_at,
                            });
                        }
                    });
                }
                raw => decoded.push(raw),
            }
        }
    }

    /// Decodes the four hex digits of a `\uXXXX` escape. `code_at` is the
    /// offset of the `u`, reported when the digits name no scalar value.
    fn read_unicode_escape(&mut self, code_at: usize) -> Result<char, ParseError> {
        let mut code_point: u32 = 0;
        for _ in 0..4 {
            let digit_at = self.pos;
            let Some(digit) = self.bump() else {
                return Err(ParseError {
                    kind: ErrorKind::MalformedString,
                    offset: self.pos,
                });
            };
            let Some(value) = digit.to_digit(16) else {
                return Err(ParseError {
                    kind: ErrorKind::InvalidEscape(digit),
                    offset: digit_at,
                });
            };
            code_point = code_point * 16 + value;
        }
        char::from_u32(code_point).ok_or(ParseError {
            kind: ErrorKind::InvalidEscape('u'),
            offset: code_at,
        })
    }

    /// Consumes a bare token: everything up to the next structural delimiter
    /// (`,`, `}`, `]`) or end of input, with surrounding whitespace trimmed.
    ///
    /// Returns the offset of the trimmed token's first byte alongside the
    /// token itself, so the caller can report a precise position when
    /// classification fails. The token may be empty.
    pub(crate) fn read_bare_token(&mut self) -> (usize, &'a str) {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if matches!(ch, ',' | '}' | ']') {
                break;
            }
            self.advance();
        }
        let raw = &self.input[start..self.pos];
        let trimmed = raw.trim_matches(is_space);
        let leading = raw.len() - raw.trim_start_matches(is_space).len();
        (start + leading, trimmed)
    }
}

/// Escapes `src` for inclusion in a quoted JSON string literal.
///
/// The exact inverse of the decode table in [`Reader::read_quoted_string`];
/// control characters outside the table render as `\uXXXX`, so the output
/// never contains a literal control character.
pub(crate) fn write_escaped<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    for ch in src.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\u{08}' => f.write_str("\\b")?,
            '\0' => f.write_str("\\0")?,
            '\u{07}' => f.write_str("\\a")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0B}' => f.write_str("\\v")?,
            ch if ch.is_control() => write!(f, "\\u{:04X}", ch as u32)?,
            ch => f.write_char(ch)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn escaped(src: &str) -> String {
        let mut out = String::new();
        write_escaped(src, &mut out).unwrap();
        out
    }

    #[test]
    fn skip_spaces_stops_at_content() {
        let mut r = Reader::new(" \t\r\n\u{0C}x");
        r.skip_spaces();
        assert_eq!(r.peek(), Some('x'));
        assert_eq!(r.offset(), 5);
    }

    #[test]
    fn reads_plain_string() {
        let mut r = Reader::new("\"hello\" rest");
        assert_eq!(r.read_quoted_string().unwrap(), "hello");
        assert_eq!(r.peek(), Some(' '));
    }

    #[test]
    fn decodes_every_table_escape() {
        let mut r = Reader::new(r#""\\\"\n\b\0\a\f\r\t\v""#);
        assert_eq!(
            r.read_quoted_string().unwrap(),
            "\\\"\n\u{08}\0\u{07}\u{0C}\r\t\u{0B}"
        );
    }

    #[test]
    fn decodes_unicode_escapes() {
        let mut r = Reader::new("\"\\u00E9\\u0041\"");
        assert_eq!(r.read_quoted_string().unwrap(), "\u{E9}A");
    }

    #[test]
    fn rejects_unknown_escape_code() {
        let mut r = Reader::new(r#""\q""#);
        let err = r.read_quoted_string().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidEscape('q'));
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn rejects_surrogate_code_points() {
        let mut r = Reader::new(r#""\uD800""#);
        let err = r.read_quoted_string().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidEscape('u'));
    }

    #[test]
    fn unterminated_string_fails_at_end() {
        let mut r = Reader::new("\"abc");
        let err = r.read_quoted_string().unwrap_err();
        assert_eq!(err, ParseError {
            kind: ErrorKind::MalformedString,
            offset: 4,
        });
    }

    #[test]
    fn missing_open_quote_is_malformed() {
        let mut r = Reader::new("abc");
        let err = r.read_quoted_string().unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedString);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn bare_token_stops_at_delimiters() {
        let mut r = Reader::new("true, 1]");
        assert_eq!(r.read_bare_token(), (0, "true"));
        assert_eq!(r.peek(), Some(','));
    }

    #[test]
    fn bare_token_trims_and_reports_start() {
        let mut r = Reader::new("  42 ,");
        assert_eq!(r.read_bare_token(), (2, "42"));
    }

    #[test]
    fn escape_is_the_inverse_of_the_decode_table() {
        let raw = "\\\"\n\u{08}\0\u{07}\u{0C}\r\t\u{0B}";
        assert_eq!(escaped(raw), r#"\\\"\n\b\0\a\f\r\t\v"#);
    }

    #[test]
    fn stray_control_characters_use_unicode_escapes() {
        assert_eq!(escaped("\u{01}\u{7F}"), "\\u0001\\u007F");
    }
}
