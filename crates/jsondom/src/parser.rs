//! Recursive-descent parsing: one routine per grammar production.

use alloc::string::ToString;

use crate::{
    error::{ErrorKind, ParseError},
    number::Number,
    reader::Reader,
    value::{Array, Map, Value},
};

/// Maximum container nesting the parser accepts.
///
/// Recursive descent recurses once per nesting level, so unbounded depth
/// would let adversarial input exhaust the stack. Documents nesting deeper
/// than this fail with [`ErrorKind::DepthExceeded`].
pub const MAX_DEPTH: usize = 128;

/// Parses one JSON document into a [`Value`] tree.
///
/// The whole document must be present in `text`; the grammar is a permissive
/// superset of JSON (extended escape set, signed and exponent-bearing
/// decimals, duplicate object keys with last-write-wins). Only whitespace may
/// follow the root value.
///
/// # Errors
///
/// Fails with a [`ParseError`] carrying the byte offset of the first problem.
/// There is no partial result: on error the input produced no tree at all.
///
/// # Examples
///
/// ```
/// use jsondom::{parse, Value};
///
/// let doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
/// assert_eq!(doc.member("a").unwrap(), &Value::Integer(1));
/// assert_eq!(doc.member("b").unwrap().element(2).unwrap().as_str(), Some("x"));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut reader = Reader::new(text);
    reader.skip_spaces();
    let value = parse_value(&mut reader, 0)?;
    reader.skip_spaces();
    if reader.at_end() {
        Ok(value)
    } else {
        Err(ParseError {
            kind: ErrorKind::UnexpectedToken("end of input"),
            offset: reader.offset(),
        })
    }
}

/// Dispatches on the lookahead character. The cursor must sit on the first
/// character of the value.
fn parse_value(reader: &mut Reader<'_>, depth: usize) -> Result<Value, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError {
            kind: ErrorKind::DepthExceeded,
            offset: reader.offset(),
        });
    }
    match reader.peek() {
        Some('"') => Ok(Value::String(reader.read_quoted_string()?)),
        Some('{') => parse_object(reader, depth),
        Some('[') => parse_array(reader, depth),
        _ => parse_scalar(reader),
    }
}

fn parse_object(reader: &mut Reader<'_>, depth: usize) -> Result<Value, ParseError> {
    reader.advance(); // the '{'
    let mut map = Map::new();
    reader.skip_spaces();
    if reader.peek() == Some('}') {
        reader.advance();
        return Ok(Value::Object(map));
    }
    loop {
        reader.skip_spaces();
        let key = reader.read_quoted_string()?;
        reader.skip_spaces();
        reader.expect(':', "':'")?;
        reader.skip_spaces();
        let value = parse_value(reader, depth + 1)?;
        // Duplicate keys: last write wins, first position kept.
        map.insert(key, value);
        reader.skip_spaces();
        match reader.peek() {
            Some(',') => reader.advance(),
            Some('}') => {
                reader.advance();
                return Ok(Value::Object(map));
            }
            _ => {
                return Err(ParseError {
                    kind: ErrorKind::UnexpectedToken("',' or '}'"),
                    offset: reader.offset(),
                });
            }
        }
    }
}

fn parse_array(reader: &mut Reader<'_>, depth: usize) -> Result<Value, ParseError> {
    reader.advance(); // the '['
    let mut items = Array::new();
    reader.skip_spaces();
    if reader.peek() == Some(']') {
        reader.advance();
        return Ok(Value::Array(items));
    }
    loop {
        reader.skip_spaces();
        items.push(parse_value(reader, depth + 1)?);
        reader.skip_spaces();
        match reader.peek() {
            Some(',') => reader.advance(),
            Some(']') => {
                reader.advance();
                return Ok(Value::Array(items));
            }
            _ => {
                return Err(ParseError {
                    kind: ErrorKind::UnexpectedToken("',' or ']'"),
                    offset: reader.offset(),
                });
            }
        }
    }
}

/// Classifies a bare token as `null`, a boolean, an integer, or a decimal
/// number, in that priority order.
fn parse_scalar(reader: &mut Reader<'_>) -> Result<Value, ParseError> {
    let (offset, token) = reader.read_bare_token();
    match token {
        "null" => Ok(Value::Null),
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        _ => classify_number(token).ok_or_else(|| ParseError {
            kind: ErrorKind::InvalidLiteral(token.to_string()),
            offset,
        }),
    }
}

/// A token without fractional or exponent marker that fits an `i64` is an
/// integer; any other valid decimal literal (including integral tokens beyond
/// the `i64` range) keeps its lexeme as a [`Number`].
fn classify_number(token: &str) -> Option<Value> {
    if !token.contains(['.', 'e', 'E']) {
        if let Ok(n) = token.parse::<i64>() {
            return Some(Value::Integer(n));
        }
    }
    Number::from_literal(token).map(Value::Number)
}
