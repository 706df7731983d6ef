//! Rendering a value tree back to text.
//!
//! Two modes over the same leaf rendering: compact (the [`Display`] impl,
//! one line, a single space after `:` and `,`) and pretty (one line per
//! container child, one indent unit per nesting level). Both quote strings
//! through the reader's escape table, so output never contains a raw control
//! character. Serialization of a tree cannot fail.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::{reader::write_escaped, value::Value};

/// The indent unit used by [`Value::to_text_pretty`].
pub const DEFAULT_INDENT: &str = "    ";

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_quoted(s, f),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(key, f)?;
                    write!(f, ": {value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

impl Value {
    /// Renders the tree in compact form: no line breaks, a single space after
    /// each `:` and `,`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::parse;
    ///
    /// let doc = parse("{ \"a\" : 1 ,\n \"b\" : [ ] }").unwrap();
    /// assert_eq!(doc.to_text(), r#"{"a": 1, "b": []}"#);
    /// ```
    #[must_use]
    pub fn to_text(&self) -> String {
        use alloc::string::ToString;
        self.to_string()
    }

    /// Renders the tree with one line per container child, indenting each
    /// nesting level by `indent`. Scalars render as in compact form, and
    /// empty containers stay inline as `{}` / `[]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::parse;
    ///
    /// let doc = parse(r#"{"a": [1, 2]}"#).unwrap();
    /// assert_eq!(
    ///     doc.to_text_indented("  "),
    ///     "{\n  \"a\": [\n    1,\n    2\n  ]\n}"
    /// );
    /// ```
    #[must_use]
    pub fn to_text_indented(&self, indent: &str) -> String {
        let mut out = String::new();
        write_pretty(self, indent, 0, &mut out).expect("writing to a String cannot fail");
        out
    }

    /// Renders the tree as [`to_text_indented`](Value::to_text_indented)
    /// with the default four-space indent.
    #[must_use]
    pub fn to_text_pretty(&self) -> String {
        self.to_text_indented(DEFAULT_INDENT)
    }
}

fn write_quoted<W: Write>(s: &str, f: &mut W) -> fmt::Result {
    f.write_char('"')?;
    write_escaped(s, f)?;
    f.write_char('"')
}

fn write_indent<W: Write>(f: &mut W, indent: &str, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(indent)?;
    }
    Ok(())
}

fn write_pretty<W: Write>(value: &Value, indent: &str, depth: usize, f: &mut W) -> fmt::Result {
    match value {
        Value::Array(items) if !items.is_empty() => {
            f.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                f.write_char('\n')?;
                write_indent(f, indent, depth + 1)?;
                write_pretty(item, indent, depth + 1, f)?;
            }
            f.write_char('\n')?;
            write_indent(f, indent, depth)?;
            f.write_char(']')
        }
        Value::Object(map) if !map.is_empty() => {
            f.write_char('{')?;
            for (i, (key, val)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                f.write_char('\n')?;
                write_indent(f, indent, depth + 1)?;
                write_quoted(key, f)?;
                f.write_str(": ")?;
                write_pretty(val, indent, depth + 1, f)?;
            }
            f.write_char('\n')?;
            write_indent(f, indent, depth)?;
            f.write_char('}')
        }
        leaf => write!(f, "{leaf}"),
    }
}
