//! A self-contained JSON document tree.
//!
//! `jsondom` parses a UTF-8 buffer holding one JSON document (a permissive
//! superset of the standard grammar) into an owned [`Value`] tree, lets the
//! caller query and mutate the tree in place, and renders it back to text in
//! either compact or pretty form. There is no I/O anywhere in the crate:
//! callers bring the text and take the text away.
//!
//! # Quick start
//!
//! ```
//! use jsondom::{parse, Value};
//!
//! let mut doc = parse(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
//! assert_eq!(doc.member("a").unwrap(), &Value::Integer(1));
//!
//! doc.as_object_mut()
//!     .unwrap()
//!     .insert("c".to_string(), Value::from("added"));
//!
//! assert_eq!(
//!     doc.to_text(),
//!     r#"{"a": 1, "b": [true, null, "x"], "c": "added"}"#
//! );
//! ```
//!
//! # Grammar notes
//!
//! The accepted escape set extends standard JSON with `\0`, `\a` and `\v`
//! (and decodes `\uXXXX`); unknown escapes are rejected. Numbers without a
//! fractional or exponent marker that fit an `i64` become
//! [`Value::Integer`]; every other decimal literal keeps its exact lexeme as
//! a [`Number`], so `42.0` never collapses to `42` on the way back out.
//! Nesting is capped at [`MAX_DEPTH`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod number;
mod parser;
mod reader;
mod ser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{AccessError, ErrorKind, ParseError};
pub use number::Number;
pub use parser::{MAX_DEPTH, parse};
pub use ser::DEFAULT_INDENT;
pub use value::{Array, Map, Value};
