//! Error types for parsing and tree queries.

use alloc::string::String;

use thiserror::Error;

/// An error produced while parsing a JSON document.
///
/// Parsing aborts at the first error; there is no partial result or
/// best-effort recovery. The [`offset`](ParseError::offset) field is the byte
/// offset into the input at which the failure was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset into the input at which the failure occurred.
    pub offset: usize,
}

/// The kinds of failure a parse can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A quoted string is unterminated, or a quote was required and absent.
    #[error("malformed string literal")]
    MalformedString,
    /// An escape sequence uses an unrecognized or malformed code.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// A required structural character is missing where the grammar demands
    /// it.
    #[error("unexpected token: expected {0}")]
    UnexpectedToken(&'static str),
    /// A bare token is neither `null`, `true`/`false`, nor a valid
    /// integer/decimal literal.
    #[error("invalid literal '{0}'")]
    InvalidLiteral(String),
    /// The document nests deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting depth limit exceeded")]
    DepthExceeded,
}

/// An error produced by the fallible tree-query accessors.
///
/// Query errors are caller-local: a failed lookup never modifies the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The object has no member with the requested key (or the value queried
    /// is not an object).
    #[error("key not found: \"{0}\"")]
    KeyNotFound(String),
    /// The index is out of bounds for the array (or the value queried is not
    /// an array).
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the array at the time of the query.
        len: usize,
    },
}
