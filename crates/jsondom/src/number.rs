//! Lexeme-preserving decimal numbers.

use alloc::{boxed::Box, string::ToString};
use core::fmt;

/// A decimal number that keeps its textual form.
///
/// `Number` stores the validated literal exactly as written, so `42.0` and
/// `4.2e1` survive a parse/serialize round-trip unchanged and never collapse
/// to an integer rendering. Integer-valued literals without a fractional or
/// exponent marker are represented by [`Value::Integer`] instead and never
/// reach this type.
///
/// Two `Number`s compare equal when their literals are identical; `1.5` and
/// `1.50` are distinct values.
///
/// [`Value::Integer`]: crate::Value::Integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    repr: Box<str>,
}

impl Number {
    /// Validates `literal` against the decimal grammar
    /// `[+-]? digits [. digits] [eE [+-] digits]` (at least one digit, and a
    /// digit after any exponent marker) and wraps it verbatim.
    ///
    /// Returns `None` if the literal does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Number;
    ///
    /// assert_eq!(Number::from_literal("4.2e1").unwrap().as_str(), "4.2e1");
    /// assert!(Number::from_literal("0x10").is_none());
    /// ```
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        is_decimal_literal(literal).then(|| Self {
            repr: literal.into(),
        })
    }

    /// Converts a finite float into a `Number`.
    ///
    /// Returns `None` for NaN and infinities, which have no JSON rendering.
    /// The stored literal always carries a fractional or exponent marker, so
    /// the value re-parses as a `Number` rather than an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Number;
    ///
    /// assert_eq!(Number::from_f64(5.0).unwrap().as_str(), "5.0");
    /// assert!(Number::from_f64(f64::NAN).is_none());
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let mut repr = value.to_string();
        if !repr.contains(['.', 'e', 'E']) {
            repr.push_str(".0");
        }
        Some(Self { repr: repr.into() })
    }

    /// The literal text of the number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// The nearest `f64` to this number.
    ///
    /// Literals beyond the double range saturate to infinity, as
    /// `str::parse::<f64>` does.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        // The literal was validated on construction, so this always parses.
        self.repr.parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        i += 1;
    }
    let mut digits = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return false;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        let mut exp_digits = 0;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return false;
        }
    }
    i == bytes.len()
}
