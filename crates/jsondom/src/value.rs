//! The JSON value tree.
//!
//! This module defines the [`Value`] enum, which represents any value the
//! parser can produce, and [`Map`], the insertion-ordered container backing
//! objects.

use alloc::{string::String, vec::Vec};

use crate::{error::AccessError, number::Number};

/// An ordered sequence of values; the payload of [`Value::Array`].
pub type Array = Vec<Value>;

/// A JSON value.
///
/// Objects and arrays exclusively own their children, so a `Value` is a plain
/// tree: dropping the root tears the whole structure down, and cloning is a
/// deep copy. Sharing one tree across threads while mutating it requires
/// external synchronization, as with any owned Rust data.
///
/// The [`Integer`](Value::Integer)/[`Number`](Value::Number) split is decided
/// once, at parse time (or by the constructor used), and is never re-inferred
/// during serialization: `42` stays an integer and `42.0` stays a decimal
/// through any number of round-trips.
///
/// # Examples
///
/// ```
/// use jsondom::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_text(), r#"{"key": "value"}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A numeric literal with no fractional or exponent marker that fits a
    /// signed 64-bit integer.
    Integer(i64),
    /// Any other numeric literal, kept in its textual decimal form.
    Number(Number),
    /// A string of Unicode scalar values.
    String(String),
    /// An ordered sequence of owned child values.
    Array(Array),
    /// An ordered mapping of unique string keys to owned child values.
    Object(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{parse, Value};
    ///
    /// assert!(parse("42").unwrap().is_integer());
    /// assert!(!parse("42.0").unwrap().is_integer());
    /// ```
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an [`Integer`](Value::Integer).
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric payload as a double, for either numeric variant.
    ///
    /// Integers convert with the usual `i64` → `f64` precision loss above
    /// 2⁵³; decimals convert via [`Number::as_f64`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// The string payload, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element list, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The element list for in-place mutation, if this is an
    /// [`Array`](Value::Array).
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key/value map, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The key/value map for in-place mutation, if this is an
    /// [`Object`](Value::Object).
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an object member by key.
    ///
    /// Fails with [`AccessError::KeyNotFound`] when the key is absent, or
    /// when this value is not an object at all.
    ///
    /// # Errors
    ///
    /// See above.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{parse, Value};
    ///
    /// let doc = parse(r#"{"a": 1}"#).unwrap();
    /// assert_eq!(doc.member("a").unwrap(), &Value::Integer(1));
    /// assert!(doc.member("b").is_err());
    /// ```
    pub fn member(&self, key: &str) -> Result<&Value, AccessError> {
        match self {
            Self::Object(map) => map.try_get(key),
            _ => Err(AccessError::KeyNotFound(key.into())),
        }
    }

    /// Looks up an object member by key for mutation.
    ///
    /// # Errors
    ///
    /// Fails with [`AccessError::KeyNotFound`] when the key is absent or this
    /// value is not an object.
    pub fn member_mut(&mut self, key: &str) -> Result<&mut Value, AccessError> {
        match self {
            Self::Object(map) => map.try_get_mut(key),
            _ => Err(AccessError::KeyNotFound(key.into())),
        }
    }

    /// Looks up an array element by index.
    ///
    /// Fails with [`AccessError::IndexOutOfRange`] when the index is out of
    /// bounds, or when this value is not an array (reported with length 0).
    ///
    /// # Errors
    ///
    /// See above.
    pub fn element(&self, index: usize) -> Result<&Value, AccessError> {
        match self {
            Self::Array(items) => {
                let len = items.len();
                items
                    .get(index)
                    .ok_or(AccessError::IndexOutOfRange { index, len })
            }
            _ => Err(AccessError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Looks up an array element by index for mutation.
    ///
    /// # Errors
    ///
    /// Fails with [`AccessError::IndexOutOfRange`] when the index is out of
    /// bounds or this value is not an array.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut Value, AccessError> {
        match self {
            Self::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(AccessError::IndexOutOfRange { index, len })
            }
            _ => Err(AccessError::IndexOutOfRange { index, len: 0 }),
        }
    }
}

/// An insertion-ordered mapping of unique string keys to values; the payload
/// of [`Value::Object`].
///
/// Keys keep the position they were first inserted at. Inserting an existing
/// key overwrites the value in place without moving the key; removal shifts
/// later entries up. Lookup is a linear scan, which is the intended scale for
/// document trees.
///
/// # Examples
///
/// ```
/// use jsondom::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("b".to_string(), Value::Integer(1));
/// map.insert("a".to_string(), Value::Integer(2));
/// map.insert("b".to_string(), Value::Integer(3));
/// let keys: Vec<&str> = map.keys().collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(map.get("b"), Some(&Value::Integer(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map {
    entries: Vec<(String, Value)>,
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// The value for `key` for in-place mutation, if present.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// The value for `key`, or [`AccessError::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Fails when the key is absent; the map is never modified.
    pub fn try_get(&self, key: &str) -> Result<&Value, AccessError> {
        self.get(key)
            .ok_or_else(|| AccessError::KeyNotFound(key.into()))
    }

    /// The value for `key` for mutation, or [`AccessError::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Fails when the key is absent; the map is never modified.
    pub fn try_get_mut(&mut self, key: &str) -> Result<&mut Value, AccessError> {
        self.get_mut(key)
            .ok_or_else(|| AccessError::KeyNotFound(key.into()))
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was present. An existing key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        match self.get_mut(&key) {
            Some(slot) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value if it was present. Later entries
    /// keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = alloc::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (String, Value);
    type IntoIter = core::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::Integer(1));
        map.insert("b".to_string(), Value::Integer(2));
        let old = map.insert("a".to_string(), Value::Integer(3));
        assert_eq!(old, Some(Value::Integer(1)));
        assert_eq!(map.keys().collect::<vec::Vec<_>>(), ["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::Integer(3)));
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let mut map: Map = [("a", 1), ("b", 2), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::Integer(v)))
            .collect();
        assert_eq!(map.remove("b"), Some(Value::Integer(2)));
        assert_eq!(map.remove("b"), None);
        assert_eq!(map.keys().collect::<vec::Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn try_get_reports_the_missing_key() {
        let map = Map::new();
        assert_eq!(
            map.try_get("absent"),
            Err(AccessError::KeyNotFound("absent".into()))
        );
    }

    #[test]
    fn element_reports_index_and_length() {
        let v = Value::Array(vec![Value::Null]);
        assert_eq!(v.element(0), Ok(&Value::Null));
        assert_eq!(
            v.element(3),
            Err(AccessError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            Value::Null.element(0),
            Err(AccessError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn member_mut_allows_in_place_update() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::Integer(1));
        let mut v = Value::Object(map);
        *v.member_mut("a").unwrap() = Value::Boolean(true);
        assert_eq!(v.member("a"), Ok(&Value::Boolean(true)));
    }
}
