// SPDX-License-Identifier: Apache-2.0

use crate::json_string::JsonString;
use crate::ParseError;

/// The active variant tag of a [`Value`].
///
/// Non-exhaustive: arrays and objects are expected to join later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    Null,
    True,
    False,
    Number,
    String,
}

/// A parsed JSON scalar.
///
/// A `Value` starts out as `Null`. [`parse`](crate::parse) overwrites it in
/// place; [`set_string`](Value::set_string) and [`release`](Value::release)
/// replace the payload, dropping whatever string was held before.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    True,
    False,
    Number(f64),
    String(JsonString),
}

impl Value {
    /// Parses a complete JSON document holding a single scalar.
    pub fn from_slice(input: &[u8]) -> Result<Self, ParseError> {
        let mut value = Value::Null;
        crate::parse(&mut value, input)?;
        Ok(value)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::True => ValueKind::True,
            Value::False => ValueKind::False,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
        }
    }

    /// The numeric payload.
    ///
    /// # Panics
    /// If the value is not a number.
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("expected a number value, found {:?}", other.kind()),
        }
    }

    /// The string payload.
    ///
    /// # Panics
    /// If the value is not a string.
    pub fn json_string(&self) -> &JsonString {
        match self {
            Value::String(s) => s,
            other => panic!("expected a string value, found {:?}", other.kind()),
        }
    }

    /// The string content bytes.
    ///
    /// # Panics
    /// If the value is not a string.
    pub fn string(&self) -> &[u8] {
        self.json_string().as_bytes()
    }

    /// Length in bytes of the string content.
    ///
    /// # Panics
    /// If the value is not a string.
    pub fn string_len(&self) -> usize {
        self.json_string().len()
    }

    /// Replaces the value with a copy of `s`, dropping any string held
    /// before.
    pub fn set_string(&mut self, s: &[u8]) {
        self.release();
        *self = Value::String(JsonString::from_bytes(s));
    }

    /// Drops any owned payload and resets the value to `Null`.
    pub fn release(&mut self) {
        *self = Value::Null;
    }
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Value::from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default().kind(), ValueKind::Null);
    }

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(Value::True.kind(), ValueKind::True);
        assert_eq!(Value::False.kind(), ValueKind::False);
        assert_eq!(Value::Number(1.5).kind(), ValueKind::Number);
        assert_eq!(
            Value::String(JsonString::from_bytes(b"x")).kind(),
            ValueKind::String
        );
    }

    #[test]
    fn test_set_string_copies_bytes() {
        let mut v = Value::Number(2.0);
        let source = b"hello".to_vec();
        v.set_string(&source);
        drop(source);
        assert_eq!(v.kind(), ValueKind::String);
        assert_eq!(v.string(), b"hello");
        assert_eq!(v.string_len(), 5);
    }

    #[test]
    fn test_set_string_replaces_previous_string() {
        let mut v = Value::default();
        v.set_string(b"first");
        v.set_string(b"second!");
        assert_eq!(v.string(), b"second!");
        assert_eq!(v.string_len(), 7);
    }

    #[test]
    fn test_set_string_empty() {
        let mut v = Value::default();
        v.set_string(b"");
        assert_eq!(v.kind(), ValueKind::String);
        assert_eq!(v.string_len(), 0);
        assert_eq!(v.json_string().as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn test_release_twice() {
        let mut v = Value::default();
        v.set_string(b"abc");
        v.release();
        assert_eq!(v.kind(), ValueKind::Null);
        v.release();
        assert_eq!(v.kind(), ValueKind::Null);
    }

    #[test]
    fn test_release_after_set_string() {
        let mut v = Value::default();
        v.set_string(b"payload");
        v.release();
        assert_eq!(v, Value::Null);
        // The released value is reusable.
        v.set_string(b"again");
        assert_eq!(v.string(), b"again");
    }

    #[test]
    #[should_panic(expected = "expected a number value")]
    fn test_number_on_wrong_kind_panics() {
        Value::True.number();
    }

    #[test]
    #[should_panic(expected = "expected a string value")]
    fn test_string_on_wrong_kind_panics() {
        Value::Number(0.0).string();
    }

    #[test]
    #[should_panic(expected = "expected a string value")]
    fn test_string_len_on_wrong_kind_panics() {
        Value::Null.string_len();
    }
}
