//! `JsonRecord`: a small insertion-ordered JSON object.
//!
//! # Design
//!
//! Values are restricted to a closed set ([`FieldValue`]): text and 64-bit
//! integers. The backing store is a `serde_json::Map`, which keeps insertion
//! order because the workspace enables serde_json's `preserve_order`
//! feature. Updating an existing key keeps its original position.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::domain::error::DomainError;

// ── FieldValue ───────────────────────────────────────────────────────────────

/// A value stored in a [`JsonRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Integer(_) => None,
        }
    }

    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<FieldValue> for Value {
    fn from(v: FieldValue) -> Self {
        match v {
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Integer(n) => Value::from(n),
        }
    }
}

impl TryFrom<&Value> for FieldValue {
    /// A short description of the rejected value's kind.
    type Error = &'static str;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(Self::Integer).ok_or(if n.is_f64() {
                "a float"
            } else {
                "an out-of-range integer"
            }),
            other => Err(kind_of(other)),
        }
    }
}

impl PartialEq<&str> for FieldValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<i64> for FieldValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ── Indent ───────────────────────────────────────────────────────────────────

/// Indentation width used when rendering a record. Zero means compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Indent(usize);

impl Indent {
    pub const MAX: usize = 8;
    pub const DEFAULT: Self = Self(2);

    pub fn new(width: usize) -> Result<Self, DomainError> {
        if width > Self::MAX {
            return Err(DomainError::InvalidIndent {
                width,
                max: Self::MAX,
            });
        }
        Ok(Self(width))
    }

    pub const fn width(self) -> usize {
        self.0
    }

    pub const fn is_compact(self) -> bool {
        self.0 == 0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ── JsonRecord ───────────────────────────────────────────────────────────────

/// An insertion-ordered mapping from field name to [`FieldValue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonRecord {
    fields: Map<String, Value>,
}

impl JsonRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a field, returning the previous value if the key existed.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        let value: FieldValue = value.into();
        self.fields
            .insert(key.into(), value.into())
            .and_then(|previous| FieldValue::try_from(&previous).ok())
    }

    pub fn get(&self, key: &str) -> Option<FieldValue> {
        self.fields
            .get(key)
            .and_then(|v| FieldValue::try_from(v).ok())
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.fields.get(key)?.as_str()
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.fields.get(key)?.as_i64()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Remove a field. The remaining fields keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields
            .shift_remove(key)
            .and_then(|v| FieldValue::try_from(&v).ok())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldValue)> {
        self.fields
            .iter()
            .filter_map(|(k, v)| FieldValue::try_from(v).ok().map(|v| (k.as_str(), v)))
    }

    /// Render with the given indentation; an indent of zero is compact.
    pub fn to_json_pretty(&self, indent: Indent) -> Result<String, DomainError> {
        if indent.is_compact() {
            return self.to_json_compact();
        }

        let pad = " ".repeat(indent.width());
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(pad.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .map_err(|e| DomainError::Serialization {
                reason: e.to_string(),
            })?;

        String::from_utf8(buf).map_err(|e| DomainError::Serialization {
            reason: e.to_string(),
        })
    }

    pub fn to_json_compact(&self) -> Result<String, DomainError> {
        serde_json::to_string(&self.fields).map_err(|e| DomainError::Serialization {
            reason: e.to_string(),
        })
    }

    /// Parse a record from JSON text.
    ///
    /// The text must be a single object whose values are strings or integers
    /// that fit in an `i64`.
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(text).map_err(|e| DomainError::InvalidJson {
            reason: e.to_string(),
        })?;

        let fields = match value {
            Value::Object(map) => map,
            other => {
                return Err(DomainError::NotAnObject {
                    found: kind_of(&other),
                });
            }
        };

        for (field, value) in &fields {
            FieldValue::try_from(value).map_err(|found| DomainError::UnsupportedValue {
                field: field.clone(),
                found,
            })?;
        }

        Ok(Self { fields })
    }
}

impl FromStr for JsonRecord {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl fmt::Display for JsonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_json_compact().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> JsonRecord {
        JsonRecord::new()
            .with("name", "John")
            .with("age", 30)
            .with("city", "New York")
    }

    #[test]
    fn basic_record() {
        let j = john();

        assert_eq!(j.get("name").unwrap(), "John");
        assert_eq!(j.get("age").unwrap(), 30_i64);
        assert_eq!(j.get("city").unwrap(), "New York");
        assert_eq!(j.len(), 3);
        assert!(j.contains("name"));
        assert!(!j.contains("country"));
    }

    #[test]
    fn modify_record() {
        let mut j = john();

        let previous = j.set("age", 31);
        j.set("country", "USA");

        assert_eq!(previous, Some(FieldValue::Integer(30)));
        assert_eq!(j.get_integer("age"), Some(31));
        assert_eq!(j.get_text("country"), Some("USA"));
        assert_eq!(j.len(), 4);
    }

    #[test]
    fn update_keeps_position() {
        let mut j = john();
        j.set("name", "Jane");
        assert_eq!(j.keys().collect::<Vec<_>>(), ["name", "age", "city"]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut j = john();
        assert_eq!(j.remove("age"), Some(FieldValue::Integer(30)));
        assert_eq!(j.keys().collect::<Vec<_>>(), ["name", "city"]);
        assert_eq!(j.remove("age"), None);
    }

    #[test]
    fn typed_accessors_reject_wrong_kind() {
        let j = john();
        assert_eq!(j.get_text("age"), None);
        assert_eq!(j.get_integer("name"), None);
        assert_eq!(j.get("missing"), None);
    }

    #[test]
    fn pretty_uses_requested_indent() {
        let j = JsonRecord::new().with("name", "Enigma").with("age", 1020);

        assert_eq!(
            j.to_json_pretty(Indent::DEFAULT).unwrap(),
            "{\n  \"name\": \"Enigma\",\n  \"age\": 1020\n}"
        );
        assert_eq!(
            j.to_json_pretty(Indent::new(4).unwrap()).unwrap(),
            "{\n    \"name\": \"Enigma\",\n    \"age\": 1020\n}"
        );
    }

    #[test]
    fn zero_indent_is_compact() {
        let j = JsonRecord::new().with("name", "Enigma").with("age", 1020);
        let compact = j.to_json_pretty(Indent::new(0).unwrap()).unwrap();
        assert_eq!(compact, r#"{"name":"Enigma","age":1020}"#);
        assert_eq!(j.to_string(), compact);
    }

    #[test]
    fn indent_out_of_range() {
        assert_eq!(
            Indent::new(9),
            Err(DomainError::InvalidIndent { width: 9, max: 8 })
        );
        assert_eq!(Indent::default().width(), 2);
    }

    #[test]
    fn parse_preserves_document_order() {
        let j: JsonRecord = r#"{"zeta": 1, "alpha": "a", "mid": -7}"#.parse().unwrap();
        assert_eq!(j.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(j.get_integer("mid"), Some(-7));
    }

    #[test]
    fn parse_rejects_non_objects() {
        assert_eq!(
            JsonRecord::from_json("[1, 2]"),
            Err(DomainError::NotAnObject { found: "an array" })
        );
        assert!(matches!(
            JsonRecord::from_json("{not json"),
            Err(DomainError::InvalidJson { .. })
        ));
    }

    #[test]
    fn parse_rejects_unsupported_values() {
        let cases = [
            (r#"{"x": 1.5}"#, "a float"),
            (r#"{"x": true}"#, "a boolean"),
            (r#"{"x": null}"#, "null"),
            (r#"{"x": {"y": 1}}"#, "an object"),
            (r#"{"x": 18446744073709551615}"#, "an out-of-range integer"),
        ];

        for (text, found) in cases {
            assert_eq!(
                JsonRecord::from_json(text),
                Err(DomainError::UnsupportedValue {
                    field: "x".into(),
                    found,
                }),
                "input: {text}"
            );
        }
    }

    #[test]
    fn iter_yields_typed_values_in_order() {
        let record = john();
        let pairs: Vec<_> = record.iter().collect();
        assert_eq!(pairs[0], ("name", FieldValue::from("John")));
        assert_eq!(pairs[1], ("age", FieldValue::Integer(30)));
    }
}
