//! # Value Model
//!
//! A self-describing representation of arbitrary JSON data. Credential
//! subjects and extension properties carry issuer-defined structure the
//! schema cannot anticipate, so the codec round-trips them through [`Value`]
//! rather than forcing a type on them.
//!
//! Objects preserve insertion order. A document decoded and re-encoded emits
//! its properties in the order they were first seen, which keeps stored
//! credentials byte-comparable across round trips.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Error;
use crate::{scalar, Result};

/// An ordered mapping of property names to values.
pub type Map = IndexMap<String, Value>;

/// Any JSON value.
///
/// Numbers are split into [`Integer`](Self::Integer) and
/// [`Float`](Self::Float) so that integer literals survive round trips
/// exactly; the two never compare equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,

    /// A `true` or `false` literal.
    Bool(bool),

    /// A 64-bit signed integer literal.
    Integer(i64),

    /// A double-precision float literal. Construct through [`Value::float`]
    /// to keep the finiteness invariant; a hand-built non-finite float is
    /// caught at encode time instead.
    Float(f64),

    /// A string.
    String(String),

    /// An ordered sequence of values.
    Array(Vec<Value>),

    /// An ordered mapping of string keys to values.
    Object(Map),
}

impl Value {
    /// Creates a float value.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Value` when `f` is NaN or infinite, neither of
    /// which JSON can represent.
    pub fn float(f: f64) -> Result<Self> {
        if f.is_finite() {
            Ok(Self::Float(f))
        } else {
            Err(Error::Value(format!("non-finite float {f}")))
        }
    }

    /// Returns true when the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean when the value is a `Bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer when the value is an `Integer`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float when it is a `Float` or an `Integer`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string slice when the value is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements when the value is an `Array`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the entries when the value is an `Object`.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Builds a value from a parsed JSON tree.
    ///
    /// Number tokens pass through [`scalar::resolve`] on their token text, so
    /// integer literals become [`Integer`](Self::Integer) and everything else
    /// numeric becomes [`Float`](Self::Float). Strings are never resolved.
    /// Object entries keep their source order.
    ///
    /// # Errors
    ///
    /// Fails with `Error::MalformedLiteral` when a number token resolves to
    /// no supported primitive.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Ok(Self::Null),
            serde_json::Value::Bool(b) => Ok(Self::Bool(*b)),
            serde_json::Value::Number(n) => scalar::resolve(&n.to_string()),
            serde_json::Value::String(s) => Ok(Self::String(s.clone())),
            serde_json::Value::Array(items) => {
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    array.push(Self::from_json(item)?);
                }
                Ok(Self::Array(array))
            }
            serde_json::Value::Object(entries) => {
                let mut object = Map::with_capacity(entries.len());
                for (key, entry) in entries {
                    object.insert(key.clone(), Self::from_json(entry)?);
                }
                Ok(Self::Object(object))
            }
        }
    }

    /// Projects the value onto a JSON tree, preserving object entry order.
    ///
    /// # Errors
    ///
    /// Fails with `Error::Value` when the value contains a non-finite float.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        match self {
            Self::Null => Ok(serde_json::Value::Null),
            Self::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            Self::Integer(i) => Ok(serde_json::Value::Number((*i).into())),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .ok_or_else(|| Error::Value(format!("non-finite float {f}"))),
            Self::String(s) => Ok(serde_json::Value::String(s.clone())),
            Self::Array(items) => {
                let mut array = Vec::with_capacity(items.len());
                for item in items {
                    array.push(item.to_json()?);
                }
                Ok(serde_json::Value::Array(array))
            }
            Self::Object(entries) => {
                let mut object = serde_json::Map::with_capacity(entries.len());
                for (key, entry) in entries {
                    object.insert(key.clone(), entry.to_json()?);
                }
                Ok(serde_json::Value::Object(object))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => {
                if f.is_finite() {
                    serializer.serialize_f64(*f)
                } else {
                    Err(serde::ser::Error::custom(format!("non-finite float {f}")))
                }
            }
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, entry) in entries {
                    map.serialize_entry(key, entry)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // route through the parsed tree so number tokens hit the resolver
        let wire = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&wire).map_err(serde::de::Error::custom)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<Map> for Value {
    fn from(entries: Map) -> Self {
        Self::Object(entries)
    }
}

/// Projection of a native type onto the [`Value`] model.
///
/// Implementing this is how a typed record earns a place inside a credential
/// subject or extension property. Record implementations build an
/// [`Object`](Value::Object) from their fields in declaration order; the
/// projection is one-way, so a record read back from a document compares as a
/// plain object, not as the record type.
pub trait ToValue {
    /// Projects `self` onto a [`Value`].
    ///
    /// # Errors
    ///
    /// Fails with `Error::Value` when the projection reaches a value JSON
    /// cannot represent.
    fn to_value(&self) -> Result<Value>;
}

impl ToValue for Value {
    fn to_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value> {
        (**self).to_value()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Bool(*self))
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Integer(*self))
    }
}

impl ToValue for i32 {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Integer((*self).into()))
    }
}

impl ToValue for u64 {
    #[allow(clippy::cast_precision_loss)]
    fn to_value(&self) -> Result<Value> {
        // values past i64::MAX have no exact representation here
        i64::try_from(*self).map_or_else(|_| Value::float(*self as f64), |i| Ok(Value::Integer(i)))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Result<Value> {
        Value::float(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.to_string()))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::String(self.clone()))
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value> {
        self.as_ref().map_or(Ok(Value::Null), ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Result<Value> {
        let mut array = Vec::with_capacity(self.len());
        for item in self {
            array.push(item.to_value()?);
        }
        Ok(Value::Array(array))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Result<Value> {
        self.as_slice().to_value()
    }
}

impl<K: fmt::Display, T: ToValue> ToValue for IndexMap<K, T> {
    fn to_value(&self) -> Result<Value> {
        let mut object = Map::with_capacity(self.len());
        for (key, entry) in self {
            object.insert(key.to_string(), entry.to_value()?);
        }
        Ok(Value::Object(object))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_roundtrip() {
        let wire = json!({
            "name": "holder",
            "count": 3,
            "exact": 9_007_199_254_740_993_i64,
            "ratio": 0.25,
            "flags": [true, false, null],
            "nested": {"b": 1, "a": 2}
        });

        let value = Value::from_json(&wire).expect("should build");
        let object = value.as_object().expect("should be an object");
        assert_eq!(object["count"], Value::Integer(3));
        assert_eq!(object["exact"], Value::Integer(9_007_199_254_740_993));
        assert_eq!(object["ratio"], Value::Float(0.25));

        // source order survives, including the out-of-alphabet nested keys
        let nested = object["nested"].as_object().expect("should be an object");
        let keys: Vec<&String> = nested.keys().collect();
        assert_eq!(keys, ["b", "a"]);

        let back = value.to_json().expect("should project");
        assert_eq!(back, wire);
        assert_eq!(Value::from_json(&back).expect("should rebuild"), value);
    }

    #[test]
    fn u64_overflow_degrades() {
        let wire = json!(u64::MAX);
        let value = Value::from_json(&wire).expect("should build");
        assert_eq!(value, Value::Float(18_446_744_073_709_551_615.0));
    }

    #[test]
    fn string_token_stays_string() {
        let value = Value::from_json(&json!("42")).expect("should build");
        assert_eq!(value, Value::String("42".into()));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(Value::float(f64::NAN).is_err());
        assert!(Value::float(f64::INFINITY).is_err());

        let err = Value::Float(f64::NAN).to_json().expect_err("should fail");
        assert!(matches!(err, Error::Value(_)));
        assert!(serde_json::to_string(&Value::Float(f64::NAN)).is_err());
    }

    #[test]
    fn serde_delegates_to_resolver() {
        let value: Value = serde_json::from_str(r#"{"n": 7, "f": 7.5}"#).expect("should parse");
        let object = value.as_object().expect("should be an object");
        assert_eq!(object["n"], Value::Integer(7));
        assert_eq!(object["f"], Value::Float(7.5));

        let text = serde_json::to_string(&value).expect("should serialize");
        assert_eq!(text, r#"{"n":7,"f":7.5}"#);
    }

    #[test]
    fn option_and_sequence_projection() {
        let absent: Option<i64> = None;
        assert_eq!(absent.to_value().expect("should project"), Value::Null);

        let list = vec!["OK", "MOK"];
        assert_eq!(
            list.to_value().expect("should project"),
            Value::Array(vec![Value::String("OK".into()), Value::String("MOK".into())])
        );
    }

    #[test]
    fn map_projection_keeps_order() {
        let mut map = IndexMap::new();
        map.insert("z", 1_i64);
        map.insert("a", 2_i64);

        let value = map.to_value().expect("should project");
        let object = value.as_object().expect("should be an object");
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn record_projection() {
        struct Name {
            name: String,
            language: Option<String>,
        }

        impl ToValue for Name {
            fn to_value(&self) -> Result<Value> {
                let mut object = Map::new();
                object.insert("name".into(), self.name.to_value()?);
                object.insert("language".into(), self.language.to_value()?);
                Ok(Value::Object(object))
            }
        }

        let record = Name { name: "Acme".into(), language: None };
        let value = record.to_value().expect("should project");
        let object = value.as_object().expect("should be an object");
        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(keys, ["name", "language"], "fields project in declaration order");
        assert_eq!(object["language"], Value::Null);
    }
}
