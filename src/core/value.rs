//! Dynamic values that can hold "no value"
//!
//! This module provides:
//! - `DevValue`: a JSON value tree with an extra `Undefined` variant
//! - `Undefined`: a unit marker that serializes as "no value"
//!
//! Both serialize the "no value" case as [`UNDEFINED_SENTINEL`], which
//! [`stringify`](crate::stringify) turns into a bare `undefined` token.

use super::stringify::UNDEFINED_SENTINEL;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Marker for an absent value, distinct from `null`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undefined;

impl Serialize for Undefined {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(UNDEFINED_SENTINEL)
    }
}

/// Value tree for building ad-hoc debug payloads
///
/// Objects keep insertion order.
///
/// # Example
///
/// ```
/// use rust_dev_logger::{stringify, DevValue};
///
/// let query = DevValue::object([("where", DevValue::Undefined)]);
/// assert_eq!(stringify(&query).unwrap(), "{\n  \"where\": undefined\n}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DevValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<DevValue>),
    Object(IndexMap<String, DevValue>),
}

impl DevValue {
    /// Build an object from key/value pairs, keeping their order
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<DevValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        DevValue::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from values
    pub fn array<V, I>(items: I) -> Self
    where
        V: Into<DevValue>,
        I: IntoIterator<Item = V>,
    {
        DevValue::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, DevValue::Undefined)
    }

    /// Insert a property, turning a non-object value into an empty object first
    pub fn insert<K: Into<String>, V: Into<DevValue>>(&mut self, key: K, value: V) {
        if !matches!(self, DevValue::Object(_)) {
            *self = DevValue::Object(IndexMap::new());
        }
        if let DevValue::Object(map) = self {
            map.insert(key.into(), value.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&DevValue> {
        match self {
            DevValue::Object(map) => map.get(key),
            _ => None,
        }
    }
}

impl Serialize for DevValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DevValue::Undefined => Undefined.serialize(serializer),
            DevValue::Null => serializer.serialize_unit(),
            DevValue::Bool(b) => serializer.serialize_bool(*b),
            DevValue::Number(n) => n.serialize(serializer),
            DevValue::String(s) => serializer.serialize_str(s),
            DevValue::Array(items) => serializer.collect_seq(items),
            DevValue::Object(map) => serializer.collect_map(map),
        }
    }
}

impl From<Undefined> for DevValue {
    fn from(_: Undefined) -> Self {
        DevValue::Undefined
    }
}

impl From<()> for DevValue {
    fn from(_: ()) -> Self {
        DevValue::Null
    }
}

impl From<bool> for DevValue {
    fn from(b: bool) -> Self {
        DevValue::Bool(b)
    }
}

impl From<i64> for DevValue {
    fn from(i: i64) -> Self {
        DevValue::Number(i.into())
    }
}

impl From<i32> for DevValue {
    fn from(i: i32) -> Self {
        DevValue::Number(i.into())
    }
}

impl From<u64> for DevValue {
    fn from(u: u64) -> Self {
        DevValue::Number(u.into())
    }
}

impl From<f64> for DevValue {
    /// Non-finite floats become `null`, as in JSON
    fn from(f: f64) -> Self {
        serde_json::Number::from_f64(f)
            .map(DevValue::Number)
            .unwrap_or(DevValue::Null)
    }
}

impl From<&str> for DevValue {
    fn from(s: &str) -> Self {
        DevValue::String(s.to_string())
    }
}

impl From<String> for DevValue {
    fn from(s: String) -> Self {
        DevValue::String(s)
    }
}

/// `None` is "no value"; use `DevValue::Null` for an explicit null.
impl<T: Into<DevValue>> From<Option<T>> for DevValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DevValue::Undefined)
    }
}

impl<T: Into<DevValue>> From<Vec<T>> for DevValue {
    fn from(items: Vec<T>) -> Self {
        DevValue::array(items)
    }
}

impl From<serde_json::Value> for DevValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DevValue::Null,
            serde_json::Value::Bool(b) => DevValue::Bool(b),
            serde_json::Value::Number(n) => DevValue::Number(n),
            serde_json::Value::String(s) => DevValue::String(s),
            serde_json::Value::Array(items) => DevValue::array(items),
            serde_json::Value::Object(map) => DevValue::object(map),
        }
    }
}

impl<K: Into<String>, V: Into<DevValue>> FromIterator<(K, V)> for DevValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        DevValue::object(iter)
    }
}
