//! Undefined-preserving JSON stringification
//!
//! Plain JSON has no way to say "this property exists but has no value":
//! serializers either drop such properties or write `null`. `stringify`
//! keeps them visible by serializing "no value" as a sentinel string and
//! then unquoting every occurrence of that sentinel into a bare `undefined`.
//!
//! A legitimate string equal to the sentinel is unquoted as well.

use super::error::Result;
use serde::{Serialize, Serializer};

/// Placeholder written in place of "no value" during serialization
pub const UNDEFINED_SENTINEL: &str = "/* void(undefined) */";

/// Token that replaces the quoted sentinel in the output
pub const UNDEFINED_TOKEN: &str = "undefined";

const QUOTED_SENTINEL: &str = "\"/* void(undefined) */\"";

/// Stringify a value as 2-space indented JSON, keeping "no value" entries
///
/// "No value" comes from [`DevValue::Undefined`](crate::DevValue),
/// [`Undefined`](crate::Undefined), or an `Option` field serialized with
/// [`undefined_if_none`]. A bare `Option::None` anywhere else, such as an
/// element of a `Vec` or a value in a `HashMap`, is serialized by serde as
/// `null`, not `undefined`. Errors from the JSON serializer are returned
/// unchanged.
///
/// # Example
///
/// ```
/// use rust_dev_logger::{stringify, DevValue};
///
/// let value = DevValue::object([
///     ("a", DevValue::from(1)),
///     ("b", DevValue::array([DevValue::from(1), DevValue::from(2), DevValue::Undefined])),
/// ]);
///
/// let text = stringify(&value).unwrap();
/// assert!(text.contains("    undefined\n"));
/// ```
pub fn stringify<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(text.replace(QUOTED_SENTINEL, UNDEFINED_TOKEN))
}

/// `serialize_with` helper that writes `None` as "no value" instead of `null`
///
/// # Example
///
/// ```
/// use rust_dev_logger::{stringify, undefined_if_none};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Query {
///     #[serde(rename = "where", serialize_with = "undefined_if_none")]
///     filter: Option<String>,
/// }
///
/// let text = stringify(&Query { filter: None }).unwrap();
/// assert_eq!(text, "{\n  \"where\": undefined\n}");
/// ```
pub fn undefined_if_none<T, S>(value: &Option<T>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str(UNDEFINED_SENTINEL),
    }
}
