//! JSON value types.
//!
//! This module defines the [`Value`] enum, a tagged union over the six JSON
//! data types. A value borrows everything from the [`Arena`] the parse ran
//! in: strings are arena byte slices, arrays are arena slices of child
//! values, and objects reference arena-chained maps.
//!
//! [`Arena`]: crate::Arena

use bstr::BStr;

use crate::object::ObjectMap;

/// A JSON value.
///
/// The tag fully determines which payload is meaningful, and every consumer
/// matches exhaustively. String payloads are length-bearing byte sequences:
/// UTF-8 is assumed but never validated, which is why they are [`BStr`] and
/// not `str`.
///
/// # Examples
///
/// ```
/// use jsonbump::{Arena, parse_slice, Value};
///
/// let arena = Arena::new();
/// let value = parse_slice(b"[1, true, null]", &arena)?;
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0], Value::Number(1.0));
/// assert_eq!(items[1], Value::Boolean(true));
/// assert!(items[2].is_null());
/// # Ok::<(), jsonbump::ParseError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number, always carried as a 64-bit float.
    Number(f64),
    /// A byte string, stored exactly as read (escape pairs included).
    String(&'a BStr),
    /// An ordered sequence of values.
    Array(&'a [Value<'a>]),
    /// A key/value map.
    Object(&'a ObjectMap<'a>),
}

impl Default for Value<'_> {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl<'a> Value<'a> {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
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

    /// The numeric payload, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The raw string bytes, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_bytes(&self) -> Option<&'a BStr> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The string payload as `&str`, if this is a valid-UTF-8
    /// [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::String(s) => std::str::from_utf8(s).ok(),
            _ => None,
        }
    }

    /// The element slice, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&'a [Value<'a>]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The map, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&'a ObjectMap<'a>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }
}

/// Compact single-line rendering.
///
/// String bytes are written verbatim between quotes, matching the parser's
/// raw-copy escape policy; bytes that are not valid UTF-8 come out lossily.
/// Use [`Printer`](crate::Printer) for indented output.
impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for item in *items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, value) in map.iter() {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{key}\":{value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.collect_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in *items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(&key.to_string(), value)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Arena, parse_slice};

    #[test]
    fn compact_display() {
        let arena = Arena::new();
        let value = parse_slice(b"[1.5, \"hi\", {\"a\": null}, true]", &arena).unwrap();
        assert_eq!(value.to_string(), r#"[1.5,"hi",{"a":null},true]"#);
    }

    #[test]
    fn accessors() {
        let arena = Arena::new();
        let value = parse_slice(b"{\"n\": 2, \"s\": \"x\"}", &arena).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get(b"n").and_then(|v| v.as_f64()), Some(2.0));
        assert_eq!(map.get(b"s").and_then(|v| v.as_str()), Some("x"));
        assert!(value.as_array().is_none());
        assert!(!value.is_string());
    }
}
