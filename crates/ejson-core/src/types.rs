//! The EJSON value model.
//!
//! [`Value`] is a closed tagged union over every kind the format can carry.
//! JSON's six kinds are joined by big integers, UTC timestamps, and the
//! one-way literal forms (`Undefined`, `Symbol`, `Function`) that serialize
//! but do not parse back. Trees are acyclic by construction: values own
//! their children and the parser builds every container fresh.

use std::fmt;

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

/// Largest integer magnitude an EJSON `Number` holds exactly: 2^53 - 1.
///
/// Unsuffixed integer literals beyond this bound parse as [`Value::BigInt`]
/// instead of losing precision in an f64.
pub const MAX_SAFE_INTEGER: i64 = (1i64 << 53) - 1;

/// True when `f` is a whole number that an f64 represents exactly.
pub(crate) fn is_safe_integer(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER as f64
}

/// An EJSON document value.
///
/// Mirrors JSON's types and adds the extended kinds. Objects use
/// `Vec<(String, Value)>` to maintain insertion order without depending on
/// `IndexMap`; keys are unique, and a duplicate key assignment during
/// parsing overwrites the value in place so the entry keeps its original
/// position.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `null` literal.
    Null,
    /// The `undefined` literal. Serializes but does not parse back.
    Undefined,
    Bool(bool),
    /// A double-precision float. May be infinite or NaN, which serialize as
    /// the bare literals `Infinity`, `-Infinity`, and `NaN` (one-way forms).
    Number(f64),
    /// An arbitrary-precision integer, written with an `n` suffix: `123n`.
    BigInt(BigInt),
    String(String),
    /// A UTC timestamp with millisecond wire precision, written as a quoted
    /// ISO-8601 instant: `"2024-01-15T10:30:00.000Z"`.
    Date(DateTime<Utc>),
    /// A symbol description. Serializes as `Symbol(desc)`, unquoted; does
    /// not parse back.
    Symbol(String),
    /// Verbatim function source text. Serializes unquoted and unescaped;
    /// does not parse back.
    Function(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// True for `Value::Null` (not `Undefined`).
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Object entries in insertion order.
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object member by key. Returns `None` for non-objects.
    ///
    /// A linear scan; object entries are a small ordered list, not a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(existing, _)| existing == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value as EJSON text, identical to [`stringify`](crate::stringify).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encoder::stringify(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(f64::from(i))
    }
}

impl From<i64> for Value {
    /// Integers beyond the safe f64 range become `BigInt` rather than
    /// silently losing precision.
    fn from(i: i64) -> Self {
        if i.unsigned_abs() <= MAX_SAFE_INTEGER as u64 {
            Value::Number(i as f64)
        } else {
            Value::BigInt(BigInt::from(i))
        }
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(f)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<serde_json::Value> for Value {
    /// Converts plain JSON data into the extended model. Key order is
    /// preserved (serde_json's `preserve_order` feature) and integers
    /// outside the safe f64 range promote to `BigInt`.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => from_json_number(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

fn from_json_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::from(i);
    }
    if let Some(u) = n.as_u64() {
        // Only reached beyond i64::MAX, which is well past the safe range.
        return Value::BigInt(BigInt::from(u));
    }
    Value::Number(n.as_f64().unwrap_or(f64::NAN))
}
