// Field values and numeric bound values

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A number used as a validation bound.
///
/// Integral values keep their integer representation so that serialized
/// client rules carry `5` rather than `5.0` or `"5"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

impl Numeric {
    /// Parse a numeric string such as `"5"`, `" -2 "` or `"3.14e2"`.
    ///
    /// Returns `None` for anything that is not a finite number.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Some(Numeric::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Numeric::Float(f)),
            _ => None,
        }
    }

    /// Value as `f64` for comparisons.
    pub fn as_f64(self) -> f64 {
        match self {
            Numeric::Int(i) => i as f64,
            Numeric::Float(f) => f,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Numeric::Int(_) => true,
            Numeric::Float(f) => f.is_finite(),
        }
    }

    /// Numeric ordering. Two integers compare exactly; any pair involving
    /// a float compares as `f64`. `None` when a float is NaN.
    pub fn compare(self, other: Numeric) -> Option<Ordering> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(i) => write!(f, "{}", i),
            Numeric::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Int(value.into())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

impl From<Numeric> for serde_json::Value {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Int(i) => serde_json::Value::from(i),
            Numeric::Float(f) => serde_json::Value::from(f),
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Int(i) => serializer.serialize_i64(*i),
            Numeric::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumericVisitor;

        impl Visitor<'_> for NumericVisitor {
            type Value = Numeric;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Numeric, E> {
                Ok(Numeric::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Numeric, E> {
                Ok(i64::try_from(v)
                    .map(Numeric::Int)
                    .unwrap_or(Numeric::Float(v as f64)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Numeric, E> {
                Ok(Numeric::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Numeric, E> {
                Numeric::parse(v)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

/// A dynamically typed value read from a subject's field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
    /// An object; `display` is its string conversion, if it has one.
    Object { display: Option<String> },
}

impl FieldValue {
    /// An object that can be converted to a string.
    pub fn object(display: impl Into<String>) -> Self {
        FieldValue::Object {
            display: Some(display.into()),
        }
    }

    /// An object with no string conversion.
    pub fn opaque() -> Self {
        FieldValue::Object { display: None }
    }

    /// Values that can never be interpreted as a number: collections,
    /// booleans and objects without a string conversion.
    pub fn is_not_number(&self) -> bool {
        matches!(
            self,
            FieldValue::Bool(_)
                | FieldValue::List(_)
                | FieldValue::Map(_)
                | FieldValue::Object { display: None }
        )
    }

    /// Null, the empty string and empty collections count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::String(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// String form matched against the integer/number patterns.
    ///
    /// Whitespace and signs are left in place; the patterns accept them.
    pub fn normalized(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::String(s) => s.clone(),
            FieldValue::Object { display: Some(s) } => s.clone(),
            FieldValue::Bool(b) => if *b { "1" } else { "" }.to_string(),
            FieldValue::List(_) | FieldValue::Map(_) | FieldValue::Object { display: None } => {
                String::new()
            }
        }
    }

    /// Numeric coercion used for bound comparisons. Integers stay exact.
    pub fn to_numeric(&self) -> Option<Numeric> {
        match self {
            FieldValue::Int(i) => Some(Numeric::Int(*i)),
            FieldValue::Float(f) if f.is_finite() => Some(Numeric::Float(*f)),
            FieldValue::String(s) | FieldValue::Object { display: Some(s) } => Numeric::parse(s),
            _ => None,
        }
    }

    /// [`to_numeric`](Self::to_numeric) as `f64`.
    pub fn to_number(&self) -> Option<f64> {
        self.to_numeric().map(Numeric::as_f64)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(_) => f.write_str("array"),
            FieldValue::Map(_) => f.write_str("map"),
            FieldValue::Object { display } => f.write_str(display.as_deref().unwrap_or("object")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => FieldValue::String(s),
            Value::Array(items) => FieldValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                FieldValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}
