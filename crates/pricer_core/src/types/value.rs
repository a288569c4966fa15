//! Opaque pass-through values.
//!
//! Trades such as swaptions and caps carry free-form payloads, and market
//! snapshots hold curves and surfaces whose shape only the pricing backend
//! understands. [`Value`] is the sum type for those payloads; the adapter
//! never inspects them beyond handing them to a backend.
//!
//! `Value` deserialises untagged, so a JSON or TOML document maps onto it
//! directly:
//!
//! ```
//! use pricer_core::types::Value;
//!
//! let v: Value = serde_json::from_str(r#"{"notional": 5000000, "annuity": 4.1}"#).unwrap();
//! assert_eq!(v.get("notional"), Some(&Value::Int(5_000_000)));
//! assert_eq!(v.get("annuity"), Some(&Value::Float(4.1)));
//! ```

use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::PricingError;

/// String-keyed mapping of opaque values.
pub type Payload = BTreeMap<String, Value>;

/// Opaque value carried by trade payloads and market data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent / null value
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Text
    Str(String),
    /// Ordered sequence
    List(Vec<Value>),
    /// Nested mapping
    Map(Payload),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns the nested mapping, if this value is one.
    pub fn as_map(&self) -> Option<&Payload> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in a mapping value.
    ///
    /// Non-mapping values have no fields and always return `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Reads `key` as `f64`, falling back to `default` when the field is absent.
    ///
    /// A field that is present but not numeric is an error, and so is reading
    /// a field from anything other than a mapping.
    ///
    /// ```
    /// use pricer_core::payload;
    /// use pricer_core::types::Value;
    ///
    /// let curve = Value::from(payload! { "par_rate" => 0.03, "name" => "ois" });
    /// assert_eq!(curve.number_or("par_rate", 0.0).unwrap(), 0.03);
    /// assert_eq!(curve.number_or("forward", 0.05).unwrap(), 0.05);
    /// assert!(curve.number_or("name", 0.0).is_err());
    /// assert!(Value::Float(0.03).number_or("par_rate", 0.0).is_err());
    /// ```
    pub fn number_or(&self, key: &str, default: f64) -> Result<f64, PricingError> {
        match self.as_map() {
            Some(map) => number_or(Some(map), key, default),
            None => Err(PricingError::invalid_input(format!(
                "cannot read field '{}' from a {}, expected a map",
                key,
                self.type_name()
            ))),
        }
    }
}

/// Reads `key` from an optional mapping as `f64`, defaulting when absent.
pub fn number_or(map: Option<&Payload>, key: &str, default: f64) -> Result<f64, PricingError> {
    match map.and_then(|m| m.get(key)) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.to_f64().ok_or_else(|| {
            PricingError::invalid_input(format!(
                "field '{}' is not numeric ({})",
                key,
                value.type_name()
            ))
        }),
    }
}

impl ToPrimitive for Value {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => f.to_i64(),
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Str(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|i| i.to_u64())
    }

    /// Numeric coercion: numbers and booleans convert, numeric text parses,
    /// everything else is non-numeric.
    fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => f64::from_i64(*i),
            Value::Float(f) => Some(*f),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Payload> for Value {
    fn from(v: Payload) -> Self {
        Value::Map(v)
    }
}

/// Builds a [`Payload`] from `key => value` pairs.
///
/// ```
/// use pricer_core::payload;
/// use pricer_core::types::Value;
///
/// let cap = payload! { "type" => "cap", "strike" => 0.03, "notional" => 2_000_000 };
/// assert_eq!(cap["notional"], Value::Int(2_000_000));
/// assert_eq!(payload! {}.len(), 0);
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::types::Payload::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::types::Payload::new();
        $(
            map.insert(
                ::std::string::String::from($key),
                $crate::types::Value::from($value),
            );
        )+
        map
    }};
}
