use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Value of a single service option.
///
/// Options are loosely typed on the wire, so this mirrors the JSON data
/// model. No schema is enforced: callers ask for the shape they expect with
/// one of the `as_*` accessors and get `None` when the tag doesn't match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum OptionValue {
    /// Explicit `null`, or a missing value
    #[default]
    Null,
    Bool(bool),
    /// Integer or float, kept as the original JSON number
    Number(Number),
    String(String),
    Array(Vec<OptionValue>),
    Object(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            OptionValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[OptionValue]> {
        match self {
            OptionValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// Converts back into a plain JSON value.
    pub fn to_json(&self) -> Value {
        Value::from(self.clone())
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => OptionValue::Null,
            Value::Bool(b) => OptionValue::Bool(b),
            Value::Number(n) => OptionValue::Number(n),
            Value::String(s) => OptionValue::String(s),
            Value::Array(items) => {
                OptionValue::Array(items.into_iter().map(OptionValue::from).collect())
            }
            Value::Object(map) => OptionValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, OptionValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<OptionValue> for Value {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Null => Value::Null,
            OptionValue::Bool(b) => Value::Bool(b),
            OptionValue::Number(n) => Value::Number(n),
            OptionValue::String(s) => Value::String(s),
            OptionValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            OptionValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(Number::from(value))
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(OptionValue::Number)
            .unwrap_or(OptionValue::Null)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => write!(f, "{s}"),
            other => write!(f, "{}", other.to_json()),
        }
    }
}
