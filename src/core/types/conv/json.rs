use serde_json::Value as JsonValue;

use super::ConversionError;
use crate::core::types::{Record, Value};

fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    // u64 beyond the i64 range wraps
                    Value::Int(n.as_u64().unwrap_or_default() as i64)
                }
            }
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Record {
    /// Build a record from one decoded JSON value, which must be an object.
    /// Field order follows the object's own key order.
    pub fn from_json(json: &JsonValue) -> Result<Self, ConversionError> {
        match json {
            JsonValue::Object(map) => Ok(map
                .iter()
                .map(|(key, value)| (key.clone(), Value::from(value)))
                .collect()),
            other => Err(ConversionError::NotARecord(json_type_name(other))),
        }
    }
}
