use std::fmt::Display;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

pub const VALUE_TYPE_NULL: &str = "null";
pub const VALUE_TYPE_STRING: &str = "string";
pub const VALUE_TYPE_INT: &str = "int";
pub const VALUE_TYPE_FLOAT: &str = "float";
pub const VALUE_TYPE_BOOL: &str = "bool";
pub const VALUE_TYPE_MAP: &str = "map";
pub const VALUE_TYPE_ARRAY: &str = "array";

/// A single field value. Structured-format input passes through unchanged,
/// so nested arrays and maps are representable; maps keep insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => VALUE_TYPE_NULL,
            Value::Bool(_) => VALUE_TYPE_BOOL,
            Value::Int(_) => VALUE_TYPE_INT,
            Value::Float(_) => VALUE_TYPE_FLOAT,
            Value::String(_) => VALUE_TYPE_STRING,
            Value::Array(_) => VALUE_TYPE_ARRAY,
            Value::Map(_) => VALUE_TYPE_MAP,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Bool(boolean)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Value::String(string)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Value::String(string.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(array: Vec<Value>) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(map: Vec<(String, Value)>) -> Self {
        Value::Map(map)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(boolean) => write!(f, "{}", boolean),
            Value::Int(number) => write!(f, "{}", number),
            Value::Float(number) => write!(f, "{}", number),
            Value::String(string) => write!(f, "{}", string),
            Value::Array(array) => {
                let array_str = array
                    .iter()
                    .map(|value| format!("{}", value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{}]", array_str)
            }
            Value::Map(map) => {
                let map_str = map
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{}}}", map_str)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(boolean) => serializer.serialize_bool(*boolean),
            Value::Int(number) => serializer.serialize_i64(*number),
            Value::Float(number) => serializer.serialize_f64(*number),
            Value::String(string) => serializer.serialize_str(string),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for value in array {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), VALUE_TYPE_NULL);
        assert_eq!(Value::Bool(true).type_name(), VALUE_TYPE_BOOL);
        assert_eq!(Value::Int(1).type_name(), VALUE_TYPE_INT);
        assert_eq!(Value::Float(1.5).type_name(), VALUE_TYPE_FLOAT);
        assert_eq!(Value::String("x".into()).type_name(), VALUE_TYPE_STRING);
        assert_eq!(Value::Array(vec![]).type_name(), VALUE_TYPE_ARRAY);
        assert_eq!(Value::Map(vec![]).type_name(), VALUE_TYPE_MAP);
    }

    #[test]
    fn test_serialize_to_json() {
        let value = Value::Map(vec![
            ("name".to_string(), Value::String("k".to_string())),
            ("num".to_string(), Value::Int(12345)),
            ("flag".to_string(), Value::Bool(true)),
            ("none".to_string(), Value::Null),
            (
                "nested".to_string(),
                Value::Array(vec![Value::Int(1), Value::Float(2.5)]),
            ),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(
            json,
            r#"{"name":"k","num":12345,"flag":true,"none":null,"nested":[1,2.5]}"#
        );
    }

    #[test]
    fn test_display() {
        let value = Value::Map(vec![
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Array(vec![Value::Bool(false)])),
        ]);
        assert_eq!(value.to_string(), "{a: 1, b: [false]}");
    }
}
