use rmpv::Value as MsgpackValue;

use super::ConversionError;
use crate::core::types::{Record, Value};

fn msgpack_type_name(value: &MsgpackValue) -> &'static str {
    match value {
        MsgpackValue::Nil => "nil",
        MsgpackValue::Boolean(_) => "bool",
        MsgpackValue::Integer(_) => "integer",
        MsgpackValue::F32(_) | MsgpackValue::F64(_) => "float",
        MsgpackValue::String(_) => "string",
        MsgpackValue::Binary(_) => "binary",
        MsgpackValue::Array(_) => "array",
        MsgpackValue::Map(_) => "map",
        MsgpackValue::Ext(_, _) => "ext",
    }
}

impl TryFrom<&MsgpackValue> for Value {
    type Error = ConversionError;

    fn try_from(value: &MsgpackValue) -> Result<Self, Self::Error> {
        let value = match value {
            MsgpackValue::Nil => Value::Null,
            MsgpackValue::Boolean(b) => Value::Bool(*b),
            MsgpackValue::Integer(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond the i64 range wraps
                None => Value::Int(n.as_u64().unwrap_or_default() as i64),
            },
            MsgpackValue::F32(f) => Value::Float(f64::from(*f)),
            MsgpackValue::F64(f) => Value::Float(*f),
            MsgpackValue::String(s) => match s.as_str() {
                Some(s) => Value::String(s.to_string()),
                None => return Err(ConversionError::NonUtf8String),
            },
            MsgpackValue::Binary(bytes) => {
                Value::String(String::from_utf8_lossy(bytes).into_owned())
            }
            MsgpackValue::Array(arr) => {
                Value::Array(arr.iter().map(Value::try_from).collect::<Result<_, _>>()?)
            }
            MsgpackValue::Map(entries) => {
                let mut map = Vec::with_capacity(entries.len());
                for (key, value) in entries {
                    map.push((map_key(key)?, Value::try_from(value)?));
                }
                Value::Map(map)
            }
            MsgpackValue::Ext(_, _) => return Err(ConversionError::Unsupported("ext")),
        };

        Ok(value)
    }
}

fn map_key(key: &MsgpackValue) -> Result<String, ConversionError> {
    match key {
        MsgpackValue::String(s) => s
            .as_str()
            .map(str::to_string)
            .ok_or(ConversionError::NonUtf8String),
        other => Err(ConversionError::NonStringKey(msgpack_type_name(other))),
    }
}

impl Record {
    /// Build a record from one decoded MessagePack value, which must be a
    /// map with string keys. Field order follows the map's own entry order.
    pub fn from_msgpack(value: &MsgpackValue) -> Result<Self, ConversionError> {
        match value {
            MsgpackValue::Map(entries) => {
                let mut record = Record::with_capacity(entries.len());
                for (key, value) in entries {
                    record.set(map_key(key)?, Value::try_from(value)?);
                }
                Ok(record)
            }
            other => Err(ConversionError::NotARecord(msgpack_type_name(other))),
        }
    }
}
