mod json;
mod msgpack;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Expected a map-shaped record, got {0}")]
    NotARecord(&'static str),
    #[error("Map key is not a string, got {0}")]
    NonStringKey(&'static str),
    #[error("String field is not valid UTF-8")]
    NonUtf8String,
    #[error("Unsupported MessagePack type: {0}")]
    Unsupported(&'static str),
}
