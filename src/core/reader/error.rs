use miette::Diagnostic;
use thiserror::Error;

use crate::core::types::ConversionError;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] crate::config::Error),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] crate::core::decode::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure context for one skipped row. Delivered to the caller-supplied
/// error handler; never aborts the stream on its own.
#[derive(Debug, Error, Diagnostic)]
#[error("row {row} skipped: {cause}")]
pub struct RecordError {
    pub row: usize,
    pub raw: String,
    #[source]
    pub cause: RecordCause,
}

impl RecordError {
    pub fn new(row: usize, raw: impl Into<String>, cause: impl Into<RecordCause>) -> Self {
        Self {
            row,
            raw: raw.into(),
            cause: cause.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RecordCause {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("time column '{0}' is missing")]
    MissingTimeColumn(String),
    #[error("cannot parse time value '{value}' in column '{column}'")]
    InvalidTime { column: String, value: String },
    #[error("record time {0} is negative")]
    NegativeTime(i64),
}
