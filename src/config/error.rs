use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("--format option is required")]
    MissingFormat,
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("--column-header or --columns option is required for delimited text input")]
    MissingColumnSource,
    #[error("--time-column or --time-value option is required")]
    MissingTimeSource,
    #[error("Invalid {name} pattern: {pattern}")]
    InvalidPattern {
        name: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid time value: {0}")]
    InvalidTimeValue(String),
    #[error("Negative time value: {0}")]
    NegativeTimeValue(i64),
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
    #[error("Unknown compression format: {0}")]
    UnknownCompression(String),
}

pub type Result<T> = std::result::Result<T, Error>;
