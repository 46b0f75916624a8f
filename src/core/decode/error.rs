use miette::Diagnostic;
use thiserror::Error;

/// Stream-level failures. Anything surfacing here aborts the whole parse;
/// row-level problems travel as `RecordError` instead.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Truncated MessagePack value at record {row}")]
    Truncated {
        row: usize,
        #[source]
        source: rmpv::decode::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
