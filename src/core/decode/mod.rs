mod error;
mod json;
mod msgpack;
mod text;

pub use error::{Error, Result};
pub use json::JsonDecoder;
pub use msgpack::MsgpackDecoder;
pub use text::TextDecoder;

use std::io::BufRead;

use crate::config::{Format, ReaderConfig};
use crate::core::reader::RecordError;
use crate::core::types::Record;

/// Decoder output before column naming and coercion.
#[derive(Debug)]
pub struct RawRow {
    /// 1-based row number within the stream.
    pub index: usize,
    /// Source rendering of the row, kept for error context.
    pub raw: String,
    pub data: RowData,
}

#[derive(Debug)]
pub enum RowData {
    /// Delimited text tokens, still unnamed.
    Tokens(Vec<String>),
    /// Structured-format fields, already named.
    Fields(Record),
}

/// One step of the lazy row sequence. A malformed row comes back as `Skip`
/// so the driver can report it and keep going.
#[derive(Debug)]
pub enum RowOutcome {
    Row(RawRow),
    Skip(RecordError),
}

pub trait Decode {
    /// `Ok(None)` is clean end of stream; `Err` is an unrecoverable
    /// stream failure.
    fn next_row(&mut self) -> Result<Option<RowOutcome>>;
}

pub fn from_config<'a>(input: Box<dyn BufRead + 'a>, cfg: &ReaderConfig) -> Box<dyn Decode + 'a> {
    match &cfg.format {
        Format::Text { delimiter } => Box::new(TextDecoder::new(input, delimiter.clone())),
        Format::Json => Box::new(JsonDecoder::new(input)),
        Format::Msgpack => Box::new(MsgpackDecoder::new(input)),
    }
}
