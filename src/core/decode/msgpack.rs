use std::io::{ErrorKind, Read};

use rmpv::decode::{read_value, Error as ValueError};

use super::{Decode, Error, RawRow, Result, RowData, RowOutcome};
use crate::core::reader::RecordError;
use crate::core::types::Record;

/// Reads a concatenated sequence of MessagePack values straight off the
/// byte stream; there is no line framing.
pub struct MsgpackDecoder<R> {
    input: R,
    row: usize,
}

impl<R> MsgpackDecoder<R>
where
    R: Read,
{
    pub fn new(input: R) -> Self {
        Self { input, row: 0 }
    }
}

impl<R> Decode for MsgpackDecoder<R>
where
    R: Read,
{
    fn next_row(&mut self) -> Result<Option<RowOutcome>> {
        let value = match read_value(&mut self.input) {
            Ok(value) => value,
            // EOF on a value boundary ends the stream; EOF inside a value
            // is a truncated frame.
            Err(ValueError::InvalidMarkerRead(err)) if err.kind() == ErrorKind::UnexpectedEof => {
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::Truncated {
                    row: self.row + 1,
                    source,
                });
            }
        };

        self.row += 1;
        let outcome = match Record::from_msgpack(&value) {
            Ok(record) => RowOutcome::Row(RawRow {
                index: self.row,
                raw: value.to_string(),
                data: RowData::Fields(record),
            }),
            Err(cause) => RowOutcome::Skip(RecordError::new(self.row, value.to_string(), cause)),
        };

        Ok(Some(outcome))
    }
}
