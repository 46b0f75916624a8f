use std::io::BufRead;

use super::{Decode, RawRow, Result, RowData, RowOutcome};
use crate::core::reader::RecordError;
use crate::core::types::Record;

pub struct JsonDecoder<R> {
    input: R,
    row: usize,
    line: String,
}

impl<R> JsonDecoder<R>
where
    R: BufRead,
{
    pub fn new(input: R) -> Self {
        Self {
            input,
            row: 0,
            line: String::new(),
        }
    }
}

impl<R> Decode for JsonDecoder<R>
where
    R: BufRead,
{
    fn next_row(&mut self) -> Result<Option<RowOutcome>> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }
            self.row += 1;

            // Each line is one JSON value; a bad line never poisons the rest
            // of the stream.
            let outcome = match serde_json::from_str::<serde_json::Value>(line) {
                Ok(value) => match Record::from_json(&value) {
                    Ok(record) => RowOutcome::Row(RawRow {
                        index: self.row,
                        raw: line.to_string(),
                        data: RowData::Fields(record),
                    }),
                    Err(cause) => RowOutcome::Skip(RecordError::new(self.row, line, cause)),
                },
                Err(cause) => RowOutcome::Skip(RecordError::new(self.row, line, cause)),
            };

            return Ok(Some(outcome));
        }
    }
}
