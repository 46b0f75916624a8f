mod coerce;
mod columns;
mod error;
mod time;
mod transport;

pub use coerce::Coercer;
pub use columns::ColumnMapper;
pub use error::{Error, RecordCause, RecordError, Result};
pub use time::{parse_time_value, TimeResolver};

use std::io::Read;

use crate::config::{Format, ReaderConfig};
use crate::core::decode::{self, RowData, RowOutcome};
use crate::core::types::{Record, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records delivered to the sink.
    pub records: usize,
    /// Rows routed to the error handler instead.
    pub skipped: usize,
}

impl ParseReport {
    pub fn merge(&mut self, other: ParseReport) {
        self.records += other.records;
        self.skipped += other.skipped;
    }
}

/// The format-agnostic streaming reader. Owns a frozen configuration and
/// drives transport wrapping, decoding, column mapping, coercion, and time
/// resolution for one input stream per `parse` call.
pub struct FileReader {
    config: ReaderConfig,
}

impl FileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Runs the whole stream through the pipeline. Each successfully
    /// normalized record goes to `sink` in input order; each bad row goes
    /// to `on_error` and the stream continues. A sink failure or a
    /// stream-level decode failure aborts the run.
    pub fn parse<R, E, S>(&self, input: R, mut on_error: E, mut sink: S) -> Result<ParseReport>
    where
        R: Read,
        E: FnMut(&RecordError),
        S: FnMut(Record) -> std::io::Result<()>,
    {
        let input = transport::wrap(input, &self.config);
        let mut decoder = decode::from_config(input, &self.config);

        let mut mapper = match &self.config.format {
            Format::Text { .. } => Some(ColumnMapper::from_config(&self.config)?),
            _ => None,
        };
        let coercer = Coercer::from_config(&self.config.classifiers);
        let resolver = TimeResolver::from_config(&self.config);

        let mut report = ParseReport::default();

        while let Some(outcome) = decoder.next_row()? {
            let row = match outcome {
                RowOutcome::Row(row) => row,
                RowOutcome::Skip(err) => {
                    report.skipped += 1;
                    on_error(&err);
                    continue;
                }
            };

            let mut record = match row.data {
                RowData::Tokens(tokens) => {
                    let named = match mapper.as_mut() {
                        Some(mapper) => mapper.map(tokens),
                        None => unreachable!("token rows only come from the text decoder"),
                    };
                    let Some(named) = named else {
                        // Header row consumed, nothing to emit.
                        continue;
                    };

                    let mut record = Record::with_capacity(named.len() + 1);
                    for (name, token) in named {
                        let value = match &coercer {
                            Some(coercer) => coercer.coerce(token),
                            None => Value::String(token),
                        };
                        record.set(name, value);
                    }
                    record
                }
                RowData::Fields(record) => record,
            };

            match resolver.resolve(&record) {
                Ok(epoch) => {
                    record.set_time(epoch);
                    sink(record)?;
                    report.records += 1;
                }
                Err(cause) => {
                    report.skipped += 1;
                    on_error(&RecordError::new(row.index, row.raw, cause));
                }
            }
        }

        Ok(report)
    }
}
