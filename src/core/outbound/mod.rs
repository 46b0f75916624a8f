use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::core::types::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Jsonl,
    /// A concatenated stream of MessagePack maps
    Msgpack,
}

/// Writes normalized records to a file or stdout, in the shape the upload
/// side consumes.
pub struct RecordWriter {
    output: io::BufWriter<Box<dyn Write>>,
    format: OutputFormat,
}

impl RecordWriter {
    pub fn create(path: Option<&Path>, format: OutputFormat) -> io::Result<Self> {
        let output: Box<dyn Write> = match path {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };

        Ok(Self {
            output: io::BufWriter::new(output),
            format,
        })
    }

    pub fn write(&mut self, record: &Record) -> io::Result<()> {
        match self.format {
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut self.output, record)?;
                self.output.write_all(b"\n")
            }
            OutputFormat::Msgpack => {
                rmp_serde::encode::write(&mut self.output, record).map_err(io::Error::other)
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;

    fn sample_record() -> Record {
        let mut record = Record::new();
        record.set("name", Value::String("k".to_string()));
        record.set("num", Value::Int(12345));
        record.set_time(1700000000);
        record
    }

    #[test]
    fn test_jsonl_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let mut writer = RecordWriter::create(Some(&path), OutputFormat::Jsonl).unwrap();
        writer.write(&sample_record()).unwrap();
        writer.write(&sample_record()).unwrap();
        writer.flush().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let expected = r#"{"name":"k","num":12345,"time":1700000000}"#;
        assert_eq!(written, format!("{expected}\n{expected}\n"));
    }

    #[test]
    fn test_msgpack_output_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.msgpack");

        let mut writer = RecordWriter::create(Some(&path), OutputFormat::Msgpack).unwrap();
        writer.write(&sample_record()).unwrap();
        writer.flush().unwrap();

        let written = std::fs::read(&path).unwrap();
        let value = rmpv::decode::read_value(&mut written.as_slice()).unwrap();
        let record = Record::from_msgpack(&value).unwrap();

        assert_eq!(record, sample_record());
    }
}
