use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::ReaderOptions;
use crate::core::outbound::OutputFormat;

/// `-h` belongs to `--columns`, so the built-in help flag is long-only.
#[derive(Debug, Parser)]
#[command(
    name = "funnel",
    version,
    about = "Normalize delimited text, JSON lines, and MessagePack streams into timestamped records",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Input format template (csv, tsv, json, msgpack)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Comma-separated column names for delimited text input
    #[arg(short = 'h', long, value_name = "NAMES")]
    pub columns: Option<String>,

    /// Use the first row of the input as the column header
    #[arg(short = 'H', long)]
    pub column_header: bool,

    /// Delimiter pattern (a regular expression) for text formats
    #[arg(short = 'd', long, value_name = "PATTERN")]
    pub delimiter: Option<String>,

    /// Pattern classifying a token as a null value
    #[arg(long = "null", value_name = "PATTERN")]
    pub null_pattern: Option<String>,

    /// Pattern classifying a token as boolean true
    #[arg(long = "true", value_name = "PATTERN")]
    pub true_pattern: Option<String>,

    /// Pattern classifying a token as boolean false
    #[arg(long = "false", value_name = "PATTERN")]
    pub false_pattern: Option<String>,

    /// Keep every text value as a string (disable type coercion)
    #[arg(short = 'S', long)]
    pub all_string: bool,

    /// Name of the column the record time is derived from
    #[arg(short = 't', long, value_name = "NAME")]
    pub time_column: Option<String>,

    /// strftime(3) format of the time column
    #[arg(short = 'T', long, value_name = "FMT")]
    pub time_format: Option<String>,

    /// Fixed time value for every record (epoch seconds or a date string)
    #[arg(long, value_name = "VALUE")]
    pub time_value: Option<String>,

    /// Text encoding of the source stream
    #[arg(short = 'e', long, value_name = "ENC")]
    pub encoding: Option<String>,

    /// Compression wrapper to strip before decoding (gzip)
    #[arg(short = 'C', long, value_name = "FORMAT")]
    pub compress: Option<String>,

    /// Write records to this path instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output encoding for normalized records
    #[arg(long, value_enum, value_name = "FORMAT", default_value = "jsonl")]
    pub output_format: OutputFormat,

    /// Verbose (debug level) logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Input files, read in order; stdin when none are given
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn reader_options(&self) -> ReaderOptions {
        ReaderOptions {
            format: self.format.clone(),
            columns: self.columns.clone(),
            column_header: self.column_header,
            delimiter: self.delimiter.clone(),
            null_pattern: self.null_pattern.clone(),
            true_pattern: self.true_pattern.clone(),
            false_pattern: self.false_pattern.clone(),
            all_string: self.all_string,
            time_column: self.time_column.clone(),
            time_format: self.time_format.clone(),
            time_value: self.time_value.clone(),
            encoding: self.encoding.clone(),
            compress: self.compress.clone(),
        }
    }
}
