pub mod error;
pub mod format;

pub use error::{Error, Result};
pub use format::{Format, FormatTemplate};

use regex::Regex;

use crate::core::reader::parse_time_value;

pub const DEFAULT_NULL_PATTERN: &str = "^$";
pub const DEFAULT_TRUE_PATTERN: &str = "(?i)^true$";
pub const DEFAULT_FALSE_PATTERN: &str = "(?i)^false$";

/// Collected flag values, exactly as the option parser saw them. Mutable
/// while flags are being gathered; `build` validates everything once and
/// freezes the result. Repeated flags keep the last value seen.
#[derive(Debug, Clone, Default)]
pub struct ReaderOptions {
    pub format: Option<String>,
    pub columns: Option<String>,
    pub column_header: bool,
    pub delimiter: Option<String>,
    pub null_pattern: Option<String>,
    pub true_pattern: Option<String>,
    pub false_pattern: Option<String>,
    pub all_string: bool,
    pub time_column: Option<String>,
    pub time_format: Option<String>,
    pub time_value: Option<String>,
    pub encoding: Option<String>,
    pub compress: Option<String>,
}

/// Validated configuration. Immutable once constructed; the pipeline only
/// ever reads it.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub format: Format,
    pub columns: ColumnSource,
    pub classifiers: ClassifierPatterns,
    pub time: TimeSource,
    pub encoding: Option<&'static encoding_rs::Encoding>,
    pub compression: Compression,
}

#[derive(Debug, Clone)]
pub enum ColumnSource {
    /// Explicit name list; wins over `Header` when both are given.
    Names(Vec<String>),
    /// Consume the first decoded row as the header.
    Header,
    None,
}

#[derive(Debug, Clone)]
pub struct ClassifierPatterns {
    pub null_expr: Regex,
    pub true_expr: Regex,
    pub false_expr: Regex,
    pub all_string: bool,
}

#[derive(Debug, Clone)]
pub enum TimeSource {
    /// Fixed value for every record; wins over `Column` when both are given.
    Value(i64),
    Column {
        name: String,
        format: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
}

impl ReaderOptions {
    pub fn build(self) -> Result<ReaderConfig> {
        let template = match &self.format {
            Some(name) => name.parse::<FormatTemplate>()?,
            None => return Err(Error::MissingFormat),
        };

        let format = match template {
            FormatTemplate::Json => Format::Json,
            FormatTemplate::Msgpack => Format::Msgpack,
            FormatTemplate::Csv | FormatTemplate::Tsv => {
                let pattern = match &self.delimiter {
                    Some(pattern) => pattern.as_str(),
                    None => match template.default_delimiter() {
                        Some(pattern) => pattern,
                        None => unreachable!("text templates always carry a default delimiter"),
                    },
                };
                Format::Text {
                    delimiter: compile_pattern("delimiter", pattern)?,
                }
            }
        };

        let columns = if let Some(names) = &self.columns {
            ColumnSource::Names(names.split(',').map(str::to_string).collect())
        } else if self.column_header {
            ColumnSource::Header
        } else {
            ColumnSource::None
        };

        if format.is_text() && matches!(columns, ColumnSource::None) {
            return Err(Error::MissingColumnSource);
        }

        let classifiers = ClassifierPatterns {
            null_expr: compile_pattern(
                "null",
                self.null_pattern.as_deref().unwrap_or(DEFAULT_NULL_PATTERN),
            )?,
            true_expr: compile_pattern(
                "true",
                self.true_pattern.as_deref().unwrap_or(DEFAULT_TRUE_PATTERN),
            )?,
            false_expr: compile_pattern(
                "false",
                self.false_pattern
                    .as_deref()
                    .unwrap_or(DEFAULT_FALSE_PATTERN),
            )?,
            all_string: self.all_string,
        };

        let time = if let Some(value) = &self.time_value {
            let epoch =
                parse_time_value(value).ok_or_else(|| Error::InvalidTimeValue(value.clone()))?;
            if epoch < 0 {
                return Err(Error::NegativeTimeValue(epoch));
            }
            TimeSource::Value(epoch)
        } else if let Some(name) = &self.time_column {
            TimeSource::Column {
                name: name.clone(),
                format: self.time_format.clone(),
            }
        } else {
            return Err(Error::MissingTimeSource);
        };

        let encoding = match &self.encoding {
            Some(label) => Some(
                encoding_rs::Encoding::for_label(label.as_bytes())
                    .ok_or_else(|| Error::UnknownEncoding(label.clone()))?,
            ),
            None => None,
        };

        let compression = match self.compress.as_deref() {
            None | Some("none") => Compression::None,
            Some("gzip") | Some("gz") => Compression::Gzip,
            Some(other) => return Err(Error::UnknownCompression(other.to_string())),
        };

        Ok(ReaderConfig {
            format,
            columns,
            classifiers,
            time,
            encoding,
            compression,
        })
    }
}

fn compile_pattern(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        name,
        pattern: pattern.to_string(),
        source,
    })
}
