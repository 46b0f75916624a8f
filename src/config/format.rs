use std::fmt::Display;
use std::str::FromStr;

use regex::Regex;

/// Named preset selecting the decoder and the default text-parsing behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTemplate {
    Csv,
    Tsv,
    Json,
    Msgpack,
}

impl FormatTemplate {
    pub fn is_text(&self) -> bool {
        matches!(self, FormatTemplate::Csv | FormatTemplate::Tsv)
    }

    pub fn default_delimiter(&self) -> Option<&'static str> {
        match self {
            FormatTemplate::Csv => Some(","),
            FormatTemplate::Tsv => Some("\t"),
            FormatTemplate::Json | FormatTemplate::Msgpack => None,
        }
    }
}

impl FromStr for FormatTemplate {
    type Err = super::Error;

    fn from_str(s: &str) -> super::Result<Self> {
        match s {
            "csv" => Ok(FormatTemplate::Csv),
            "tsv" => Ok(FormatTemplate::Tsv),
            "json" => Ok(FormatTemplate::Json),
            "msgpack" => Ok(FormatTemplate::Msgpack),
            other => Err(super::Error::UnknownFormat(other.to_string())),
        }
    }
}

impl Display for FormatTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatTemplate::Csv => write!(f, "csv"),
            FormatTemplate::Tsv => write!(f, "tsv"),
            FormatTemplate::Json => write!(f, "json"),
            FormatTemplate::Msgpack => write!(f, "msgpack"),
        }
    }
}

/// Frozen decoder selection. Templates collapse to one variant per decoder,
/// with the delimiter already compiled for the text variant.
#[derive(Debug, Clone)]
pub enum Format {
    Text { delimiter: Regex },
    Json,
    Msgpack,
}

impl Format {
    pub fn is_text(&self) -> bool {
        matches!(self, Format::Text { .. })
    }
}
