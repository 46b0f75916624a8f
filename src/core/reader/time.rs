use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::error::RecordCause;
use crate::config::{ReaderConfig, TimeSource};
use crate::core::types::{Record, Value};

/// Computes the mandatory `time` field for each record, either from the
/// configured fixed value or by parsing the configured source column.
pub struct TimeResolver {
    source: TimeSource,
}

impl TimeResolver {
    pub fn from_config(cfg: &ReaderConfig) -> Self {
        Self {
            source: cfg.time.clone(),
        }
    }

    pub fn resolve(&self, record: &Record) -> Result<i64, RecordCause> {
        let epoch = match &self.source {
            TimeSource::Value(epoch) => *epoch,
            TimeSource::Column { name, format } => {
                let value = record
                    .get(name)
                    .ok_or_else(|| RecordCause::MissingTimeColumn(name.clone()))?;

                match value {
                    Value::Int(epoch) => *epoch,
                    Value::Float(epoch) => *epoch as i64,
                    Value::String(text) => {
                        let parsed = match format {
                            Some(format) => parse_formatted(text, format),
                            None => parse_datetime(text),
                        };
                        parsed.ok_or_else(|| RecordCause::InvalidTime {
                            column: name.clone(),
                            value: text.clone(),
                        })?
                    }
                    other => {
                        return Err(RecordCause::InvalidTime {
                            column: name.clone(),
                            value: other.to_string(),
                        });
                    }
                }
            }
        };

        if epoch < 0 {
            return Err(RecordCause::NegativeTime(epoch));
        }

        Ok(epoch)
    }
}

/// Fixed `--time-value` input: an epoch integer or a date-time string.
pub fn parse_time_value(value: &str) -> Option<i64> {
    if let Ok(epoch) = value.parse::<i64>() {
        return Some(epoch);
    }
    parse_datetime(value)
}

/// strftime-style parse. Tries a zone-aware parse first, then a naive
/// date-time taken as UTC, then a bare date at midnight UTC.
fn parse_formatted(value: &str, format: &str) -> Option<i64> {
    if let Ok(datetime) = DateTime::parse_from_str(value, format) {
        return Some(datetime.timestamp());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
        return Some(datetime.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, format) {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}

const FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

const FORMATS_WITH_TZ: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y/%m/%d %H:%M:%S%.f %z",
    "%Y/%m/%d %H:%M:%S %z",
];

/// General date-time parse: epoch digits, RFC 3339, RFC 2822, then the
/// common layouts above. Naive values are taken as UTC.
pub fn parse_datetime(value: &str) -> Option<i64> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value.parse::<i64>().ok();
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.timestamp());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(value) {
        return Some(datetime.timestamp());
    }

    for format in FORMATS.iter() {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.and_utc().timestamp());
        }
    }

    for format in FORMATS_WITH_TZ.iter() {
        if let Ok(datetime) = DateTime::parse_from_str(value, format) {
            return Some(datetime.timestamp());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }

    None
}
