use crate::config::{ColumnSource, ReaderConfig};

/// Assigns field names to delimited-text tokens, either from the explicit
/// name list or from a header row consumed off the front of the stream.
pub struct ColumnMapper {
    names: Option<Vec<String>>,
}

impl ColumnMapper {
    pub fn from_config(cfg: &ReaderConfig) -> crate::config::Result<Self> {
        match &cfg.columns {
            ColumnSource::Names(names) => Ok(Self {
                names: Some(names.clone()),
            }),
            ColumnSource::Header => Ok(Self { names: None }),
            ColumnSource::None => Err(crate::config::Error::MissingColumnSource),
        }
    }

    /// Zips names to tokens in order. Extra tokens are dropped and a short
    /// row simply omits the trailing names. Returns `None` when the row was
    /// consumed as the header.
    pub fn map(&mut self, tokens: Vec<String>) -> Option<Vec<(String, String)>> {
        let names = match &self.names {
            Some(names) => names,
            None => {
                self.names = Some(tokens);
                return None;
            }
        };

        Some(names.iter().cloned().zip(tokens).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReaderOptions;

    fn mapper_with_columns(columns: &str) -> ColumnMapper {
        let config = ReaderOptions {
            format: Some("csv".to_string()),
            columns: Some(columns.to_string()),
            time_value: Some("0".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap();

        ColumnMapper::from_config(&config).unwrap()
    }

    fn mapper_with_header() -> ColumnMapper {
        let config = ReaderOptions {
            format: Some("csv".to_string()),
            column_header: true,
            time_value: Some("0".to_string()),
            ..Default::default()
        }
        .build()
        .unwrap();

        ColumnMapper::from_config(&config).unwrap()
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_names() {
        let mut mapper = mapper_with_columns("a,b,c");
        let named = mapper.map(tokens(&["1", "2", "3"])).unwrap();
        assert_eq!(
            named,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_short_row_omits_trailing_names() {
        let mut mapper = mapper_with_columns("a,b,c");
        let named = mapper.map(tokens(&["1"])).unwrap();
        assert_eq!(named, vec![("a".to_string(), "1".to_string())]);
    }

    #[test]
    fn test_extra_tokens_dropped() {
        let mut mapper = mapper_with_columns("a,b");
        let named = mapper.map(tokens(&["1", "2", "3", "4"])).unwrap();
        assert_eq!(named.len(), 2);
    }

    #[test]
    fn test_header_row_consumed() {
        let mut mapper = mapper_with_header();
        assert!(mapper.map(tokens(&["name", "num"])).is_none());

        let named = mapper.map(tokens(&["k", "12345"])).unwrap();
        assert_eq!(
            named,
            vec![
                ("name".to_string(), "k".to_string()),
                ("num".to_string(), "12345".to_string()),
            ]
        );
    }
}
