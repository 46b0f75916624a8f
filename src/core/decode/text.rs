use std::io::BufRead;

use regex::Regex;

use super::{Decode, RawRow, Result, RowData, RowOutcome};

pub struct TextDecoder<R> {
    input: R,
    delimiter: Regex,
    row: usize,
    line: String,
}

impl<R> TextDecoder<R>
where
    R: BufRead,
{
    pub fn new(input: R, delimiter: Regex) -> Self {
        Self {
            input,
            delimiter,
            row: 0,
            line: String::new(),
        }
    }
}

impl<R> Decode for TextDecoder<R>
where
    R: BufRead,
{
    fn next_row(&mut self) -> Result<Option<RowOutcome>> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let line = self.line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                continue;
            }
            self.row += 1;

            let mut tokens: Vec<String> = self.delimiter.split(line).map(str::to_string).collect();
            // A delimiter at end of line yields no trailing field
            while tokens.last().is_some_and(|token| token.is_empty()) {
                tokens.pop();
            }

            return Ok(Some(RowOutcome::Row(RawRow {
                index: self.row,
                raw: line.to_string(),
                data: RowData::Tokens(tokens),
            })));
        }
    }
}
