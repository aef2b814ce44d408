use std::collections::HashMap;

use serde::Serialize;

pub const PLAYER: &str = "PLAYER";
pub const RUNS: &str = "RUNS";
pub const AVG: &str = "AVG";
pub const STRIKE_RATE: &str = "STRIKE RATE";
pub const WICKETS: &str = "WICKETS";
pub const ECONOMY_RATE: &str = "ECONOMY RATE";
pub const AVERAGE: &str = "AVERAGE";
pub const OVERS: &str = "OVERS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// Comma if the header line contains one, tab otherwise.
    pub fn infer(header_line: &str) -> Self {
        if header_line.contains(',') {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// One row keyed by trimmed header text. A header with no value on a short
/// row has no entry, which is distinct from an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by tests and synthetic data.
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields.insert(field.to_string(), value.to_string());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn player(&self) -> Option<&str> {
        self.get(PLAYER)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            headers: Vec::new(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// First record whose PLAYER equals `name` exactly. Later duplicates are shadowed.
    pub fn find_player(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.player() == Some(name))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parse delimited text into records. The delimiter is taken from the first
/// line only and there is no quoting support. Short rows leave their trailing
/// headers unset; surplus values are dropped. Never fails.
pub fn parse_table(text: &str) -> Dataset {
    let text = text.trim();
    if text.is_empty() {
        return Dataset::default();
    }

    let mut lines = text.split('\n');
    let Some(header_line) = lines.next() else {
        return Dataset::default();
    };
    let delim = Delimiter::infer(header_line).as_char();
    let headers: Vec<String> = header_line
        .split(delim)
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (idx, line) in lines.enumerate() {
        let values: Vec<&str> = line.split(delim).collect();
        if values.len() < headers.len() {
            tracing::debug!(
                row = idx + 1,
                expected = headers.len(),
                actual = values.len(),
                "short row, trailing fields left unset"
            );
        }
        let mut record = Record::new();
        for (i, header) in headers.iter().enumerate() {
            match values.get(i) {
                Some(value) => {
                    record.fields.insert(header.clone(), value.trim().to_string());
                }
                // A repeated header on a short row clears the earlier value.
                None => {
                    record.fields.remove(header);
                }
            }
        }
        records.push(record);
    }

    Dataset { headers, records }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_delimiter_from_header_only() {
        assert_eq!(Delimiter::infer("PLAYER,RUNS"), Delimiter::Comma);
        assert_eq!(Delimiter::infer("PLAYER\tRUNS"), Delimiter::Tab);
        // Commas further down do not switch a tab file.
        let ds = parse_table("PLAYER\tRUNS\nSmith, J\t40");
        assert_eq!(ds.records[0].get(PLAYER), Some("Smith, J"));
        assert_eq!(ds.records[0].get(RUNS), Some("40"));
    }

    #[test]
    fn empty_text_is_empty_dataset() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("   \n\n").is_empty());
        assert!(parse_table("PLAYER,RUNS\n").is_empty());
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let ds = parse_table("PLAYER,RUNS\r\nA,10\r\nB,20\r\n");
        assert_eq!(ds.headers, vec!["PLAYER", "RUNS"]);
        assert_eq!(ds.records[1].get(RUNS), Some("20"));
    }
}
