//! Canonical header map and whitespace-tolerant header index.
//!
//! The spreadsheet export names its columns after the form questions. Each
//! logical [`Field`] maps to exactly one expected header text; the
//! [`HeaderIndex`] is built once from the CSV header row so that incidental
//! whitespace around a header cell does not break the lookup.

use csv::StringRecord;
use std::collections::HashMap;

/// Logical fields extracted from a reading-log row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Year,
    DateStarted,
    Status,
    Tags,
    Clarity,
    Relevance,
    MainFinding,
    Interesting,
}

impl Field {
    /// All logical fields, in output order
    pub const ALL: [Field; 9] = [
        Field::Title,
        Field::Year,
        Field::DateStarted,
        Field::Status,
        Field::Tags,
        Field::Clarity,
        Field::Relevance,
        Field::MainFinding,
        Field::Interesting,
    ];

    /// Exact header text expected in the source CSV
    pub const fn header(self) -> &'static str {
        match self {
            Field::Title => "Paper Title",
            Field::Year => "Year Published",
            Field::DateStarted => "Date of starting reading",
            Field::Status => "Current Reading Status",
            Field::Tags => "Tags/Keys (separate by comma)",
            Field::Clarity => "Rate the Clarity and Quality of the Paper",
            Field::Relevance => "How relevant is this paper to your current research/work?",
            Field::MainFinding => {
                "Summarize the main finding or conclusion (each start with a hyphen)"
            }
            Field::Interesting => "Interesting points (each start with a hyphen)",
        }
    }
}

/// Trimmed header text -> column position, built once per input
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    columns: HashMap<String, usize>,
}

impl HeaderIndex {
    /// Build the index from a CSV header row.
    ///
    /// When two columns trim to the same text the right-most one wins.
    pub fn new(headers: &StringRecord) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, h)| (h.trim().to_string(), idx))
            .collect();
        Self { columns }
    }

    /// Column position for an arbitrary header text, tolerant of surrounding whitespace
    pub fn position(&self, wanted: &str) -> Option<usize> {
        self.columns.get(wanted.trim()).copied()
    }

    /// Whether the input carries a column for this logical field
    pub fn contains(&self, field: Field) -> bool {
        self.position(field.header()).is_some()
    }

    /// Logical fields with no matching column in the input
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .iter()
            .copied()
            .filter(|f| !self.contains(*f))
            .collect()
    }

    /// Trimmed cell value for `field`, or an empty string when the column
    /// or the cell is absent.
    pub fn get<'r>(&self, row: &'r StringRecord, field: Field) -> &'r str {
        self.position(field.header())
            .and_then(|idx| row.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tolerates_header_whitespace() {
        let headers = StringRecord::from(vec!["  Paper Title ", "Year Published\t"]);
        let index = HeaderIndex::new(&headers);
        let row = StringRecord::from(vec!["  Attention Is All You Need  ", " 2017 "]);

        assert_eq!(index.get(&row, Field::Title), "Attention Is All You Need");
        assert_eq!(index.get(&row, Field::Year), "2017");
    }

    #[test]
    fn test_missing_column_is_empty() {
        let headers = StringRecord::from(vec!["Paper Title"]);
        let index = HeaderIndex::new(&headers);
        let row = StringRecord::from(vec!["Some paper"]);

        assert_eq!(index.get(&row, Field::Status), "");
        assert!(!index.contains(Field::Status));
        assert_eq!(index.missing().len(), 8);
    }

    #[test]
    fn test_short_row_is_empty() {
        let headers = StringRecord::from(vec!["Paper Title", "Current Reading Status"]);
        let index = HeaderIndex::new(&headers);
        let row = StringRecord::from(vec!["Only a title"]);

        assert_eq!(index.get(&row, Field::Status), "");
    }

    #[test]
    fn test_duplicate_header_rightmost_wins() {
        let headers = StringRecord::from(vec!["Paper Title", " Paper Title"]);
        let index = HeaderIndex::new(&headers);
        let row = StringRecord::from(vec!["left", "right"]);

        assert_eq!(index.get(&row, Field::Title), "right");
    }

    #[test]
    fn test_all_headers_present() {
        let headers: StringRecord = Field::ALL.iter().map(|f| f.header()).collect();
        let index = HeaderIndex::new(&headers);
        assert!(index.missing().is_empty());
    }
}
