//! Keyed table of string records

use indexmap::IndexMap;

use super::key::record_key;

/// A single row: column name to raw cell value
pub type Record = IndexMap<String, String>;

/// What happened when a row was added to a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRow {
    /// First row seen with this key
    Inserted,
    /// A previous row with the same key was replaced
    Replaced { key: String },
    /// The key was blank; the row was dropped
    BlankKey,
}

/// A table loaded from a delimited file, keyed by one column.
///
/// Records keep the position of the first row seen for their key, while the
/// values come from the last such row.
#[derive(Debug, Clone)]
pub struct Table {
    /// Header in file order
    pub headers: Vec<String>,
    /// Column used as key
    pub key_column: String,
    /// Normalized key to record
    pub records: IndexMap<String, Record>,
}

impl Table {
    /// Create an empty table with a header and key column
    pub fn new(headers: Vec<String>, key_column: impl Into<String>) -> Self {
        Self {
            headers,
            key_column: key_column.into(),
            records: IndexMap::new(),
        }
    }

    /// Add a row, keyed by the normalized value of the key column
    pub fn add_row(&mut self, record: Record) -> AddRow {
        let Some(key) = record_key(&record, &self.key_column) else {
            return AddRow::BlankKey;
        };
        match self.records.insert(key.clone(), record) {
            Some(_) => AddRow::Replaced { key },
            None => AddRow::Inserted,
        }
    }

    /// Look up a record by normalized key
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.get(key)
    }

    /// Check whether the header contains a column
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Number of keyed records
    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}
