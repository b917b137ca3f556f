//! Delimited text parser

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;

use crate::error::LoadError;
use crate::model::{AddRow, Record, Table};

use super::Parser;

/// Parser for comma, tab or otherwise delimited files with a header row
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl Parser for CsvParser {
    fn parse(&self, path: &Path, key_column: &str) -> Result<Table, LoadError> {
        if !path.is_file() {
            return Err(LoadError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(BufReader::new(file));

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(LoadError::EmptyTable {
                path: path.to_path_buf(),
            });
        }
        let mut table = Table::new(headers, key_column);
        if !table.has_column(key_column) {
            return Err(LoadError::MissingKeyColumn {
                path: path.to_path_buf(),
                column: key_column.to_string(),
                available: table.headers,
            });
        }
        let mut blank_keys = 0usize;

        for (line_num, result) in csv_reader.records().enumerate() {
            let row = result?;

            // Short rows leave trailing columns absent; extra fields are ignored.
            let record: Record = table
                .headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| (name.clone(), value.to_string()))
                .collect();

            match table.add_row(record) {
                AddRow::Inserted => {}
                AddRow::Replaced { key } => {
                    // +2 for 1-indexing and header
                    debug!("{}: row {} overwrites key '{}'", path.display(), line_num + 2, key);
                }
                AddRow::BlankKey => blank_keys += 1,
            }
        }

        if blank_keys > 0 {
            debug!(
                "{}: dropped {} row(s) with a blank '{}' value",
                path.display(),
                blank_keys,
                key_column
            );
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_keyed_rows() {
        let file = write_file("id,name,city\n1,Ann,Lisbon\n2, Bob ,Porto\n");
        let table = CsvParser::default().parse(file.path(), "id").unwrap();

        assert_eq!(table.headers, vec!["id", "name", "city"]);
        assert_eq!(table.row_count(), 2);
        // raw values are kept as read
        assert_eq!(table.get("2").unwrap()["name"], " Bob ");
    }

    #[test]
    fn test_blank_keys_and_duplicates() {
        let file = write_file("id,name\n1,Ann\n  ,Ghost\n,Nobody\n1,Annie\n");
        let table = CsvParser::default().parse(file.path(), "id").unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.get("1").unwrap()["name"], "Annie");
    }

    #[test]
    fn test_short_rows_are_padded_with_absent_values() {
        let file = write_file("id,name,city\n1,Ann\n2,Bob,Porto,extra\n");
        let table = CsvParser::default().parse(file.path(), "id").unwrap();

        assert!(table.get("1").unwrap().get("city").is_none());
        assert_eq!(table.get("2").unwrap()["city"], "Porto");
        assert_eq!(table.get("2").unwrap().len(), 3);
    }

    #[test]
    fn test_custom_delimiter() {
        let file = write_file("id;name\n1;Ann\n");
        let table = CsvParser::new(b';').parse(file.path(), "id").unwrap();
        assert_eq!(table.get("1").unwrap()["name"], "Ann");
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvParser::default()
            .parse(&dir.path().join("missing.csv"), "id")
            .unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_file() {
        let file = write_file("");
        let err = CsvParser::default().parse(file.path(), "id").unwrap_err();
        assert!(matches!(err, LoadError::EmptyTable { .. }));
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let file = write_file("\n\nid,name\n1,Ann\n");
        let table = CsvParser::default().parse(file.path(), "id").unwrap();

        assert_eq!(table.headers, vec!["id", "name"]);
        assert_eq!(table.get("1").unwrap()["name"], "Ann");
    }

    #[test]
    fn test_missing_key_column() {
        let file = write_file("code,name\n1,Ann\n");
        let err = CsvParser::default().parse(file.path(), "id").unwrap_err();
        match err {
            LoadError::MissingKeyColumn {
                column, available, ..
            } => {
                assert_eq!(column, "id");
                assert_eq!(available, vec!["code", "name"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"id,name\n1,\xff\xfe\n").unwrap();
        file.flush().unwrap();
        let err = CsvParser::default().parse(file.path(), "id").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
