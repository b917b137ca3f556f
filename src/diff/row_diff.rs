//! Row matching by key

use crate::model::{Record, Table};

/// A key present in both tables with its two records
#[derive(Debug)]
pub struct MatchedRow<'a> {
    pub key: &'a str,
    pub original: &'a Record,
    pub new: &'a Record,
}

/// Result of matching the original table against the new one
#[derive(Debug, Default)]
pub struct RowMatches<'a> {
    /// Shared keys, in original table order
    pub matched: Vec<MatchedRow<'a>>,
    /// Keys of the original table with no counterpart in the new one
    pub unmatched_original: usize,
}

/// Match rows by walking the original table's keys.
///
/// Keys present only in the new table are never visited.
pub fn match_rows<'a>(original: &'a Table, new: &'a Table) -> RowMatches<'a> {
    let mut matches = RowMatches::default();

    for (key, original_record) in &original.records {
        match new.get(key) {
            Some(new_record) => matches.matched.push(MatchedRow {
                key,
                original: original_record,
                new: new_record,
            }),
            None => matches.unmatched_original += 1,
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(keys: &[&str]) -> Table {
        let mut table = Table::new(vec!["id".to_string()], "id");
        for key in keys {
            let mut record = Record::new();
            record.insert("id".to_string(), key.to_string());
            table.add_row(record);
        }
        table
    }

    #[test]
    fn test_match_rows_follows_original_order() {
        let original = table(&["3", "1", "2"]);
        let new = table(&["1", "2", "3", "4"]);
        let matches = match_rows(&original, &new);

        let keys: Vec<_> = matches.matched.iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
        assert_eq!(matches.unmatched_original, 0);
    }

    #[test]
    fn test_original_only_keys_are_skipped() {
        let original = table(&["1", "2"]);
        let new = table(&["2", "9"]);
        let matches = match_rows(&original, &new);

        assert_eq!(matches.matched.len(), 1);
        assert_eq!(matches.matched[0].key, "2");
        assert_eq!(matches.unmatched_original, 1);
    }
}
