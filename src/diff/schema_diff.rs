//! Column intersection between the two headers

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::model::Table;

/// Columns of the two tables, split by where they appear
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnSet {
    /// Non-key columns present in both headers, sorted
    pub common: Vec<String>,
    /// Non-key columns only in the original header, in header order
    pub only_original: Vec<String>,
    /// Non-key columns only in the new header, in header order
    pub only_new: Vec<String>,
}

impl ColumnSet {
    /// Compare the headers of two tables sharing a key column
    pub fn compare(original: &Table, new: &Table) -> Self {
        let key = original.key_column.as_str();
        let original_names: FxHashSet<&str> = original.headers.iter().map(String::as_str).collect();
        let new_names: FxHashSet<&str> = new.headers.iter().map(String::as_str).collect();

        Self {
            common: common_columns(&original.headers, &new.headers, key),
            only_original: exclusive(&original.headers, &new_names, key),
            only_new: exclusive(&new.headers, &original_names, key),
        }
    }

    /// True when there is nothing to compare
    pub fn is_empty(&self) -> bool {
        self.common.is_empty()
    }
}

/// Sorted intersection of two headers, without the key column
pub fn common_columns(original: &[String], new: &[String], key_column: &str) -> Vec<String> {
    let new_names: FxHashSet<&str> = new.iter().map(String::as_str).collect();
    let mut common: Vec<String> = original
        .iter()
        .filter(|name| name.as_str() != key_column && new_names.contains(name.as_str()))
        .cloned()
        .collect();
    common.sort();
    common.dedup();
    common
}

fn exclusive(headers: &[String], other: &FxHashSet<&str>, key_column: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    headers
        .iter()
        .filter(|name| name.as_str() != key_column && !other.contains(name.as_str()))
        .filter(|name| seen.insert(name.as_str()))
        .cloned()
        .collect()
}
