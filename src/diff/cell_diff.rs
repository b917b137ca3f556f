//! Cell-level comparison logic

use crate::model::{normalize_value, Record};

use super::CellChange;

/// Normalized value of `column` in a record; absent columns read as empty
pub fn cell_value<'a>(record: &'a Record, column: &str) -> &'a str {
    normalize_value(record.get(column).map(String::as_str))
}

/// Compare one column of two records.
///
/// Values are trimmed and then compared as exact strings.
pub fn compare_cell(original: &Record, new: &Record, column: &str) -> Option<CellChange> {
    let original_value = cell_value(original, column);
    let new_value = cell_value(new, column);

    if original_value == new_value {
        None
    } else {
        Some(CellChange {
            column: column.to_string(),
            original: original_value.to_string(),
            new: new_value.to_string(),
        })
    }
}
