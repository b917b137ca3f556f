//! Diff engine for comparing column values between tables

pub mod cell_diff;
mod row_diff;
mod schema_diff;

use log::debug;
use serde::Serialize;

use crate::model::Table;

pub use cell_diff::{cell_value, compare_cell};
pub use row_diff::{match_rows, MatchedRow, RowMatches};
pub use schema_diff::{common_columns, ColumnSet};

/// A differing value in one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellChange {
    /// Column name
    pub column: String,
    /// Normalized value in the original table
    pub original: String,
    /// Normalized value in the new table
    pub new: String,
}

/// All differing columns for one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DifferenceRecord {
    /// Normalized key value
    pub key: String,
    /// Differing columns, in common column order; never empty
    pub changes: Vec<CellChange>,
}

/// Statistics about the comparison
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub original_row_count: usize,
    pub new_row_count: usize,
    pub common_column_count: usize,
    pub rows_different: usize,
    /// Original rows without a difference, including keys absent from the new table
    pub rows_identical: usize,
    pub cells_changed: usize,
}

/// Result of comparing two tables
#[derive(Debug, Default, Clone, Serialize)]
pub struct DiffResult {
    /// One entry per key with at least one differing column
    pub records: Vec<DifferenceRecord>,
    pub stats: DiffStats,
}

impl DiffResult {
    /// Check if any record differs
    pub fn has_differences(&self) -> bool {
        !self.records.is_empty()
    }
}

/// Compare the common columns of every key shared by both tables.
///
/// Only keys of the original table are visited. Records come out in the
/// original table's key order.
pub fn compute_diff(original: &Table, new: &Table, common_columns: &[String]) -> DiffResult {
    let matches = match_rows(original, new);
    if matches.unmatched_original > 0 {
        debug!(
            "{} key(s) of the original table are absent from the new table and were skipped",
            matches.unmatched_original
        );
    }

    let mut result = DiffResult::default();

    for MatchedRow {
        key,
        original: original_record,
        new: new_record,
    } in matches.matched
    {
        let changes: Vec<CellChange> = common_columns
            .iter()
            .filter_map(|column| compare_cell(original_record, new_record, column))
            .collect();

        if !changes.is_empty() {
            result.stats.cells_changed += changes.len();
            result.records.push(DifferenceRecord {
                key: key.to_string(),
                changes,
            });
        }
    }

    result.stats.original_row_count = original.row_count();
    result.stats.new_row_count = new.row_count();
    result.stats.common_column_count = common_columns.len();
    result.stats.rows_different = result.records.len();
    result.stats.rows_identical = original.row_count() - result.records.len();

    result
}
