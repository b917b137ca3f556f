//! Load, intersect and diff: the comparison pipeline

use log::{debug, info};
use serde::Serialize;

use crate::config::Config;
use crate::diff::{compute_diff, ColumnSet, DiffResult};
use crate::error::LoadError;
use crate::model::Table;
use crate::parser::ParserFactory;

/// How a comparison ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The tables share no column besides the key
    NoCommonColumns,
    /// Every shared key has equal values in every common column
    Identical,
    /// At least one shared key differs
    Different,
}

/// Everything computed for one run
#[derive(Debug)]
pub struct Comparison {
    pub original: Table,
    pub new: Table,
    pub columns: ColumnSet,
    pub diff: DiffResult,
}

impl Comparison {
    pub fn outcome(&self) -> Outcome {
        if self.columns.is_empty() {
            Outcome::NoCommonColumns
        } else if self.diff.has_differences() {
            Outcome::Different
        } else {
            Outcome::Identical
        }
    }

    pub fn key_column(&self) -> &str {
        &self.original.key_column
    }
}

/// Run the comparison described by `config`.
///
/// Fails on the first table that cannot be loaded. With no common columns
/// the diff step is skipped and the result is empty.
pub fn run_comparison(config: &Config) -> Result<Comparison, LoadError> {
    let factory = ParserFactory::new(config);

    info!("Loading original file {}", config.original_file.display());
    let original = factory.parse(&config.original_file)?;
    info!("Loading new file {}", config.new_file.display());
    let new = factory.parse(&config.new_file)?;

    let columns = ColumnSet::compare(&original, &new);
    if !columns.only_original.is_empty() {
        debug!("Columns only in original: {}", columns.only_original.join(", "));
    }
    if !columns.only_new.is_empty() {
        debug!("Columns only in new: {}", columns.only_new.join(", "));
    }

    let diff = if columns.is_empty() {
        let mut diff = DiffResult::default();
        diff.stats.original_row_count = original.row_count();
        diff.stats.new_row_count = new.row_count();
        diff
    } else {
        info!("Comparing {} common column(s)", columns.common.len());
        compute_diff(&original, &new, &columns.common)
    };

    Ok(Comparison {
        original,
        new,
        columns,
        diff,
    })
}
