//! Difference report file

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};

use crate::compare::Comparison;
use crate::diff::cell_value;

pub const SUFFIX_ORIGINAL: &str = "_ORIGINAL";
pub const SUFFIX_NEW: &str = "_NOVA";
pub const SUFFIX_DIFFERENT: &str = "_DIFERENTE";

/// Flag written in the `_DIFERENTE` column when values differ
pub const DIFFERENT_FLAG: &str = "SIM";

/// Report file name used when none is given, e.g. `diferencas_20240131_235959.csv`
pub fn default_report_path<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("diferencas_{}.csv", now.format("%Y%m%d_%H%M%S")))
}

/// Header row: key column, then three columns per common column
pub fn report_headers(key_column: &str, columns: &[String]) -> Vec<String> {
    let mut headers = Vec::with_capacity(1 + columns.len() * 3);
    headers.push(key_column.to_string());
    for column in columns {
        headers.push(format!("{}{}", column, SUFFIX_ORIGINAL));
        headers.push(format!("{}{}", column, SUFFIX_NEW));
        headers.push(format!("{}{}", column, SUFFIX_DIFFERENT));
    }
    headers
}

/// Write one row per difference record to `writer`
pub fn write_report_to<W: Write>(writer: W, comparison: &Comparison, delimiter: u8) -> Result<()> {
    let columns = &comparison.columns.common;
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv_writer.write_record(report_headers(comparison.key_column(), columns))?;

    for record in &comparison.diff.records {
        let original = comparison
            .original
            .get(&record.key)
            .with_context(|| format!("Key '{}' is missing from the original table", record.key))?;
        let new = comparison
            .new
            .get(&record.key)
            .with_context(|| format!("Key '{}' is missing from the new table", record.key))?;

        let mut row: Vec<&str> = Vec::with_capacity(1 + columns.len() * 3);
        row.push(&record.key);
        for column in columns {
            let original_value = cell_value(original, column);
            let new_value = cell_value(new, column);
            row.push(original_value);
            row.push(new_value);
            row.push(if original_value != new_value {
                DIFFERENT_FLAG
            } else {
                ""
            });
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the difference report to a file
pub fn write_report(path: &Path, comparison: &Comparison, delimiter: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    write_report_to(file, comparison, delimiter)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}
