//! JSON summary format

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::compare::{Comparison, Outcome};
use crate::config::Config;
use crate::diff::{ColumnSet, DiffStats, DifferenceRecord};

use super::OutputFormatter;

/// Pretty-printed JSON output formatter
#[derive(Debug, Default)]
pub struct JsonOutput;

#[derive(Serialize)]
struct JsonSummary<'a> {
    original_file: String,
    new_file: String,
    key_column: &'a str,
    outcome: Outcome,
    stats: &'a DiffStats,
    columns: &'a ColumnSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_file: Option<String>,
    differences: &'a [DifferenceRecord],
}

impl OutputFormatter for JsonOutput {
    fn render(
        &self,
        comparison: &Comparison,
        config: &Config,
        report_path: Option<&Path>,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        let summary = JsonSummary {
            original_file: config.original_file.display().to_string(),
            new_file: config.new_file.display().to_string(),
            key_column: comparison.key_column(),
            outcome: comparison.outcome(),
            stats: &comparison.diff.stats,
            columns: &comparison.columns,
            report_file: report_path.map(|p| p.display().to_string()),
            differences: &comparison.diff.records,
        };

        serde_json::to_writer_pretty(&mut *writer, &summary)?;
        writeln!(writer)?;
        Ok(())
    }
}
