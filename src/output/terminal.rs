//! Colored terminal summary

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::compare::{Comparison, Outcome};
use crate::config::{Config, DEFAULT_SAMPLE_SIZE};
use crate::diff::DifferenceRecord;

use super::report::{DIFFERENT_FLAG, SUFFIX_DIFFERENT, SUFFIX_NEW, SUFFIX_ORIGINAL};
use super::OutputFormatter;

/// Shown in place of an empty value
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

const RULE_WIDTH: usize = 80;

/// Terminal output with colors
pub struct TerminalOutput {
    sample_size: usize,
}

impl TerminalOutput {
    pub fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }

    fn write_colored(
        &self,
        writer: &mut dyn WriteColor,
        color: Color,
        text: &str,
    ) -> Result<()> {
        writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(writer, "{}", text)?;
        writer.reset()?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_section(&self, writer: &mut dyn WriteColor, title: &str) -> Result<()> {
        writeln!(writer)?;
        writer.set_color(ColorSpec::new().set_bold(true))?;
        write!(writer, "{}", title)?;
        writer.reset()?;
        writeln!(writer)?;
        writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn write_header(&self, writer: &mut dyn WriteColor, config: &Config) -> Result<()> {
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(writer, " csvcompare: column value comparison")?;
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            writer,
            "Original file (reference): {}",
            config.original_file.display()
        )?;
        writeln!(writer, "New file (to validate):    {}", config.new_file.display())?;
        writeln!(writer, "Key column:                {}", config.key_column)?;
        Ok(())
    }

    fn write_stats(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()> {
        let stats = &comparison.diff.stats;
        self.write_section(writer, "Statistics:")?;
        writeln!(writer, "  Records in original: {}", stats.original_row_count)?;
        writeln!(writer, "  Records in new:      {}", stats.new_row_count)?;
        writeln!(writer, "  Common columns:      {}", comparison.columns.common.len())?;
        if !comparison.columns.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "  Columns: {}", comparison.columns.common.join(", "))?;
        }
        Ok(())
    }

    fn write_results(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()> {
        let stats = &comparison.diff.stats;
        self.write_section(writer, "Results:")?;
        writeln!(writer, "  Records with differences: {}", stats.rows_different)?;
        writeln!(writer, "  Identical records:        {}", stats.rows_identical)?;
        Ok(())
    }

    fn write_samples(&self, comparison: &Comparison, writer: &mut dyn WriteColor) -> Result<()> {
        let records = &comparison.diff.records;
        self.write_section(
            writer,
            &format!("Differences found (first {}):", self.sample_size),
        )?;

        for (i, record) in records.iter().take(self.sample_size).enumerate() {
            self.write_record(i + 1, comparison.key_column(), record, writer)?;
        }

        if records.len() > self.sample_size {
            writeln!(writer)?;
            writeln!(
                writer,
                "   ... and {} more records with differences",
                records.len() - self.sample_size
            )?;
        }
        Ok(())
    }

    fn write_record(
        &self,
        position: usize,
        key_column: &str,
        record: &DifferenceRecord,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        writeln!(writer)?;
        writeln!(writer, "{}. {}: {}", position, key_column, record.key)?;
        for change in &record.changes {
            writeln!(writer, "   {}:", change.column)?;
            writeln!(writer, "      Original: {}", display_value(&change.original))?;
            writeln!(writer, "      New:      {}", display_value(&change.new))?;
        }
        Ok(())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(
        &self,
        comparison: &Comparison,
        config: &Config,
        report_path: Option<&Path>,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        self.write_header(writer, config)?;
        self.write_stats(comparison, writer)?;

        match comparison.outcome() {
            Outcome::NoCommonColumns => {
                writeln!(writer)?;
                self.write_colored(
                    writer,
                    Color::Yellow,
                    "Warning: no common columns found (besides the key column)!",
                )?;
            }
            Outcome::Identical => {
                self.write_results(comparison, writer)?;
                writeln!(writer)?;
                self.write_colored(writer, Color::Green, "All records are identical!")?;
            }
            Outcome::Different => {
                self.write_results(comparison, writer)?;
                self.write_samples(comparison, writer)?;
                if let Some(path) = report_path {
                    writeln!(writer)?;
                    writeln!(writer, "Saving results to: {}", path.display())?;
                }
            }
        }

        Ok(())
    }

    fn render_report_saved(
        &self,
        comparison: &Comparison,
        report_path: &Path,
        writer: &mut dyn WriteColor,
    ) -> Result<()> {
        writeln!(writer)?;
        self.write_colored(writer, Color::Green, "Done!")?;
        writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(writer, "Report file: {}", report_path.display())?;
        writeln!(writer)?;
        writeln!(
            writer,
            "The report contains {} records with differences.",
            comparison.diff.records.len()
        )?;
        writeln!(writer, "Each common column has three report columns:")?;
        writeln!(
            writer,
            "  - [COLUMN]{}: value from the original file",
            SUFFIX_ORIGINAL
        )?;
        writeln!(writer, "  - [COLUMN]{}: value from the new file", SUFFIX_NEW)?;
        writeln!(
            writer,
            "  - [COLUMN]{}: '{}' when the values differ",
            SUFFIX_DIFFERENT, DIFFERENT_FLAG
        )?;
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_PLACEHOLDER
    } else {
        value
    }
}
