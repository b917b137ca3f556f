//! Output formatting for comparison results

mod json;
mod report;
mod terminal;

use std::path::Path;

use anyhow::Result;
use termcolor::WriteColor;

use crate::compare::Comparison;
use crate::config::{Config, OutputFormat};

pub use json::JsonOutput;
pub use report::{
    default_report_path, report_headers, write_report, write_report_to, DIFFERENT_FLAG,
    SUFFIX_DIFFERENT, SUFFIX_NEW, SUFFIX_ORIGINAL,
};
pub use terminal::{TerminalOutput, EMPTY_PLACEHOLDER};

/// Trait for console summary formatters
pub trait OutputFormatter {
    /// Render the summary of a comparison.
    ///
    /// `report_path` is where the difference report is about to be written,
    /// `None` when no report is written.
    fn render(
        &self,
        comparison: &Comparison,
        config: &Config,
        report_path: Option<&Path>,
        writer: &mut dyn WriteColor,
    ) -> Result<()>;

    /// Called once the report file has been written
    fn render_report_saved(
        &self,
        _comparison: &Comparison,
        _report_path: &Path,
        _writer: &mut dyn WriteColor,
    ) -> Result<()> {
        Ok(())
    }
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter for the configured format
    pub fn create(config: &Config) -> Box<dyn OutputFormatter> {
        match config.output_format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new(config.sample_size)),
            OutputFormat::Json => Box::new(JsonOutput),
        }
    }
}
