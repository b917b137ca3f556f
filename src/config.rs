//! Configuration handling for csvcompare

use std::path::{Path, PathBuf};

/// Number of difference records shown on the terminal by default
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Output format for the console summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

/// Configuration for a comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the original (authoritative) file
    pub original_file: PathBuf,
    /// Path to the new (candidate) file
    pub new_file: PathBuf,
    /// Column used to match records between the two files
    pub key_column: String,
    /// Where to write the difference report; generated when absent
    pub output_file: Option<PathBuf>,
    /// Field delimiter; derived from the file extension when absent
    pub delimiter: Option<u8>,
    /// Console summary format
    pub output_format: OutputFormat,
    /// How many difference records the terminal summary shows
    pub sample_size: usize,
}

impl Config {
    /// Create a new Config for two files and a key column
    pub fn new(
        original_file: impl Into<PathBuf>,
        new_file: impl Into<PathBuf>,
        key_column: impl Into<String>,
    ) -> Self {
        Self {
            original_file: original_file.into(),
            new_file: new_file.into(),
            key_column: key_column.into(),
            output_file: None,
            delimiter: None,
            output_format: OutputFormat::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }

    /// Set the report path
    pub fn with_output_file(mut self, path: Option<PathBuf>) -> Self {
        self.output_file = path;
        self
    }

    /// Force a field delimiter
    pub fn with_delimiter(mut self, delimiter: Option<u8>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set how many differences the terminal summary lists
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Delimiter to use for `path`: the configured one, else tab for `.tsv`, else comma
    pub fn delimiter_for(&self, path: &Path) -> u8 {
        if let Some(delimiter) = self.delimiter {
            return delimiter;
        }
        let is_tsv = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("tsv"))
            .unwrap_or(false);
        if is_tsv {
            b'\t'
        } else {
            b','
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("a.csv", "b.csv", "id");
        assert_eq!(config.key_column, "id");
        assert_eq!(config.output_file, None);
        assert_eq!(config.output_format, OutputFormat::Terminal);
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn test_delimiter_for() {
        let config = Config::new("a.csv", "b.tsv", "id");
        assert_eq!(config.delimiter_for(Path::new("a.csv")), b',');
        assert_eq!(config.delimiter_for(Path::new("b.TSV")), b'\t');

        let config = config.with_delimiter(Some(b';'));
        assert_eq!(config.delimiter_for(Path::new("b.tsv")), b';');
    }
}
