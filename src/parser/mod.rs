//! Table loading from delimited text files

mod csv;

use std::path::Path;

use crate::config::Config;
use crate::error::LoadError;
use crate::model::Table;

pub use self::csv::CsvParser;

/// Trait for loading a keyed table from a file
pub trait Parser {
    /// Parse a file and key its rows by `key_column`
    fn parse(&self, path: &Path, key_column: &str) -> Result<Table, LoadError>;
}

/// Picks the parser settings for each input file
pub struct ParserFactory<'a> {
    config: &'a Config,
}

impl<'a> ParserFactory<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Get a parser for the given file path
    pub fn get_parser(&self, path: &Path) -> CsvParser {
        CsvParser::new(self.config.delimiter_for(path))
    }

    /// Parse a file keyed by the configured key column
    pub fn parse(&self, path: &Path) -> Result<Table, LoadError> {
        self.get_parser(path).parse(path, &self.config.key_column)
    }
}
