//! Error types for loading tables

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading one of the input tables
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("File '{}' is empty (no header row)", .path.display())]
    EmptyTable { path: PathBuf },

    #[error(
        "Column '{column}' does not exist in '{}'. Available columns: {}",
        .path.display(),
        .available.join(", ")
    )]
    MissingKeyColumn {
        path: PathBuf,
        column: String,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] csv::Error),
}
