//! csvcompare - Column value comparison between two keyed CSV files
//!
//! Loads an original (authoritative) table and a new (candidate) table keyed
//! by the same column, compares the values of every column the two share,
//! and reports the records whose values differ.

pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use compare::{run_comparison, Comparison, Outcome};
pub use config::Config;
pub use diff::DiffResult;
pub use error::LoadError;
pub use model::Table;
