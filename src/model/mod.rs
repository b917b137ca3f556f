//! Data model for keyed tabular data

mod key;
mod table;

pub use key::{normalize_value, record_key};
pub use table::{AddRow, Record, Table};
