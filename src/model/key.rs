//! Key and value normalization

use super::table::Record;

/// Normalize a raw cell value for comparison.
///
/// Surrounding whitespace is stripped; an absent value is the empty string.
pub fn normalize_value(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or("")
}

/// Compute the normalized key of a record, `None` when the key is blank
pub fn record_key(record: &Record, key_column: &str) -> Option<String> {
    let key = normalize_value(record.get(key_column).map(String::as_str));
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
