//! Header lookup and field helpers shared by the CSV parsers.

use crate::error::{Result, TidelineError};
use csv::{ReaderBuilder, StringRecord, Trim};

/// Build a reader over CSV text with headers and trimmed fields.
pub(super) fn csv_reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
}

/// Index of a required column.
pub(super) fn required_column(
    headers: &StringRecord,
    table: &'static str,
    name: &str,
) -> Result<usize> {
    optional_column(headers, name).ok_or_else(|| TidelineError::missing_column(table, name))
}

/// Index of a column that may be absent.
pub(super) fn optional_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

/// Trimmed field text, or an empty string for short rows.
pub(super) fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

/// One-based source line of a record.
pub(super) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Log a row whose key field did not parse; the row is left out.
pub(super) fn skip_row(table: &str, line: u64, column: &str, value: &str) {
    tracing::warn!(
        "Skipping {} row on line {}: invalid {} '{}'",
        table,
        line,
        column,
        value
    );
}

/// Parse a real value; anything unparseable becomes NaN.
pub(super) fn parse_real(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
