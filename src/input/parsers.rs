//! One pure parser per concrete input format.
//!
//! Every parser takes the already-trimmed payload text and either produces a
//! whole [`Dataset`] or fails; none returns partial results.

use indexmap::IndexSet;
use serde_json::{Map, Value};
use thiserror::Error;

use super::dataset::Dataset;
use super::format::FormatKind;

/// Failure of a single parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{format}: {message}")]
pub struct ParseError {
    pub format: FormatKind,
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(format: FormatKind, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
        }
    }
}

/// The whole payload is one JSON document.
///
/// # Errors
/// Returns an error if the payload is not valid JSON.
pub fn parse_json(raw: &str) -> Result<Dataset, ParseError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ParseError::new(FormatKind::Json, e.to_string()))?;
    Ok(Dataset::from_json(value))
}

/// One JSON value per non-blank line.
///
/// # Errors
/// Returns an error naming the first line that is not valid JSON.
pub fn parse_ndjson(raw: &str) -> Result<Dataset, ParseError> {
    let mut records = Vec::new();

    for (index, line) in raw.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| {
            ParseError::new(FormatKind::Ndjson, format!("line {}: {e}", index + 1))
        })?;
        records.push(value);
    }

    Ok(Dataset::Records(records))
}

/// CSV with a header row; single-column files are accepted.
///
/// # Errors
/// Returns an error on malformed CSV or rows whose width differs from the header.
pub fn parse_csv(raw: &str) -> Result<Dataset, ParseError> {
    csv_records(raw, 1)
}

/// CSV whose header has at least two fields.
///
/// This is the CSV step of `auto` detection: without a delimiter in the
/// header any line of free text would pass as a one-column CSV file.
///
/// # Errors
/// Same as [`parse_csv`], plus a header with a single field.
pub fn parse_delimited_csv(raw: &str) -> Result<Dataset, ParseError> {
    csv_records(raw, 2)
}

/// Each line is one row, blank lines included. An empty payload is a single
/// empty row.
///
/// # Errors
/// Never fails; the `Result` keeps the signature uniform with the other parsers.
pub fn parse_text_rows(raw: &str) -> Result<Dataset, ParseError> {
    let lines = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();
    Ok(Dataset::Lines(lines))
}

fn csv_records(raw: &str, min_columns: usize) -> Result<Dataset, ParseError> {
    if raw.trim().is_empty() {
        return Ok(Dataset::Records(Vec::new()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    if headers.len() < min_columns {
        return Err(ParseError::new(
            FormatKind::Csv,
            format!(
                "header has {} field(s), expected at least {min_columns}",
                headers.len()
            ),
        ));
    }
    let names = unique_field_names(headers.iter());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let record: Map<String, Value> = names
            .iter()
            .zip(row.iter())
            .map(|(name, field)| (name.clone(), Value::String(field.to_string())))
            .collect();
        records.push(Value::Object(record));
    }

    Ok(Dataset::Records(records))
}

/// Header names with duplicates suffixed `_1`, `_2`, ... in left-to-right order.
fn unique_field_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: IndexSet<String> = IndexSet::new();

    for name in headers {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}_{suffix}");
            suffix += 1;
        }
        seen.insert(candidate);
    }

    seen.into_iter().collect()
}

fn csv_error(err: csv::Error) -> ParseError {
    ParseError::new(FormatKind::Csv, err.to_string())
}

#[cfg(test)]
#[path = "parsers_tests.rs"]
mod tests;
