use crate::error::{Result, SvegaError};

use super::dataset::Dataset;
use super::format::FormatKind;
use super::parsers::{
    ParseError, parse_csv, parse_delimited_csv, parse_json, parse_ndjson, parse_text_rows,
};
use super::payload::RawPayload;

type Parser = fn(&str) -> std::result::Result<Dataset, ParseError>;

/// Parsers tried by `auto`, in order.
///
/// Text rows accept anything, so they must stay last; CSV with a delimited
/// header comes after NDJSON so record-per-line JSON is never read as a
/// one-column table.
pub const AUTO_ORDER: [(FormatKind, Parser); 4] = [
    (FormatKind::Json, parse_json),
    (FormatKind::Ndjson, parse_ndjson),
    (FormatKind::Csv, parse_delimited_csv),
    (FormatKind::TextRows, parse_text_rows),
];

/// A dataset together with the concrete format that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub format: FormatKind,
    pub dataset: Dataset,
}

/// Parses `raw` according to `hint`.
///
/// # Errors
/// With a concrete hint, returns that parser's error. With `Auto`, returns
/// [`SvegaError::UnparsableInput`] carrying every attempt's failure.
pub fn resolve(raw: &RawPayload, hint: FormatKind) -> Result<Resolved> {
    let parser: Parser = match hint {
        FormatKind::Auto => return resolve_auto(raw),
        FormatKind::Json => parse_json,
        FormatKind::Ndjson => parse_ndjson,
        FormatKind::Csv => parse_csv,
        FormatKind::TextRows => parse_text_rows,
    };

    let dataset = parser(raw.as_str())?;
    Ok(Resolved {
        format: hint,
        dataset,
    })
}

fn resolve_auto(raw: &RawPayload) -> Result<Resolved> {
    let mut attempts = Vec::with_capacity(AUTO_ORDER.len());

    for (format, parser) in AUTO_ORDER {
        match parser(raw.as_str()) {
            Ok(dataset) => return Ok(Resolved { format, dataset }),
            Err(e) => attempts.push(e),
        }
    }

    Err(SvegaError::UnparsableInput { attempts })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
