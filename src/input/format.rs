use std::fmt;

use serde::Deserialize;

/// Input format selector.
///
/// `Auto` is a policy rather than a parser: see [`super::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    #[default]
    Auto,
    Json,
    /// One JSON value per line.
    Ndjson,
    /// Header row names the fields; values stay text.
    Csv,
    /// Each line is one opaque string.
    #[serde(alias = "textRows", alias = "text", alias = "lines")]
    TextRows,
}

impl FormatKind {
    /// Maps a `--format` value, ignoring case.
    ///
    /// Unrecognized values fall back to `Auto` instead of failing.
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl std::str::FromStr for FormatKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "csv" => Ok(Self::Csv),
            "textrows" | "text" | "lines" => Ok(Self::TextRows),
            _ => Err(format!("Unknown input format: {s}")),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Ndjson => write!(f, "ndjson"),
            Self::Csv => write!(f, "csv"),
            Self::TextRows => write!(f, "textRows"),
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
