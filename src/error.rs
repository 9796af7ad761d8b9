use std::path::PathBuf;

use thiserror::Error;

use crate::input::ParseError;

#[derive(Error, Debug)]
pub enum SvegaError {
    /// Bad arguments, missing stdin data, or a spec path with the wrong extension.
    #[error("{0}")]
    Usage(String),

    #[error("could not parse input")]
    UnparsableInput { attempts: Vec<ParseError> },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("unsupported spec: {0}")]
    UnsupportedSpec(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl SvegaError {
    /// Whether this error is reported with the usage text instead of a crash line.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::UnsupportedSpec(_))
    }

    /// Short name of the error variant, used in verbose diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Usage(_) => "Usage",
            Self::UnparsableInput { .. } => "UnparsableInput",
            Self::Parse(_) => "Parse",
            Self::UnsupportedSpec(_) => "UnsupportedSpec",
            Self::Render(_) => "Render",
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::TomlParse(_) => "TomlParse",
        }
    }

    /// Extra lines printed under the main message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::UnparsableInput { attempts } => Some(
                attempts
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Self::FileRead { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnparsableInput { .. } => {
                Some("pass --format=json, ndjson, csv or textRows to see the parser error")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SvegaError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
