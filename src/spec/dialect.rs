use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SvegaError};

static SCHEMA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://vega\.github\.io/schema/(vega-lite|vega)/v(\d+)(?:\.\d+){0,2}\.json$")
        .expect("Invalid regex")
});

/// Supported Vega-Lite major versions.
const LITE_MAJORS: &[u32] = &[4, 5];
/// Supported Vega major versions.
const VEGA_MAJORS: &[u32] = &[5];

/// The two chart spec dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Declarative Vega-Lite (`*.vl.json`).
    Lite,
    /// Scene-description Vega (`*.vg.json`).
    Vega,
}

impl Dialect {
    /// Picks the dialect from a spec file name.
    ///
    /// # Errors
    /// Returns a usage error for anything but `*.vl.json` or `*.vg.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if name.ends_with(".vl.json") {
            Ok(Self::Lite)
        } else if name.ends_with(".vg.json") {
            Ok(Self::Vega)
        } else {
            Err(SvegaError::Usage(
                "last argument must be a .vl.json or .vg.json file".to_string(),
            ))
        }
    }

    /// Picks the dialect from a `$schema` identifier such as
    /// `https://vega.github.io/schema/vega-lite/v4.json`.
    ///
    /// # Errors
    /// Returns [`SvegaError::UnsupportedSpec`] for unknown URLs and unsupported major versions.
    pub fn from_schema(schema: &str) -> Result<Self> {
        let unsupported = || SvegaError::UnsupportedSpec(format!("unrecognized $schema '{schema}'"));

        let caps = SCHEMA_PATTERN.captures(schema).ok_or_else(unsupported)?;
        let major: u32 = caps[2].parse().map_err(|_| unsupported())?;

        match &caps[1] {
            "vega-lite" if LITE_MAJORS.contains(&major) => Ok(Self::Lite),
            "vega" if VEGA_MAJORS.contains(&major) => Ok(Self::Vega),
            _ => Err(unsupported()),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lite => "vega-lite",
            Self::Vega => "vega",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "dialect_tests.rs"]
mod tests;
