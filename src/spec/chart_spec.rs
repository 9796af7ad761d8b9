use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SvegaError};

use super::dialect::Dialect;

/// Name of the data source the dataset is bound to at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataSourceName(String);

impl DataSourceName {
    /// Assigned when the primary source has no name of its own.
    pub const DEFAULT: &'static str = "svega";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DataSourceName {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for DataSourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chart spec document, tagged with its dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Lite(Map<String, Value>),
    Vega(Map<String, Value>),
}

impl ChartSpec {
    /// Reads and parses a spec file; the extension picks the expected dialect.
    ///
    /// # Errors
    /// Returns a usage error for a bad extension, [`SvegaError::FileRead`] if
    /// the file cannot be read, or any error from [`ChartSpec::parse`].
    pub fn load(path: &Path) -> Result<Self> {
        let expected = Dialect::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| SvegaError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, expected)
    }

    /// Parses spec text and checks its `$schema` against `expected`.
    ///
    /// # Errors
    /// Returns a JSON error for malformed text, or [`SvegaError::UnsupportedSpec`]
    /// when the document is not an object, has no recognized `$schema`, or its
    /// schema names the other dialect.
    pub fn parse(text: &str, expected: Dialect) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value, expected)
    }

    /// # Errors
    /// See [`ChartSpec::parse`].
    pub fn from_value(value: Value, expected: Dialect) -> Result<Self> {
        let Value::Object(document) = value else {
            return Err(SvegaError::UnsupportedSpec(
                "spec must be a JSON object".to_string(),
            ));
        };

        let schema = document
            .get("$schema")
            .and_then(Value::as_str)
            .ok_or_else(|| SvegaError::UnsupportedSpec("spec has no $schema".to_string()))?;

        let dialect = Dialect::from_schema(schema)?;
        if dialect != expected {
            return Err(SvegaError::UnsupportedSpec(format!(
                "must pass a {expected} spec, found a {dialect} $schema"
            )));
        }

        Ok(match dialect {
            Dialect::Lite => Self::Lite(document),
            Dialect::Vega => Self::Vega(document),
        })
    }

    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::Lite(_) => Dialect::Lite,
            Self::Vega(_) => Dialect::Vega,
        }
    }

    #[must_use]
    pub const fn document(&self) -> &Map<String, Value> {
        match self {
            Self::Lite(document) | Self::Vega(document) => document,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.document().clone())
    }

    /// Rebinds the primary data source so the dataset can be injected by name.
    ///
    /// The primary source is the `data` object, or the first element when
    /// `data` is an array; later sources are left alone. Its `url` is removed
    /// and it keeps its name, or gets [`DataSourceName::DEFAULT`].
    ///
    /// # Errors
    /// Returns [`SvegaError::UnsupportedSpec`] when `data` is neither an object
    /// nor an array of objects.
    pub fn normalize(&mut self) -> Result<DataSourceName> {
        match self {
            Self::Lite(document) => normalize_lite(document),
            Self::Vega(document) => normalize_vega(document),
        }
    }
}

fn normalize_lite(document: &mut Map<String, Value>) -> Result<DataSourceName> {
    match document.get_mut("data") {
        Some(Value::Null) | None => {
            let name = DataSourceName::default();
            document.insert("data".to_string(), named_source(&name));
            Ok(name)
        }
        Some(declaration) => rebind_declaration(declaration),
    }
}

fn normalize_vega(document: &mut Map<String, Value>) -> Result<DataSourceName> {
    match document.get_mut("data") {
        Some(Value::Null) | None => {
            let name = DataSourceName::default();
            document.insert("data".to_string(), Value::Array(vec![named_source(&name)]));
            Ok(name)
        }
        Some(declaration) => rebind_declaration(declaration),
    }
}

fn rebind_declaration(declaration: &mut Value) -> Result<DataSourceName> {
    match declaration {
        Value::Object(source) => Ok(rebind_source(source)),
        Value::Array(sources) => {
            if sources.is_empty() {
                sources.push(Value::Object(Map::new()));
            }
            match &mut sources[0] {
                Value::Object(source) => Ok(rebind_source(source)),
                _ => Err(invalid_data()),
            }
        }
        _ => Err(invalid_data()),
    }
}

fn rebind_source(source: &mut Map<String, Value>) -> DataSourceName {
    source.shift_remove("url");

    if let Some(name) = source
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
    {
        return DataSourceName::new(name);
    }

    let name = DataSourceName::default();
    source.insert("name".to_string(), Value::String(name.to_string()));
    name
}

fn named_source(name: &DataSourceName) -> Value {
    let mut source = Map::new();
    source.insert("name".to_string(), Value::String(name.to_string()));
    Value::Object(source)
}

fn invalid_data() -> SvegaError {
    SvegaError::UnsupportedSpec("data must be an object or an array of objects".to_string())
}

#[cfg(test)]
#[path = "chart_spec_tests.rs"]
mod tests;
