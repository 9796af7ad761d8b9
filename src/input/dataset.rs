use serde_json::{Map, Value};

/// Structured result of parsing the stdin payload.
///
/// Never mutated once a parser has produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// Keyed records (or, for JSON input, whatever values the document held).
    Records(Vec<Value>),
    /// Opaque text rows.
    Lines(Vec<String>),
}

impl Dataset {
    /// Wraps a whole JSON document: arrays contribute their elements, any
    /// other value becomes a single record.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Records(items),
            other => Self::Records(vec![other]),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Lines(lines) => lines.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Records(_) => "records",
            Self::Lines(_) => "lines",
        }
    }

    /// Tuples as a renderer ingests them.
    ///
    /// Text rows are wrapped as `{"data": row}`, the shape Vega gives any
    /// primitive tuple.
    #[must_use]
    pub fn to_values(&self) -> Vec<Value> {
        match self {
            Self::Records(records) => records.clone(),
            Self::Lines(lines) => lines
                .iter()
                .map(|line| {
                    let mut tuple = Map::new();
                    tuple.insert("data".to_string(), Value::String(line.clone()));
                    Value::Object(tuple)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
