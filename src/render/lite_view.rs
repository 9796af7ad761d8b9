//! Reads the subset of a Vega-Lite view the builtin renderer can draw.

use serde_json::{Map, Value};

use crate::error::{Result, SvegaError};

use super::svg::{ChartColor, DataPoint, MarkType};

/// View keys that compose several charts; none are drawable here.
const COMPOSITE_KEYS: &[&str] = &["layer", "concat", "hconcat", "vconcat", "facet", "repeat"];

/// Encoding channels the builtin renderer draws.
const POSITION_CHANNELS: &[&str] = &["x", "y"];

/// Channel definition keys that do not change what is drawn.
const CHANNEL_KEYS: &[&str] = &["field", "type", "title"];

/// A single-view Vega-Lite chart reduced to what the builtin renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteView {
    pub mark: MarkType,
    pub x_field: String,
    pub y_field: String,
    pub title: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<ChartColor>,
}

impl LiteView {
    /// # Errors
    /// Returns [`SvegaError::Render`] for composite views, transforms, missing
    /// or unsupported marks, missing x/y field encodings, and any encoding
    /// channel or channel property beyond a plain x/y field.
    pub fn from_document(document: &Map<String, Value>) -> Result<Self> {
        if let Some(key) = COMPOSITE_KEYS.iter().find(|k| document.contains_key(**k)) {
            return Err(unsupported(format!("composite view '{key}'")));
        }
        if document.contains_key("transform") {
            return Err(unsupported("transform".to_string()));
        }

        let (mark, color) = parse_mark(document.get("mark"))?;
        check_encoding(document.get("encoding"))?;

        Ok(Self {
            mark,
            x_field: encoding_field(document, "x")?,
            y_field: encoding_field(document, "y")?,
            title: parse_title(document.get("title")),
            width: document.get("width").and_then(Value::as_f64),
            height: document.get("height").and_then(Value::as_f64),
            color,
        })
    }
}

/// Pairs each record's x label with its numeric y value.
///
/// Rows with a missing or non-numeric y value are dropped, as Vega drops
/// invalid values from quantitative scales.
///
/// # Errors
/// Returns [`SvegaError::Render`] when a field appears in none of the records.
pub fn extract_points(view: &LiteView, values: &[Value]) -> Result<Vec<DataPoint>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    for field in [&view.x_field, &view.y_field] {
        if !values.iter().any(|v| v.get(field.as_str()).is_some()) {
            return Err(SvegaError::Render(format!(
                "unresolvable field reference '{field}'"
            )));
        }
    }

    let points = values
        .iter()
        .filter_map(|record| {
            let label = label_of(record.get(view.x_field.as_str())?)?;
            let value = number_of(record.get(view.y_field.as_str())?)?;
            Some(DataPoint::new(label, value))
        })
        .collect();

    Ok(points)
}

fn parse_mark(mark: Option<&Value>) -> Result<(MarkType, Option<ChartColor>)> {
    let (name, color) = match mark {
        Some(Value::String(name)) => (name.as_str(), None),
        Some(Value::Object(def)) => (
            def.get("type").and_then(Value::as_str).unwrap_or_default(),
            def.get("color").and_then(Value::as_str).map(ChartColor::parse),
        ),
        _ => return Err(SvegaError::Render("spec has no mark".to_string())),
    };

    let mark = match name {
        "bar" => MarkType::Bar,
        "line" => MarkType::Line,
        "area" => MarkType::Area,
        "point" | "circle" => MarkType::Point,
        other => return Err(unsupported(format!("mark '{other}'"))),
    };
    Ok((mark, color))
}

/// Rejects channels and channel properties that would change the chart.
fn check_encoding(encoding: Option<&Value>) -> Result<()> {
    let Some(Value::Object(channels)) = encoding else {
        return Ok(());
    };

    for (channel, definition) in channels {
        if !POSITION_CHANNELS.contains(&channel.as_str()) {
            return Err(unsupported(format!("encoding channel '{channel}'")));
        }
        if let Value::Object(properties) = definition
            && let Some(key) = properties
                .keys()
                .find(|key| !CHANNEL_KEYS.contains(&key.as_str()))
        {
            return Err(unsupported(format!("encoding.{channel}.{key}")));
        }
    }
    Ok(())
}

fn encoding_field(document: &Map<String, Value>, channel: &str) -> Result<String> {
    document
        .get("encoding")
        .and_then(|e| e.get(channel))
        .and_then(|c| c.get("field"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SvegaError::Render(format!("encoding.{channel}.field is required")))
}

fn parse_title(title: Option<&Value>) -> Option<String> {
    match title? {
        Value::String(text) => Some(text.clone()),
        Value::Object(def) => def.get("text").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn label_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn unsupported(what: String) -> SvegaError {
    SvegaError::Render(format!("{what} is not supported by the builtin renderer"))
}

#[cfg(test)]
#[path = "lite_view_tests.rs"]
mod tests;
