//! Rendering collaborator seam.
//!
//! A [`Renderer`] turns a normalized spec plus the dataset bound to its
//! primary source into an SVG document.

mod builtin;
mod lite_view;
pub mod svg;
mod vega_cli;

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::config::RenderConfig;
use crate::error::{Result, SvegaError};
use crate::input::Dataset;
use crate::spec::{ChartSpec, DataSourceName};

pub use builtin::BuiltinRenderer;
pub use lite_view::{LiteView, extract_points};
pub use vega_cli::VegaCliRenderer;

/// The dataset and the data source name it is injected under.
#[derive(Debug, Clone, Copy)]
pub struct DataBinding<'a> {
    pub name: &'a DataSourceName,
    pub dataset: &'a Dataset,
}

/// Renders a normalized spec to SVG.
pub trait Renderer {
    /// # Errors
    /// Returns [`SvegaError::Render`] when the spec cannot be drawn with the
    /// bound data.
    fn render(&self, spec: &ChartSpec, binding: &DataBinding<'_>) -> Result<String>;
}

/// Renderer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RendererKind {
    /// Built-in drawing of single-view Vega-Lite bar/line/area/point charts
    #[default]
    Builtin,
    /// External `vl2svg` / `vg2svg` commands from the Vega toolchain
    VegaCli,
}

#[must_use]
pub fn build_renderer(kind: RendererKind, config: &RenderConfig) -> Box<dyn Renderer> {
    match kind {
        RendererKind::Builtin => Box::new(BuiltinRenderer::new(config.width, config.height)),
        RendererKind::VegaCli => Box::new(VegaCliRenderer::new(&config.vl2svg, &config.vg2svg)),
    }
}

/// Copy of the spec document with the dataset stored as `values` on the
/// data source named by the binding.
///
/// # Errors
/// Returns [`SvegaError::Render`] when no data source carries that name.
pub fn inline_dataset(spec: &ChartSpec, binding: &DataBinding<'_>) -> Result<Value> {
    let mut document = spec.to_value();
    let name = binding.name.as_str();

    let target = match document.get_mut("data") {
        Some(Value::Array(sources)) => sources.iter_mut().find(|s| has_name(s, name)),
        Some(source) if has_name(source, name) => Some(source),
        _ => None,
    };

    let Some(Value::Object(source)) = target else {
        return Err(SvegaError::Render(format!(
            "data source '{name}' not found in spec"
        )));
    };
    source.insert(
        "values".to_string(),
        Value::Array(binding.dataset.to_values()),
    );

    Ok(document)
}

fn has_name(source: &Value, name: &str) -> bool {
    source.get("name").and_then(Value::as_str) == Some(name)
}

/// Collapses a rendered document onto one line.
///
/// Line breaks between tags are dropped; any other line break (inside a tag
/// or in text) becomes a single space.
#[must_use]
pub fn to_single_line(svg: &str) -> String {
    let mut output = String::with_capacity(svg.len());
    for line in svg.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !output.is_empty() && !(output.ends_with('>') && line.starts_with('<')) {
            output.push(' ');
        }
        output.push_str(line);
    }
    output
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
