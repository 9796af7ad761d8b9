use serde::Deserialize;

use crate::input::FormatKind;
use crate::render::RendererKind;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Contents of `.svega.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional schema version; only [`CONFIG_VERSION`] is accepted.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// `[input]` table.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: FormatKind,
}

/// `[render]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Renderer used when `--renderer` is not given.
    #[serde(default)]
    pub renderer: RendererKind,

    /// Builtin renderer plot width when the spec sets none.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Builtin renderer plot height when the spec sets none.
    #[serde(default = "default_height")]
    pub height: f64,

    /// Command rendering Vega-Lite specs for the vega-cli renderer.
    #[serde(default = "default_vl2svg")]
    pub vl2svg: String,

    /// Command rendering Vega specs for the vega-cli renderer.
    #[serde(default = "default_vg2svg")]
    pub vg2svg: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            renderer: RendererKind::default(),
            width: default_width(),
            height: default_height(),
            vl2svg: default_vl2svg(),
            vg2svg: default_vg2svg(),
        }
    }
}

const fn default_width() -> f64 {
    400.0
}

const fn default_height() -> f64 {
    200.0
}

fn default_vl2svg() -> String {
    "vl2svg".to_string()
}

fn default_vg2svg() -> String {
    "vg2svg".to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
