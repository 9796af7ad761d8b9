//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use super::format::html_escape;

/// Fill used when the spec does not set `mark.color` (Vega's default blue).
pub const DEFAULT_MARK_COLOR: &str = "#4c78a8";

/// A CSS color value written into `fill`/`stroke` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#4c78a8")
    Hex(String),
    /// Any other CSS color (e.g., "steelblue", "rgb(0,0,0)")
    Named(String),
}

impl ChartColor {
    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Classify a color string taken from a spec.
    #[must_use]
    pub fn parse(color: &str) -> Self {
        if color.starts_with('#') {
            Self::Hex(color.to_string())
        } else {
            Self::Named(color.to_string())
        }
    }

    #[must_use]
    pub fn mark_default() -> Self {
        Self::hex(DEFAULT_MARK_COLOR)
    }

    #[must_use]
    pub fn axis() -> Self {
        Self::hex("#888888")
    }

    #[must_use]
    pub fn text() -> Self {
        Self::hex("#333333")
    }

    /// Convert to a CSS value string, escaped for an attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(value) | Self::Named(value) => html_escape(value),
        }
    }
}

impl Default for ChartColor {
    fn default() -> Self {
        Self::mark_default()
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
