use crate::error::{Result, SvegaError};
use crate::spec::ChartSpec;

use super::lite_view::{LiteView, extract_points};
use super::svg::{ChartColor, MarkChart, SvgElement};
use super::{DataBinding, Renderer};

/// Draws single-view Vega-Lite charts without external tools.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRenderer {
    default_width: f64,
    default_height: f64,
}

impl BuiltinRenderer {
    /// Sizes apply when the spec sets no `width`/`height`.
    #[must_use]
    pub const fn new(default_width: f64, default_height: f64) -> Self {
        Self {
            default_width,
            default_height,
        }
    }
}

impl Renderer for BuiltinRenderer {
    fn render(&self, spec: &ChartSpec, binding: &DataBinding<'_>) -> Result<String> {
        let ChartSpec::Lite(document) = spec else {
            return Err(SvegaError::Render(
                "the builtin renderer only draws vega-lite specs; use --renderer=vega-cli"
                    .to_string(),
            ));
        };

        let view = LiteView::from_document(document)?;
        let points = extract_points(&view, &binding.dataset.to_values())?;

        let chart = MarkChart::new(view.mark, points)
            .with_size(
                view.width.unwrap_or(self.default_width),
                view.height.unwrap_or(self.default_height),
            )
            .with_title(view.title.clone().unwrap_or_default())
            .with_axis_titles(view.x_field.clone(), view.y_field.clone())
            .with_color(view.color.unwrap_or_else(ChartColor::mark_default));

        Ok(chart.render())
    }
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
