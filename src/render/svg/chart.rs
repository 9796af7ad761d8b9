//! Single-view cartesian chart: one mark type over x categories and y values.

use super::builder::SvgBuilder;
use super::data::{DataPoint, LinearScale};
use super::element::{Axis, Bar, Label, Line, Point, SvgElement};
use super::format::format_value;
use super::style::ChartColor;

/// Mark types the chart can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkType {
    Bar,
    Line,
    Area,
    Point,
}

/// Plot margins in pixels.
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 32.0;
const MARGIN_BOTTOM: f64 = 48.0;
const Y_TICKS: u32 = 4;

/// Chart with automatic zero-based y scaling and banded x positions.
///
/// `width` and `height` size the plot area, as Vega-Lite's do; margins for
/// axes and the title are added around it.
#[derive(Debug)]
pub struct MarkChart {
    pub mark: MarkType,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
}

impl MarkChart {
    #[must_use]
    pub fn new(mark: MarkType, data: Vec<DataPoint>) -> Self {
        Self {
            mark,
            title: String::new(),
            x_title: String::new(),
            y_title: String::new(),
            data,
            width: 400.0,
            height: 200.0,
            color: ChartColor::mark_default(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    /// Center of band `index` on the x axis, in plot coordinates.
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn band_center(&self, index: usize) -> f64 {
        let band = self.width / self.data.len() as f64;
        band.mul_add(index as f64 + 0.5, MARGIN_LEFT)
    }

    fn y_position(&self, scale: &LinearScale, value: f64) -> f64 {
        let baseline = MARGIN_TOP + self.height;
        scale.fraction(value).mul_add(-self.height, baseline)
    }

    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn x_axis(&self) -> Axis {
        let count = self.data.len() as f64;
        let labels = self
            .data
            .iter()
            .enumerate()
            .map(|(i, point)| ((i as f64 + 0.5) / count, point.label.clone()))
            .collect();

        let axis = Axis::horizontal(MARGIN_LEFT, MARGIN_TOP + self.height, self.width)
            .with_labels(labels);
        if self.x_title.is_empty() {
            axis
        } else {
            axis.with_title(self.x_title.clone())
        }
    }

    fn y_axis(&self, scale: &LinearScale) -> Axis {
        let labels = scale
            .ticks(Y_TICKS)
            .into_iter()
            .map(|tick| (scale.fraction(tick), format_value(tick)))
            .collect();

        let axis =
            Axis::vertical(MARGIN_LEFT, MARGIN_TOP + self.height, self.height).with_labels(labels);
        if self.y_title.is_empty() {
            axis
        } else {
            axis.with_title(self.y_title.clone())
        }
    }

    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn bars(&self, scale: &LinearScale) -> Vec<Bar> {
        let band = self.width / self.data.len() as f64;
        let bar_width = band * 0.8;
        let zero_y = self.y_position(scale, 0.0);

        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let value_y = self.y_position(scale, point.value);
                Bar {
                    x: band.mul_add(i as f64, MARGIN_LEFT) + band * 0.1,
                    y: value_y.min(zero_y),
                    width: bar_width,
                    height: (value_y - zero_y).abs(),
                    color: self.color.clone(),
                    label: point.label.clone(),
                    value: format_value(point.value),
                }
            })
            .collect()
    }

    fn positions(&self, scale: &LinearScale) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| (self.band_center(i), self.y_position(scale, point.value)))
            .collect()
    }

    fn outer_size(&self) -> (f64, f64) {
        (
            MARGIN_LEFT + self.width + MARGIN_RIGHT,
            MARGIN_TOP + self.height + MARGIN_BOTTOM,
        )
    }
}

impl SvgElement for MarkChart {
    fn render(&self) -> String {
        let (outer_width, outer_height) = self.outer_size();
        let mut builder = SvgBuilder::new(outer_width, outer_height)
            .with_title(self.title.clone())
            .with_background("white");

        if !self.title.is_empty() {
            let heading = Label::centered(outer_width / 2.0, MARGIN_TOP / 2.0 + 4.0, &self.title)
                .with_font_size(13.0)
                .bold();
            builder = builder.push_element(&heading);
        }

        if self.data.is_empty() {
            let empty = Label::centered(outer_width / 2.0, outer_height / 2.0, "No data available");
            return builder.push_element(&empty).build();
        }

        let scale = LinearScale::zero_based(&self.data);
        builder = builder
            .push_element(&self.y_axis(&scale))
            .push_element(&self.x_axis());

        match self.mark {
            MarkType::Bar => {
                for bar in self.bars(&scale) {
                    builder = builder.push_element(&bar);
                }
            }
            MarkType::Line => {
                let line = Line::new(self.positions(&scale), self.color.clone());
                builder = builder.push_element(&line);
            }
            MarkType::Area => {
                let zero_y = self.y_position(&scale, 0.0);
                let area = Line::new(self.positions(&scale), self.color.clone()).with_area(zero_y);
                builder = builder.push_element(&area);
            }
            MarkType::Point => {
                for ((x, y), data) in self.positions(&scale).into_iter().zip(&self.data) {
                    let point = Point {
                        x,
                        y,
                        radius: 3.5,
                        color: self.color.clone(),
                        label: data.label.clone(),
                        value: format_value(data.value),
                    };
                    builder = builder.push_element(&point);
                }
            }
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
