//! Primitive SVG elements: axes, bars, lines, points, and text labels.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// Label positions are fractions of the axis length, `0.0` at the origin.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub title: Option<String>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            title: None,
            color: ChartColor::axis(),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }

    fn render_title(&self, output: &mut String, color: &str) {
        let Some(title) = &self.title else {
            return;
        };
        let escaped = html_escape(title);
        let _ = match self.orientation {
            AxisOrientation::Horizontal => writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="middle" fill="{color}" font-size="{}" font-weight="bold">{escaped}</text>"#,
                self.x + self.length / 2.0,
                self.font_size.mul_add(2.0, self.y + self.tick_length + 6.0),
                self.font_size + 1.0
            ),
            AxisOrientation::Vertical => {
                let cx = self.x - 36.0;
                let cy = self.y - self.length / 2.0;
                writeln!(
                    output,
                    r#"<text x="{cx}" y="{cy}" text-anchor="middle" fill="{color}" font-size="{}" font-weight="bold" transform="rotate(-90 {cx} {cy})">{escaped}</text>"#,
                    self.font_size + 1.0
                )
            }
        };
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        // Main axis line
        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        // Ticks and labels
        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }

        self.render_title(&mut output, &ChartColor::text().to_css());
        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: String,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        let escaped_value = html_escape(&self.value);
        // Accessibility: title element for screen readers and hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}">
    <title>{escaped_label}: {escaped_value}</title>
</rect>"#,
            self.x, self.y, self.width, self.height
        )
    }
}

/// A polyline, optionally filled down to a baseline (area marks).
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub fill: bool,
    pub fill_opacity: f64,
    /// Y-coordinate of the baseline for fill area. Required when `fill=true`.
    /// In SVG coordinates, higher values are lower on screen.
    pub baseline_y: Option<f64>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            fill: false,
            fill_opacity: 0.7,
            baseline_y: None,
        }
    }

    /// Fill the area between the line and `baseline_y`.
    #[must_use]
    pub const fn with_area(mut self, baseline_y: f64) -> Self {
        self.fill = true;
        self.baseline_y = Some(baseline_y);
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i == 0 {
                let _ = write!(path, "M{x},{y}");
            } else {
                let _ = write!(path, " L{x},{y}");
            }
        }

        let mut output = String::new();

        // Fill is skipped when there is no baseline to close the path against
        if self.fill
            && self.points.len() >= 2
            && let Some(baseline_y) = self.baseline_y
        {
            let first_x = self.points[0].0;
            let last_x = self.points[self.points.len() - 1].0;
            let mut fill_path = path.clone();
            let _ = write!(
                fill_path,
                " L{last_x},{baseline_y} L{first_x},{baseline_y} Z"
            );
            let _ = writeln!(
                output,
                r#"<path d="{fill_path}" fill="{color}" fill-opacity="{}" stroke="none"/>"#,
                self.fill_opacity
            );
        }

        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width
        );

        output
    }
}

/// A point mark with a hover title.
#[derive(Debug, Clone)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: String,
}

impl SvgElement for Point {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        let escaped_value = html_escape(&self.value);
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{color}" stroke-width="2">
    <title>{escaped_label}: {escaped_value}</title>
</circle>"#,
            self.x, self.y, self.radius
        )
    }
}

/// A free-standing text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub bold: bool,
}

impl Label {
    #[must_use]
    pub fn centered(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor: TextAnchor::Middle,
            font_size: 12.0,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let color = ChartColor::text();
        let weight = if self.bold { r#" font-weight="bold""# } else { "" };
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}"{weight}>{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
