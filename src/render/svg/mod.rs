//! SVG drawing primitives used by the builtin renderer.
//!
//! Output is a standalone document: explicit `width`/`height` plus a
//! `viewBox`, literal colors, and `<title>` elements for screen readers.

mod builder;
mod chart;
mod data;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use chart::{MarkChart, MarkType};
pub use data::{DataPoint, LinearScale};
pub use element::{Axis, AxisOrientation, Bar, Label, Line, Point, SvgElement};
pub use format::{format_value, html_escape};
pub use style::{ChartColor, DEFAULT_MARK_COLOR, TextAnchor};
