//! Spec Normalizer: rebinds a chart spec's primary data source to the
//! in-memory dataset.

mod chart_spec;
mod dialect;

pub use chart_spec::{ChartSpec, DataSourceName};
pub use dialect::Dialect;
