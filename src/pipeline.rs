//! One invocation: load the spec and the stdin payload, bind the dataset to
//! the spec's primary data source, and render.

use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::input::{FormatKind, RawPayload, resolve};
use crate::output::Diagnostics;
use crate::render::{DataBinding, RendererKind, build_renderer, to_single_line};
use crate::spec::ChartSpec;

/// Settings for a single run, after CLI and config precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub spec_path: PathBuf,
    pub format: FormatKind,
    pub renderer: RendererKind,
}

/// A successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The SVG document on a single line.
    pub svg: String,
    /// Concrete format the payload was parsed as.
    pub format: FormatKind,
    pub rows: usize,
}

/// Runs the whole pipeline.
///
/// The spec file and the payload are loaded concurrently and both must finish
/// before anything else happens. When both fail, the spec error is returned.
///
/// # Errors
/// Returns the first failure from spec loading, payload reading,
/// normalization, format resolution, or rendering.
pub fn run<F>(
    invocation: &Invocation,
    render_config: &RenderConfig,
    read_input: F,
    diagnostics: Diagnostics,
) -> Result<Rendered>
where
    F: FnOnce() -> Result<RawPayload> + Send,
{
    let (spec, payload) = rayon::join(|| ChartSpec::load(&invocation.spec_path), read_input);
    let mut spec = spec?;
    let payload = payload?;

    diagnostics.note(
        1,
        format_args!(
            "loaded {} spec from {}",
            spec.dialect(),
            invocation.spec_path.display()
        ),
    );

    let name = spec.normalize()?;
    diagnostics.note(1, format_args!("primary data source: {name}"));
    if diagnostics.enabled(2) {
        diagnostics.note(2, format_args!("normalized spec: {}", spec.to_value()));
    }

    let resolved = resolve(&payload, invocation.format)?;
    diagnostics.note(
        1,
        format_args!(
            "parsed {} bytes as {} ({} {})",
            payload.len(),
            resolved.format,
            resolved.dataset.len(),
            resolved.dataset.kind_name()
        ),
    );

    let renderer = build_renderer(invocation.renderer, render_config);
    let binding = DataBinding {
        name: &name,
        dataset: &resolved.dataset,
    };
    let svg = renderer.render(&spec, &binding)?;
    diagnostics.note(2, format_args!("rendered {} bytes of svg", svg.len()));

    Ok(Rendered {
        svg: to_single_line(&svg),
        format: resolved.format,
        rows: resolved.dataset.len(),
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
