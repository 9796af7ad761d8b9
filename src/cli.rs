use std::path::PathBuf;

use clap::Parser;

use crate::input::FormatKind;
use crate::render::RendererKind;

#[derive(Parser, Debug)]
#[command(name = "svega")]
#[command(version, about = "Render a Vega-Lite or Vega spec with data from stdin to SVG")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Chart spec file (`*.vl.json` or `*.vg.json`)
    pub spec: Option<PathBuf>,

    /// Input format: auto, json, ndjson, csv or textRows
    #[arg(long)]
    pub format: Option<String>,

    /// Renderer used to draw the chart
    #[arg(long, value_enum)]
    pub renderer: Option<RendererKind>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print usage
    #[arg(short, long)]
    pub help: bool,
}

impl Cli {
    /// The `--format` flag, with unknown values treated as `auto`.
    #[must_use]
    pub fn format_hint(&self) -> Option<FormatKind> {
        self.format.as_deref().map(FormatKind::from_arg)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
