use std::io::Write;
use std::path::Path;

use clap::Parser;
use clap::error::ErrorKind;

use svega::cli::Cli;
use svega::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use svega::input::read_stdin;
use svega::output::{Diagnostics, ErrorOutput};
use svega::pipeline::{self, Invocation};
use svega::{EXIT_FAILURE, EXIT_SUCCESS, SvegaError};

fn main() {
    let exit_code = match Cli::try_parse() {
        Ok(cli) => run(&cli),
        Err(e) => handle_parse_error(&e),
    };

    std::process::exit(exit_code);
}

fn handle_parse_error(e: &clap::Error) -> i32 {
    if e.kind() == ErrorKind::DisplayVersion {
        let _ = e.print();
        return EXIT_SUCCESS;
    }

    let rendered = e.to_string();
    let hint = rendered
        .lines()
        .next()
        .map(|line| line.trim_start_matches("error: "));
    ErrorOutput::stderr().print_usage(hint);
    EXIT_FAILURE
}

fn run(cli: &Cli) -> i32 {
    let diagnostics = Diagnostics::new(cli.verbose);

    if cli.help {
        ErrorOutput::stderr().print_usage(None);
        return EXIT_FAILURE;
    }

    match run_impl(cli, diagnostics) {
        Ok(svg) => {
            let mut stdout = std::io::stdout().lock();
            if writeln!(stdout, "{svg}").and_then(|()| stdout.flush()).is_err() {
                return EXIT_FAILURE;
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            report_error(&e, diagnostics);
            EXIT_FAILURE
        }
    }
}

fn run_impl(cli: &Cli, diagnostics: Diagnostics) -> svega::Result<String> {
    // 1. Locate the spec
    let spec_path = cli
        .spec
        .clone()
        .ok_or_else(|| SvegaError::Usage("can't find spec".to_string()))?;

    // 2. Load configuration
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;
    if let Some(source) = &loaded.source {
        diagnostics.note(1, format_args!("using config {}", source.display()));
    }
    let config = loaded.config;

    // 3. CLI flags override config values
    let invocation = Invocation {
        spec_path,
        format: cli.format_hint().unwrap_or(config.input.format),
        renderer: cli.renderer.unwrap_or(config.render.renderer),
    };
    diagnostics.note(
        1,
        format_args!(
            "format {}, renderer {:?}",
            invocation.format, invocation.renderer
        ),
    );

    // 4. Load spec and stdin, normalize, resolve, render
    let rendered = pipeline::run(&invocation, &config.render, read_stdin, diagnostics)?;
    Ok(rendered.svg)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> svega::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn report_error(e: &SvegaError, diagnostics: Diagnostics) {
    diagnostics.note(1, format_args!("failed with {} error", e.error_type()));

    let output = ErrorOutput::stderr();
    if e.is_usage() {
        output.print_usage(Some(&e.to_string()));
    } else {
        output.print_crash(&e.to_string(), e.detail().as_deref(), e.suggestion());
    }
}
