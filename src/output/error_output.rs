//! Error output on stderr.
//!
//! Two shapes: the usage block for bad invocations, and the `SVEGA:` crash
//! line for everything else.

use std::io::{IsTerminal, Write};

use super::ansi;

/// Usage text printed for `--help` and every usage error.
pub const USAGE: &str = "\
svega [opts] <spec.vl.json|spec.vg.json> < data

   stdin must be data, stdout will be svg or empty

   OPTIONS:
     --format=[auto],json,ndjson,csv,textRows
     --renderer=[builtin],vega-cli
     -c, --config <PATH>   read configuration from PATH
     --no-config           ignore .svega.toml and the user config
     -v, --verbose         print pipeline decisions (-vv for more)";

const CRASH_PREFIX: &str = "SVEGA:";

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org/
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints the crash line with optional detail and suggestion.
    pub fn print_crash(&self, message: &str, detail: Option<&str>, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_crash(&mut stderr, message, detail, suggestion);
    }

    /// Prints an optional hint followed by the usage text.
    pub fn print_usage(&self, hint: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_usage(&mut stderr, hint);
    }

    /// Writes the crash line to a writer.
    ///
    /// Format: `SVEGA: {message}`
    ///         `  × {detail line}` (one per line of detail)
    ///         `  help: {suggestion}` (optional)
    pub fn write_crash<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored; there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}{CRASH_PREFIX}{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "{CRASH_PREFIX} {message}");
        }

        for line in detail.into_iter().flat_map(str::lines) {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {line}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {line}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes the usage block to a writer.
    pub fn write_usage<W: Write>(&self, w: &mut W, hint: Option<&str>) {
        if let Some(h) = hint {
            if self.use_colors {
                let _ = writeln!(w, "{}{h}{}", ansi::YELLOW, ansi::RESET);
            } else {
                let _ = writeln!(w, "{h}");
            }
            let _ = writeln!(w);
        }
        let _ = writeln!(w, "{USAGE}");
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
