use std::fmt::Display;
use std::io::Write;

/// Verbosity-gated notes on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbosity: u8,
}

impl Diagnostics {
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    #[must_use]
    pub const fn enabled(&self, level: u8) -> bool {
        self.verbosity >= level
    }

    /// Prints `svega: {message}` when verbosity is at least `level`.
    pub fn note(&self, level: u8, message: impl Display) {
        self.write_note(&mut std::io::stderr().lock(), level, message);
    }

    /// Writes a note to a writer (for testing).
    pub fn write_note<W: Write>(&self, w: &mut W, level: u8, message: impl Display) {
        if self.enabled(level) {
            let _ = writeln!(w, "svega: {message}");
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
