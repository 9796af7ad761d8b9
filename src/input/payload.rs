use std::io::{IsTerminal, Read};

use crate::error::{Result, SvegaError};

/// Stdin contents, read to completion and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawPayload(String);

impl RawPayload {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads `reader` to the end and trims surrounding whitespace.
///
/// # Errors
/// Returns an error if reading fails or the bytes are not UTF-8.
pub fn read_payload<R: Read>(mut reader: R) -> Result<RawPayload> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(RawPayload::new(&text))
}

/// Reads the data payload from stdin.
///
/// # Errors
/// Returns a usage error when stdin is an interactive terminal, otherwise any
/// error from [`read_payload`].
pub fn read_stdin() -> Result<RawPayload> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(SvegaError::Usage("must pass in data to stdin".to_string()));
    }
    read_payload(stdin.lock())
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
