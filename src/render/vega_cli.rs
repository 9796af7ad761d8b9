use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Result, SvegaError};
use crate::spec::{ChartSpec, Dialect};

use super::{DataBinding, Renderer, inline_dataset};

/// Renders through the Vega command-line tools.
///
/// The spec, with the dataset inlined as `values`, is written to the tool's
/// stdin and the SVG is read from its stdout.
#[derive(Debug, Clone)]
pub struct VegaCliRenderer {
    vl2svg: String,
    vg2svg: String,
}

impl VegaCliRenderer {
    #[must_use]
    pub fn new(vl2svg: &str, vg2svg: &str) -> Self {
        Self {
            vl2svg: vl2svg.to_string(),
            vg2svg: vg2svg.to_string(),
        }
    }

    fn program(&self, dialect: Dialect) -> &str {
        match dialect {
            Dialect::Lite => &self.vl2svg,
            Dialect::Vega => &self.vg2svg,
        }
    }
}

impl Renderer for VegaCliRenderer {
    fn render(&self, spec: &ChartSpec, binding: &DataBinding<'_>) -> Result<String> {
        let program = self.program(spec.dialect());
        let input = serde_json::to_vec(&inline_dataset(spec, binding)?)?;

        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SvegaError::Render(format!("failed to start {program}: {e}")))?;

        // Feed stdin from a separate thread so a full stdout pipe cannot block the write
        let stdin = child.stdin.take();
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut pipe) => pipe.write_all(&input),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));
            (written, output)
        });
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SvegaError::Render(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        // A closed pipe only matters if the tool also failed
        if let Err(e) = written
            && e.kind() != std::io::ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        String::from_utf8(output.stdout)
            .map_err(|e| SvegaError::Render(format!("{program} produced invalid UTF-8: {e}")))
    }
}

#[cfg(all(test, unix))]
#[path = "vega_cli_tests.rs"]
mod tests;
