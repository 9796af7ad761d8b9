#![allow(dead_code)]
#![allow(deprecated)] // cargo_bin deprecation - still works fine

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v4.json";
pub const VEGA_SCHEMA: &str = "https://vega.github.io/schema/vega/v5.json";

/// Bar chart over fields `a` (x) and `b` (y).
pub const BAR_SPEC: &str = r#"{
  "$schema": "https://vega.github.io/schema/vega-lite/v4.json",
  "data": {"url": "data/example.csv"},
  "mark": "bar",
  "encoding": {
    "x": {"field": "a", "type": "nominal"},
    "y": {"field": "b", "type": "quantitative"}
  }
}"#;

/// An `assert_cmd` Command for the svega binary.
pub fn svega() -> Command {
    Command::cargo_bin("svega").expect("binary should exist")
}

/// Temporary directory holding spec and config files.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Writes a file and returns its absolute path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn bar_spec(&self) -> PathBuf {
        self.create_file("bar.vl.json", BAR_SPEC)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
