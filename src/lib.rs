pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod spec;

pub use error::{Result, SvegaError};

pub const EXIT_SUCCESS: i32 = 0;
/// Every failure, including usage errors and `--help`.
pub const EXIT_FAILURE: i32 = 1;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
