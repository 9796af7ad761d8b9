//! Format Resolver: turns a raw stdin payload into a [`Dataset`].
//!
//! Formats are not self-describing on stdin, so `auto` tries each concrete
//! parser in a fixed order and keeps the first success. Text rows come last
//! because they accept anything.

mod dataset;
mod format;
mod parsers;
mod payload;
mod resolver;

pub use dataset::Dataset;
pub use format::FormatKind;
pub use parsers::{
    ParseError, parse_csv, parse_delimited_csv, parse_json, parse_ndjson, parse_text_rows,
};
pub use payload::{RawPayload, read_payload, read_stdin};
pub use resolver::{AUTO_ORDER, Resolved, resolve};
