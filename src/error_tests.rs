use std::path::PathBuf;

use super::*;
use crate::input::FormatKind;

#[test]
fn error_display_usage_is_bare_hint() {
    let err = SvegaError::Usage("can't find spec".to_string());
    assert_eq!(err.to_string(), "can't find spec");
}

#[test]
fn error_display_unparsable_input() {
    let err = SvegaError::UnparsableInput { attempts: vec![] };
    assert_eq!(err.to_string(), "could not parse input");
}

#[test]
fn error_display_file_read() {
    let err = SvegaError::FileRead {
        path: PathBuf::from("chart.vl.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("chart.vl.json"));
    assert_eq!(err.detail().as_deref(), Some("file not found"));
}

#[test]
fn usage_path_covers_usage_and_unsupported_spec() {
    assert!(SvegaError::Usage("x".to_string()).is_usage());
    assert!(SvegaError::UnsupportedSpec("x".to_string()).is_usage());
    assert!(!SvegaError::Render("x".to_string()).is_usage());
    assert!(!SvegaError::UnparsableInput { attempts: vec![] }.is_usage());
}

#[test]
fn unparsable_input_detail_lists_attempts() {
    let err = SvegaError::UnparsableInput {
        attempts: vec![
            ParseError::new(FormatKind::Json, "expected value at line 1 column 1"),
            ParseError::new(FormatKind::Csv, "header has a single field"),
        ],
    };

    let detail = err.detail().unwrap();
    assert!(detail.contains("json: expected value"));
    assert!(detail.contains("csv: header has a single field"));
    assert!(err.suggestion().is_some());
}

#[test]
fn parse_error_is_transparent() {
    let err: SvegaError = ParseError::new(FormatKind::Ndjson, "line 2: bad").into();
    assert_eq!(err.to_string(), "ndjson: line 2: bad");
    assert_eq!(err.error_type(), "Parse");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(SvegaError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        SvegaError::UnsupportedSpec("x".to_string()).error_type(),
        "UnsupportedSpec"
    );
}
