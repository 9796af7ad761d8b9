use std::path::Path;

use super::mock_fs::MockFileSystem;
use crate::SvegaError;
use crate::config::{ConfigLoader, FileConfigLoader};

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.svega.toml", "[input\nformat = ");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, SvegaError::TomlParse(_)));
}

#[test]
fn unknown_table_is_rejected() {
    let fs = MockFileSystem::new().with_file("/cfg.toml", "[output]\ncolor = true");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg.toml"))
        .unwrap_err();
    assert!(matches!(err, SvegaError::TomlParse(_)));
}

#[test]
fn explicit_path_records_source() {
    let fs = MockFileSystem::new().with_file("/cfg.toml", "[render]\nwidth = 800.0");
    let result = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg.toml"))
        .unwrap();

    assert_eq!(result.source.as_deref(), Some(Path::new("/cfg.toml")));
    assert!((result.config.render.width - 800.0).abs() < f64::EPSILON);
}
