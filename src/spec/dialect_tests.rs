use std::path::PathBuf;

use super::*;

#[test]
fn path_extension_selects_dialect() {
    assert_eq!(
        Dialect::from_path(&PathBuf::from("charts/bar.vl.json")).unwrap(),
        Dialect::Lite
    );
    assert_eq!(
        Dialect::from_path(&PathBuf::from("scene.VG.JSON")).unwrap(),
        Dialect::Vega
    );
}

#[test]
fn other_extensions_are_usage_errors() {
    for name in ["chart.json", "chart.vl.yaml", "vl.json", "chart"] {
        let err = Dialect::from_path(&PathBuf::from(name)).unwrap_err();
        assert!(err.is_usage(), "{name} should be rejected");
    }
}

#[test]
fn vega_lite_v4_schema_is_lite() {
    assert_eq!(
        Dialect::from_schema("https://vega.github.io/schema/vega-lite/v4.json").unwrap(),
        Dialect::Lite
    );
}

#[test]
fn patch_versioned_schemas_are_accepted() {
    assert_eq!(
        Dialect::from_schema("https://vega.github.io/schema/vega-lite/v5.17.0.json").unwrap(),
        Dialect::Lite
    );
    assert_eq!(
        Dialect::from_schema("https://vega.github.io/schema/vega/v5.json").unwrap(),
        Dialect::Vega
    );
}

#[test]
fn unsupported_versions_are_rejected() {
    for schema in [
        "https://vega.github.io/schema/vega-lite/v2.json",
        "https://vega.github.io/schema/vega/v3.0.json",
        "https://example.com/schema/vega-lite/v4.json",
        "",
    ] {
        let err = Dialect::from_schema(schema).unwrap_err();
        assert!(matches!(err, SvegaError::UnsupportedSpec(_)), "{schema}");
    }
}
