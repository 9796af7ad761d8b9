mod common;

use common::{TestFixture, VEGA_SCHEMA, svega};
use predicates::prelude::*;

// ============================================================================
// Successful renders
// ============================================================================

#[test]
fn csv_input_renders_single_line_svg() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("a,b\nx,1\ny,2\nz,3\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<svg"))
        .stdout(predicate::str::ends_with("</svg>\n"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 1));
}

#[test]
fn json_array_input_renders() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin(r#"[{"a": "x", "b": 4}, {"a": "y", "b": 7}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>x: 4</title>"))
        .stdout(predicate::str::contains("<title>y: 7</title>"));
}

#[test]
fn ndjson_input_renders() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("{\"a\": \"x\", \"b\": 4}\n{\"a\": \"y\", \"b\": 7}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>y: 7</title>"));
}

#[test]
fn text_rows_bind_to_data_field() {
    let fixture = TestFixture::new();
    let spec = fixture.create_file(
        "rows.vl.json",
        r#"{
          "$schema": "https://vega.github.io/schema/vega-lite/v5.json",
          "mark": "point",
          "encoding": {"x": {"field": "data"}, "y": {"field": "data"}}
        }"#,
    );

    svega()
        .arg("--no-config")
        .arg("--format=textRows")
        .arg(&spec)
        .write_stdin("10\n20\n30\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<circle"));
}

#[test]
fn unknown_format_value_falls_back_to_auto() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg("--format=xml")
        .arg(&spec)
        .write_stdin("a,b\nx,1\n")
        .assert()
        .success();
}

#[test]
fn verbose_reports_detected_format() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg("-v")
        .arg(&spec)
        .write_stdin("a,b\nx,1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("svega: parsed"))
        .stderr(predicate::str::contains("as csv (1 records)"));
}

// ============================================================================
// Usage paths
// ============================================================================

#[test]
fn help_prints_usage_and_exits_one() {
    svega()
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("svega [opts]"))
        .stderr(predicate::str::contains("--format=[auto],json,ndjson,csv,textRows"));
}

#[test]
fn short_help_exits_one() {
    svega().arg("-h").assert().code(1);
}

#[test]
fn missing_spec_is_usage_error() {
    svega()
        .arg("--no-config")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("can't find spec\n\nsvega [opts]"));
}

#[test]
fn wrong_extension_is_usage_error() {
    let fixture = TestFixture::new();
    let spec = fixture.create_file("chart.json", common::BAR_SPEC);

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("a,b\nx,1\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "last argument must be a .vl.json or .vg.json file",
        ));
}

#[test]
fn unsupported_schema_is_usage_error() {
    let fixture = TestFixture::new();
    let spec = fixture.create_file(
        "old.vl.json",
        r#"{"$schema": "https://vega.github.io/schema/vega-lite/v2.json", "mark": "bar"}"#,
    );

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("a,b\nx,1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported spec"))
        .stderr(predicate::str::contains("svega [opts]"));
}

#[test]
fn unknown_flag_exits_one_not_two() {
    svega()
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("svega [opts]"));
}

#[test]
fn version_exits_zero() {
    svega()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("svega"));
}

// ============================================================================
// Crash paths
// ============================================================================

#[test]
fn explicit_format_mismatch_crashes() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg("--format=json")
        .arg(&spec)
        .write_stdin("a,b\nx,1\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("SVEGA: json:"));
}

#[test]
fn unresolvable_field_crashes_without_output() {
    let fixture = TestFixture::new();
    let spec = fixture.bar_spec();

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("c,d\nx,1\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "SVEGA: render error: unresolvable field reference 'a'",
        ));
}

#[test]
fn vega_spec_needs_external_renderer() {
    let fixture = TestFixture::new();
    let spec = fixture.create_file(
        "scene.vg.json",
        &format!(r#"{{"$schema": "{VEGA_SCHEMA}", "marks": []}}"#),
    );

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("a,b\nx,1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--renderer=vega-cli"));
}

#[test]
fn missing_spec_file_crashes() {
    let fixture = TestFixture::new();

    svega()
        .arg("--no-config")
        .arg(fixture.path().join("absent.vl.json"))
        .write_stdin("a,b\nx,1\n")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("SVEGA: Failed to read file"));
}

#[test]
fn builtin_renderer_rejects_aggregated_encoding() {
    let fixture = TestFixture::new();
    let spec = fixture.create_file(
        "summed.vl.json",
        r#"{
          "$schema": "https://vega.github.io/schema/vega-lite/v4.json",
          "mark": "bar",
          "encoding": {
            "x": {"field": "k", "type": "nominal"},
            "y": {"field": "v", "aggregate": "sum", "type": "quantitative"},
            "color": {"field": "k"}
          }
        }"#,
    );

    svega()
        .arg("--no-config")
        .arg(&spec)
        .write_stdin("k,v\na,1\na,2\nb,3\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not supported by the builtin renderer"));
}
