use super::*;

fn render_crash(
    use_colors: bool,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_crash(&mut buf, message, detail, suggestion);
    String::from_utf8(buf).unwrap()
}

fn render_usage(use_colors: bool, hint: Option<&str>) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_usage(&mut buf, hint);
    String::from_utf8(buf).unwrap()
}

#[test]
fn crash_without_colors_basic() {
    assert_eq!(
        render_crash(false, "render error: no mark", None, None),
        "SVEGA: render error: no mark\n"
    );
}

#[test]
fn crash_detail_is_split_per_line() {
    let result = render_crash(
        false,
        "could not parse input",
        Some("json: expected value\nndjson: line 1: expected value"),
        None,
    );
    assert!(result.starts_with("SVEGA: could not parse input\n"));
    assert!(result.contains("  × json: expected value\n"));
    assert!(result.contains("  × ndjson: line 1: expected value\n"));
}

#[test]
fn crash_with_suggestion() {
    let result = render_crash(false, "boom", None, Some("try --format=csv"));
    assert!(result.ends_with("  help: try --format=csv\n"));
}

#[test]
fn crash_with_colors_wraps_prefix() {
    let result = render_crash(true, "boom", Some("detail"), Some("hint"));
    assert!(result.contains("\x1b[1m\x1b[31mSVEGA:\x1b[0m boom"));
    assert!(result.contains("\x1b[2m× detail\x1b[0m"));
    assert!(result.contains("\x1b[36mhelp:\x1b[0m hint"));
}

#[test]
fn usage_without_hint_is_usage_text() {
    assert_eq!(render_usage(false, None), format!("{USAGE}\n"));
}

#[test]
fn usage_with_hint_has_blank_separator() {
    let result = render_usage(false, Some("can't find spec"));
    assert!(result.starts_with("can't find spec\n\nsvega [opts]"));
}

#[test]
fn usage_with_colors_highlights_hint() {
    let result = render_usage(true, Some("must pass in data to stdin"));
    assert!(result.starts_with("\x1b[33mmust pass in data to stdin\x1b[0m\n\n"));
}

#[test]
fn usage_lists_every_format() {
    assert!(USAGE.contains("--format=[auto],json,ndjson,csv,textRows"));
    assert!(USAGE.contains("--renderer=[builtin],vega-cli"));
}
