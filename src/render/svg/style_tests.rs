use super::*;

#[test]
fn parse_distinguishes_hex_from_named() {
    assert_eq!(ChartColor::parse("#ff0000"), ChartColor::Hex("#ff0000".to_string()));
    assert_eq!(
        ChartColor::parse("steelblue"),
        ChartColor::Named("steelblue".to_string())
    );
}

#[test]
fn to_css_returns_raw_value() {
    assert_eq!(ChartColor::parse("steelblue").to_css(), "steelblue");
    assert_eq!(ChartColor::default().to_css(), DEFAULT_MARK_COLOR);
}

#[test]
fn text_anchor_display() {
    assert_eq!(TextAnchor::Start.to_string(), "start");
    assert_eq!(TextAnchor::Middle.to_string(), "middle");
    assert_eq!(TextAnchor::End.to_string(), "end");
}

#[test]
fn to_css_escapes_attribute_breaking_characters() {
    assert_eq!(ChartColor::parse("a\"b").to_css(), "a&quot;b");
    assert_eq!(ChartColor::parse("<red>").to_css(), "&lt;red&gt;");
}
