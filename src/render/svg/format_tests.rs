//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn escapes_line_breaks() {
        assert_eq!(html_escape("north\nside"), "north&#10;side");
        assert_eq!(html_escape("a\r\nb"), "a&#13;&#10;b");
    }
}

mod format_value_tests {
    use super::*;

    #[test]
    fn integers_have_no_decimals() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(-7.0), "-7");
    }

    #[test]
    fn fractions_are_trimmed() {
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1.5), "1.5");
        assert_eq!(format_value(2.333), "2.33");
    }

    #[test]
    fn large_values_use_suffixes() {
        assert_eq!(format_value(15_500.0), "15.5K");
        assert_eq!(format_value(2_500_000.0), "2.5M");
    }
}
