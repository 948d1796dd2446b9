//! Tests for directive classification

use crate::app::services::unicode_format::directive::{PATTERN_LETTERS, letter_spec};
use crate::app::services::unicode_format::{DirectiveCategory, classify};

#[test]
fn test_classify_date_directives() {
    for directive in ["yyyy", "yy", "uuuu", "MM", "MMM", "dd", "EEE", "D"] {
        assert_eq!(classify(directive), DirectiveCategory::DateBased, "{}", directive);
    }
}

#[test]
fn test_classify_time_directives() {
    for directive in ["HH", "hh", "mm", "ss", "SSS", "a"] {
        assert_eq!(classify(directive), DirectiveCategory::TimeBased, "{}", directive);
    }
}

#[test]
fn test_classify_zone_directives() {
    for directive in ["z", "Z", "XXX", "xx", "VV", "O"] {
        assert_eq!(classify(directive), DirectiveCategory::ZoneBased, "{}", directive);
    }
}

#[test]
fn test_classify_unknown_is_other() {
    assert_eq!(classify("T"), DirectiveCategory::Other);
    assert_eq!(classify(""), DirectiveCategory::Other);
}

#[test]
fn test_pattern_letters_are_unique() {
    for entry in PATTERN_LETTERS {
        let matches = PATTERN_LETTERS
            .iter()
            .filter(|other| other.letter == entry.letter)
            .count();
        assert_eq!(matches, 1, "letter {} listed twice", entry.letter);
    }
}

#[test]
fn test_family_widths_are_parseable() {
    assert_eq!(letter_spec('S').map(|s| s.max_width), Some(9));
    assert!(letter_spec('y').map(|s| s.max_width).unwrap_or(0) >= 5);
    assert!(letter_spec('u').map(|s| s.max_width).unwrap_or(0) >= 5);
}

#[test]
fn test_category_display() {
    assert_eq!(DirectiveCategory::DateBased.to_string(), "date");
    assert_eq!(DirectiveCategory::ZoneBased.to_string(), "zone");
}
