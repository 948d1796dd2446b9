//! Directive letters, their categories, and width limits

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of a moment in time a directive formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveCategory {
    DateBased,
    TimeBased,
    ZoneBased,
    Other,
}

impl fmt::Display for DirectiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirectiveCategory::DateBased => "date",
            DirectiveCategory::TimeBased => "time",
            DirectiveCategory::ZoneBased => "zone",
            DirectiveCategory::Other => "other",
        };
        f.write_str(name)
    }
}

/// A recognised pattern letter
#[derive(Debug, Clone, Copy)]
pub struct LetterSpec {
    pub letter: char,
    pub category: DirectiveCategory,
    pub max_width: usize,
}

const fn entry(letter: char, category: DirectiveCategory, max_width: usize) -> LetterSpec {
    LetterSpec {
        letter,
        category,
        max_width,
    }
}

use DirectiveCategory::{DateBased, TimeBased, ZoneBased};

/// All pattern letters the parser accepts
pub const PATTERN_LETTERS: &[LetterSpec] = &[
    // date
    entry('G', DateBased, 5),
    entry('y', DateBased, 9),
    entry('Y', DateBased, 9),
    entry('u', DateBased, 9),
    entry('U', DateBased, 5),
    entry('r', DateBased, 9),
    entry('Q', DateBased, 5),
    entry('q', DateBased, 5),
    entry('M', DateBased, 5),
    entry('L', DateBased, 5),
    entry('w', DateBased, 2),
    entry('W', DateBased, 1),
    entry('d', DateBased, 2),
    entry('D', DateBased, 3),
    entry('F', DateBased, 1),
    entry('g', DateBased, 9),
    entry('E', DateBased, 6),
    entry('e', DateBased, 6),
    entry('c', DateBased, 6),
    // time
    entry('a', TimeBased, 5),
    entry('b', TimeBased, 5),
    entry('B', TimeBased, 5),
    entry('h', TimeBased, 2),
    entry('H', TimeBased, 2),
    entry('K', TimeBased, 2),
    entry('k', TimeBased, 2),
    entry('m', TimeBased, 2),
    entry('s', TimeBased, 2),
    entry('S', TimeBased, 9),
    entry('A', TimeBased, 9),
    entry('n', TimeBased, 9),
    entry('N', TimeBased, 9),
    // zone
    entry('z', ZoneBased, 4),
    entry('Z', ZoneBased, 5),
    entry('O', ZoneBased, 4),
    entry('v', ZoneBased, 4),
    entry('V', ZoneBased, 4),
    entry('X', ZoneBased, 5),
    entry('x', ZoneBased, 5),
];

/// Look up a pattern letter
pub fn letter_spec(letter: char) -> Option<&'static LetterSpec> {
    PATTERN_LETTERS.iter().find(|entry| entry.letter == letter)
}

/// Classify a directive identifier by its leading letter
pub fn classify(directive: &str) -> DirectiveCategory {
    directive
        .chars()
        .next()
        .and_then(letter_spec)
        .map(|entry| entry.category)
        .unwrap_or(DirectiveCategory::Other)
}
