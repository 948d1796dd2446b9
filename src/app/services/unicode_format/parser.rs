//! Pattern literal parsing
//!
//! Runs of a single ASCII letter become directives, `'...'` is quoted text
//! (`''` is an escaped quote), `[...]` is an optional section, and anything
//! else is literal text.

use thiserror::Error;

use super::directive::letter_spec;
use super::format::{FormatElement, UnicodeFormat};

/// Why a pattern literal could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatParseError {
    #[error("empty pattern")]
    Empty,

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unmatched ']' at position {position}")]
    UnmatchedClose { position: usize },

    #[error("{open} optional section(s) left open")]
    UnclosedOptional { open: usize },

    #[error("unknown pattern letter '{letter}' at position {position}")]
    UnknownLetter { letter: char, position: usize },

    #[error("directive '{directive}' is too wide: '{letter}' allows at most {max_width}")]
    TooWide {
        directive: String,
        letter: char,
        max_width: usize,
    },
}

/// Parse a pattern literal into a structured format
pub fn parse_unicode_format(pattern: &str) -> Result<UnicodeFormat, FormatParseError> {
    if pattern.is_empty() {
        return Err(FormatParseError::Empty);
    }

    let chars: Vec<char> = pattern.chars().collect();
    // innermost open section last
    let mut sections: Vec<Vec<FormatElement>> = vec![Vec::new()];
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' => {
                let (text, next) = read_quoted(&chars, i)?;
                push_literal(current_section(&mut sections), &text);
                i = next;
            }
            '[' => {
                sections.push(Vec::new());
                i += 1;
            }
            ']' => {
                if sections.len() == 1 {
                    return Err(FormatParseError::UnmatchedClose { position: i });
                }
                let section = sections.pop().unwrap_or_default();
                current_section(&mut sections).push(FormatElement::Optional(section));
                i += 1;
            }
            letter if letter.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i] == letter {
                    i += 1;
                }
                let directive = read_directive(letter, start, i - start)?;
                current_section(&mut sections).push(FormatElement::Directive(directive));
            }
            other => {
                let mut buffer = [0u8; 4];
                push_literal(current_section(&mut sections), other.encode_utf8(&mut buffer));
                i += 1;
            }
        }
    }

    if sections.len() > 1 {
        return Err(FormatParseError::UnclosedOptional {
            open: sections.len() - 1,
        });
    }

    Ok(UnicodeFormat::new(sections.pop().unwrap_or_default()))
}

/// Read a quoted literal starting at `start`; returns the text and the index
/// just past the closing quote
fn read_quoted(chars: &[char], start: usize) -> Result<(String, usize), FormatParseError> {
    // '' outside a quoted run is a lone quote character
    if chars.get(start + 1) == Some(&'\'') {
        return Ok(("'".to_string(), start + 2));
    }

    let mut text = String::new();
    let mut i = start + 1;
    loop {
        match chars.get(i) {
            None => return Err(FormatParseError::UnterminatedQuote { position: start }),
            Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                text.push('\'');
                i += 2;
            }
            Some('\'') => return Ok((text, i + 1)),
            Some(&c) => {
                text.push(c);
                i += 1;
            }
        }
    }
}

fn read_directive(letter: char, position: usize, width: usize) -> Result<String, FormatParseError> {
    let entry = letter_spec(letter).ok_or(FormatParseError::UnknownLetter { letter, position })?;
    let directive: String = std::iter::repeat_n(letter, width).collect();
    if width > entry.max_width {
        return Err(FormatParseError::TooWide {
            directive,
            letter,
            max_width: entry.max_width,
        });
    }
    Ok(directive)
}

fn current_section(sections: &mut Vec<Vec<FormatElement>>) -> &mut Vec<FormatElement> {
    if sections.is_empty() {
        sections.push(Vec::new());
    }
    let last = sections.len() - 1;
    &mut sections[last]
}

fn push_literal(section: &mut Vec<FormatElement>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(FormatElement::Literal(existing)) = section.last_mut() {
        existing.push_str(text);
    } else {
        section.push(FormatElement::Literal(text.to_string()));
    }
}
