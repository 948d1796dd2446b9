//! Parsed pattern representation

use serde::{Serialize, Serializer};
use std::fmt;

/// One piece of a parsed pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatElement {
    /// Text copied verbatim; adjacent literals are always merged
    Literal(String),
    /// A run of one pattern letter, e.g. `yyyy`
    Directive(String),
    /// A bracketed section that may be absent
    Optional(Vec<FormatElement>),
}

/// A parsed Unicode date/time pattern
///
/// Equality is structural, so `yyyy-MM` and `yyyy'-'MM` are the same format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnicodeFormat {
    elements: Vec<FormatElement>,
}

impl UnicodeFormat {
    pub fn new(elements: Vec<FormatElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[FormatElement] {
        &self.elements
    }

    /// Directive identifiers in pattern order, including repeats and the
    /// contents of optional sections
    pub fn directives(&self) -> Vec<String> {
        let mut directives = Vec::new();
        collect_directives(&self.elements, &mut directives);
        directives
    }

    /// Directive identifiers with repeats removed, first occurrence wins
    pub fn distinct_directives(&self) -> Vec<String> {
        let mut distinct: Vec<String> = Vec::new();
        for directive in self.directives() {
            if !distinct.contains(&directive) {
                distinct.push(directive);
            }
        }
        distinct
    }
}

fn collect_directives(elements: &[FormatElement], out: &mut Vec<String>) {
    for element in elements {
        match element {
            FormatElement::Literal(_) => {}
            FormatElement::Directive(directive) => out.push(directive.clone()),
            FormatElement::Optional(section) => collect_directives(section, out),
        }
    }
}

fn write_elements(elements: &[FormatElement], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for element in elements {
        match element {
            FormatElement::Literal(text) => write_literal(text, f)?,
            FormatElement::Directive(directive) => f.write_str(directive)?,
            FormatElement::Optional(section) => {
                f.write_str("[")?;
                write_elements(section, f)?;
                f.write_str("]")?;
            }
        }
    }
    Ok(())
}

fn write_literal(text: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // a bare '' is one quote; wrapping quote-only text would read back doubled
    if text.chars().all(|c| c == '\'') {
        return f.write_str(&"''".repeat(text.len()));
    }
    let needs_quoting = text
        .chars()
        .any(|c| c.is_ascii_alphabetic() || matches!(c, '\'' | '[' | ']'));
    if needs_quoting {
        write!(f, "'{}'", text.replace('\'', "''"))
    } else {
        f.write_str(text)
    }
}

impl fmt::Display for UnicodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(&self.elements, f)
    }
}

impl Serialize for UnicodeFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
