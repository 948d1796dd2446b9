//! Tests for the pattern CSV parser

pub mod tokenizer_tests;

pub const HEADER: &str = "\"pattern\",\"occurrences\",\"files\",\"repos\"";

/// Build one well-formed data line
pub fn csv_line(pattern: &str, occurrences: u64, files: u64, repos: u64) -> String {
    format!(
        "\"{}\",\"{}\",\"{}\",\"{}\"",
        pattern, occurrences, files, repos
    )
}

/// Build a CSV document from data lines, header included
pub fn csv_document(lines: &[String]) -> String {
    let mut text = String::from(HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}
