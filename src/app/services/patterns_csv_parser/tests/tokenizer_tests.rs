//! Tests for quoted-field tokenizing

use crate::app::services::patterns_csv_parser::tokenizer::{split_quoted_fields, tokenize_line};
use crate::app::services::patterns_csv_parser::{RowCounts, WeightColumn};
use crate::error::CensusError;

#[test]
fn test_split_ignores_text_outside_quotes() {
    let fields = split_quoted_fields("\"yyyy\", \"10\" ,\"5\";\"2\"");
    assert_eq!(fields, vec!["yyyy", "10", "5", "2"]);
}

#[test]
fn test_split_drops_unterminated_field() {
    let fields = split_quoted_fields("\"yyyy\",\"10\",\"5");
    assert_eq!(fields, vec!["yyyy", "10"]);
}

#[test]
fn test_split_keeps_empty_fields() {
    assert_eq!(split_quoted_fields("\"\",\"1\""), vec!["", "1"]);
}

#[test]
fn test_tokenize_line() {
    let line = "\"HH:mm\",\"100\",\"20\",\"4\"";
    let row = tokenize_line(line, 2, line).unwrap();

    assert_eq!(row.literal, "HH:mm");
    assert_eq!(
        row.counts(2, line).unwrap(),
        RowCounts {
            occurrences: 100,
            files: 20,
            repos: 4
        }
    );
}

#[test]
fn test_tokenize_wrong_field_count() {
    let line = "\"HH:mm\",\"100\",\"20\"";
    let error = tokenize_line(line, 7, line).unwrap_err();

    match error {
        CensusError::MissingFields {
            line: number,
            expected,
            found,
            content,
        } => {
            assert_eq!(number, 7);
            assert_eq!(expected, 4);
            assert_eq!(found, 3);
            assert_eq!(content, line);
        }
        other => panic!("Expected MissingFields, got {:?}", other),
    }
}

#[test]
fn test_tokenize_takes_first_four_fields() {
    let line = "\"HH:mm\",\"100\",\"20\",\"4\",\"extra\"";
    let row = tokenize_line(line, 5, line).unwrap();

    assert_eq!(row.literal, "HH:mm");
    assert_eq!(row.repos, "4");
}

#[test]
fn test_invalid_count_names_column() {
    let line = "\"HH:mm\",\"100\",\"many\",\"4\"";
    let row = tokenize_line(line, 3, line).unwrap();
    let error = row.counts(3, line).unwrap_err();

    assert_eq!(error.line(), Some(3));
    match error {
        CensusError::InvalidCount { column, value, .. } => {
            assert_eq!(column, "files");
            assert_eq!(value, "many");
        }
        other => panic!("Expected InvalidCount, got {:?}", other),
    }
}

#[test]
fn test_weight_column_selects_count() {
    let counts = RowCounts {
        occurrences: 9,
        files: 5,
        repos: 2,
    };
    assert_eq!(counts.weight(WeightColumn::Occurrences), 9);
    assert_eq!(counts.weight(WeightColumn::Files), 5);
    assert_eq!(counts.weight(WeightColumn::Repos), 2);
    assert_eq!(WeightColumn::default(), WeightColumn::Files);
}
