//! Detection of interleaved directive categories
//!
//! A format "mingles" when directives of one category (date, time, zone) are
//! split up by a directive of another category, as in `HH:mm dd.MM.yyyy ss`.
//! Directives that fit no category are ignored.

use crate::app::models::Record;
use crate::app::services::unicode_format::{DirectiveCategory, UnicodeFormat, classify};

/// True iff some category reappears after a different category intervened
pub fn has_mingling_components(format: &UnicodeFormat) -> bool {
    categories_mingle(format.directives().iter().map(|d| classify(d)))
}

/// Mingling check over a category sequence
pub fn categories_mingle(categories: impl IntoIterator<Item = DirectiveCategory>) -> bool {
    let mut seen: Vec<DirectiveCategory> = Vec::new();
    let mut previous: Option<DirectiveCategory> = None;

    for category in categories {
        if category == DirectiveCategory::Other {
            continue;
        }
        if previous != Some(category) && seen.contains(&category) {
            return true;
        }
        if !seen.contains(&category) {
            seen.push(category);
        }
        previous = Some(category);
    }

    false
}

/// Records whose formats mingle categories, in input order
pub fn mingling_records(records: &[Record]) -> Vec<&Record> {
    records
        .iter()
        .filter(|record| has_mingling_components(&record.format))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::unicode_format::parse_unicode_format;
    use crate::app::services::unicode_format::DirectiveCategory::{
        DateBased, Other, TimeBased, ZoneBased,
    };

    fn mingles(pattern: &str) -> bool {
        has_mingling_components(&parse_unicode_format(pattern).unwrap())
    }

    #[test]
    fn test_contiguous_categories_do_not_mingle() {
        assert!(!mingles("yyyy-MM-dd"));
        assert!(!mingles("yyyy-MM-dd HH:mm:ss"));
        assert!(!mingles("yyyy-MM-dd'T'HH:mm:ss.SSSXXX"));
        assert!(!mingles("HH:mm z"));
    }

    #[test]
    fn test_interleaved_categories_mingle() {
        assert!(mingles("HH:mm dd.MM.yyyy ss"));
        assert!(mingles("EEE, dd MMM yyyy HH:mm:ss zzz yyyy"));
        assert!(mingles("MM/dd hh:mm a yyyy"));
    }

    #[test]
    fn test_zone_reappearing_mingles() {
        assert!(mingles("z HH:mm Z"));
    }

    #[test]
    fn test_other_directives_are_ignored() {
        assert!(!categories_mingle([DateBased, Other, DateBased, TimeBased]));
        assert!(categories_mingle([DateBased, Other, TimeBased, Other, DateBased]));
    }

    #[test]
    fn test_empty_sequence() {
        assert!(!categories_mingle(Vec::<DirectiveCategory>::new()));
        assert!(!categories_mingle([ZoneBased]));
    }

    #[test]
    fn test_mingling_records_filters() {
        let records = vec![
            Record::new(parse_unicode_format("yyyy-MM-dd").unwrap(), 5),
            Record::new(parse_unicode_format("HH dd HH").unwrap(), 2),
        ];
        let mingling = mingling_records(&records);
        assert_eq!(mingling, vec![&records[1]]);
    }
}
