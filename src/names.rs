//! Filters that decide which class names become record fields.
//!
//! Two passes run in a fixed order: the shape filter drops names that can
//! never be ReasonML field names (hyphens, underscores, other punctuation)
//! without reporting them, then the keyword partition separates names that
//! collide with reserved words so callers can report them.

use crate::keywords::KeywordSet;
use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("identifier pattern is valid"));

/// Names split by keyword collision.
///
/// The two lists are disjoint and together hold every input name, each in
/// its original relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid_names: Vec<String>,
    pub keyword_names: Vec<String>,
}

impl ValidationResult {
    pub fn has_keyword_collisions(&self) -> bool {
        !self.keyword_names.is_empty()
    }
}

/// True when `name` is one or more ASCII letters or digits.
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER_SHAPE.is_match(name)
}

/// Keep only names made entirely of ASCII letters and digits.
pub fn filter_valid_identifiers(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| is_valid_identifier(name))
        .cloned()
        .collect()
}

/// Partition names into usable ones and reserved-word collisions.
pub fn partition_by_keyword(names: &[String], keywords: &KeywordSet) -> ValidationResult {
    let (keyword_names, valid_names): (Vec<String>, Vec<String>) = names
        .iter()
        .cloned()
        .partition(|name| keywords.contains(name));

    ValidationResult {
        valid_names,
        keyword_names,
    }
}

/// Run both filters in order.
pub fn validate_names(names: &[String], keywords: &KeywordSet) -> ValidationResult {
    partition_by_keyword(&filter_valid_identifiers(names), keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filter_drops_hyphens_and_underscores() {
        let names = strings(&[
            "red", "blue", "is-read", "is_read", "isRead", "title-box", "titleBox",
        ]);
        assert_eq!(
            filter_valid_identifiers(&names),
            strings(&["red", "blue", "isRead", "titleBox"])
        );
    }

    #[test]
    fn test_filter_rejects_empty_and_non_ascii() {
        let names = strings(&["", "café", "h1", "2col", "a b"]);
        assert_eq!(filter_valid_identifiers(&names), strings(&["h1", "2col"]));
    }

    #[test]
    fn test_partition_by_keyword() {
        let names = strings(&["red", "and", "forYou", "includeNext", "let"]);
        let result = partition_by_keyword(&names, KeywordSet::reason());

        assert_eq!(result.valid_names, strings(&["red", "forYou", "includeNext"]));
        assert_eq!(result.keyword_names, strings(&["and", "let"]));
        assert!(result.has_keyword_collisions());
    }

    #[test]
    fn test_partition_with_alternate_keywords() {
        let names = strings(&["red", "and"]);
        let result = partition_by_keyword(&names, &KeywordSet::new(["red"]));

        assert_eq!(result.valid_names, strings(&["and"]));
        assert_eq!(result.keyword_names, strings(&["red"]));
    }

    #[test]
    fn test_validate_names_runs_shape_filter_first() {
        let names = strings(&["open", "is-open", "isOpen", "type_"]);
        let result = validate_names(&names, KeywordSet::reason());

        assert_eq!(result.valid_names, strings(&["isOpen"]));
        assert_eq!(result.keyword_names, strings(&["open"]));
    }

    proptest! {
        #[test]
        fn prop_partition_is_disjoint_and_complete(
            names in prop::collection::vec("[a-z]{1,6}", 0..20)
        ) {
            let result = partition_by_keyword(&names, KeywordSet::reason());

            prop_assert_eq!(
                result.valid_names.len() + result.keyword_names.len(),
                names.len()
            );
            for name in &result.keyword_names {
                prop_assert!(KeywordSet::reason().contains(name));
            }
            for name in &result.valid_names {
                prop_assert!(!KeywordSet::reason().contains(name));
            }
        }

        #[test]
        fn prop_filter_output_is_ordered_subsequence(
            names in prop::collection::vec("[a-zA-Z0-9_-]{0,6}", 0..20)
        ) {
            let kept = filter_valid_identifiers(&names);
            let mut remaining = names.iter();
            for name in &kept {
                prop_assert!(is_valid_identifier(name));
                prop_assert!(remaining.any(|candidate| candidate == name));
            }
        }
    }
}
