//! Code-list checks over multi-value fields.

use std::collections::{BTreeSet, HashSet};

use crate::codec;

/// Every code is in `accepted`. Empty values pass.
pub fn is_valid_enum(value: &str, accepted: &BTreeSet<String>) -> bool {
    codec::split(value)
        .into_iter()
        .all(|code| accepted.contains(code))
}

/// Number of codes lies in `[min, max]`; `max = None` is unbounded.
pub fn has_valid_value_count(value: &str, min: usize, max: Option<usize>) -> bool {
    let count = codec::count(value);
    count >= min && max.is_none_or(|max| count <= max)
}

/// No code appears twice. Empty values pass.
pub fn is_unique_in_field(value: &str) -> bool {
    let mut seen = HashSet::new();
    codec::split(value).into_iter().all(|code| seen.insert(code))
}

/// A code from `single_values` may not be combined with any other code.
pub fn meets_multi_value_field_restriction(value: &str, single_values: &BTreeSet<String>) -> bool {
    let codes = codec::split(value);
    if codes.iter().any(|code| single_values.contains(*code)) {
        return codes.len() == 1;
    }
    true
}

/// Character count (not bytes) lies in `[min, max]`.
pub fn has_valid_text_length(value: &str, min: usize, max: usize) -> bool {
    let length = value.chars().count();
    length >= min && length <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn enum_membership_checks_every_code() {
        let accepted = set(&["1", "2"]);
        assert!(is_valid_enum("1;2", &accepted));
        assert!(is_valid_enum("", &accepted));
        assert!(!is_valid_enum("0;3", &accepted));
        assert!(!is_valid_enum("1;3", &accepted));
        assert!(!is_valid_enum("1;", &accepted));
    }

    #[test]
    fn value_count_bounds() {
        assert!(has_valid_value_count("1;2;", 1, Some(4)));
        assert!(has_valid_value_count("1", 1, Some(4)));
        assert!(!has_valid_value_count("1", 2, Some(4)));
        assert!(has_valid_value_count("1;2", 1, Some(2)));
        assert!(!has_valid_value_count("1;2;3;4", 2, Some(3)));
        assert!(!has_valid_value_count("", 1, None));
        assert!(has_valid_value_count("", 0, Some(1)));
        assert!(has_valid_value_count("1;2;3;4;5;6;7", 1, None));
    }

    #[test]
    fn duplicates_in_field() {
        assert!(is_unique_in_field(""));
        assert!(is_unique_in_field("1"));
        assert!(is_unique_in_field("1;2;3;4"));
        assert!(!is_unique_in_field("1;2;3;3;4"));
    }

    #[test]
    fn single_value_restriction() {
        assert!(!meets_multi_value_field_restriction("1;2;3", &set(&["2"])));
        assert!(meets_multi_value_field_restriction("2", &set(&["2"])));
        assert!(meets_multi_value_field_restriction("1", &set(&["2"])));
        assert!(meets_multi_value_field_restriction("1;2;3", &set(&["4"])));
        assert!(meets_multi_value_field_restriction("", &set(&["999"])));
    }

    #[test]
    fn text_length_counts_characters() {
        assert!(has_valid_text_length("", 0, 300));
        assert!(has_valid_text_length(&"é".repeat(300), 0, 300));
        assert!(!has_valid_text_length(&"x".repeat(301), 0, 300));
        assert!(!has_valid_text_length("", 1, 300));
    }
}
