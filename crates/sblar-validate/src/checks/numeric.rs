//! Numeric format and bound checks.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Plain base-10 numbers: optional sign, digits, optional decimal part.
/// Exponents, `inf`, `NaN` and surrounding whitespace are not accepted.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("Invalid number regex")
});

/// Parse a non-empty plain number.
pub fn parse_number(value: &str) -> Option<f64> {
    if !NUMBER_REGEX.is_match(value) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Empty values pass; presence is governed by other checks.
pub fn is_number(value: &str) -> bool {
    value.is_empty() || NUMBER_REGEX.is_match(value)
}

/// A one-sided numeric threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum NumericBound {
    GreaterThan(f64),
    GreaterThanOrEqual(f64),
    LessThan(f64),
}

impl NumericBound {
    pub fn holds(&self, number: f64) -> bool {
        match *self {
            Self::GreaterThan(bound) => number > bound,
            Self::GreaterThanOrEqual(bound) => number >= bound,
            Self::LessThan(bound) => number < bound,
        }
    }
}

/// Empty values pass; non-numeric values fail.
pub fn meets_numeric_bound(value: &str, bound: NumericBound) -> bool {
    if value.is_empty() {
        return true;
    }
    parse_number(value).is_some_and(|number| bound.holds(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_numbers() {
        for value in ["1", "36", "-4", "+4", "0.5", ".5", "5.", "1200.00", ""] {
            assert!(is_number(value), "{value:?} should be numeric");
        }
    }

    #[test]
    fn rejects_non_numbers() {
        for value in ["a", "1e5", "inf", "NaN", " 1", "1 ", "1,000", "1.2.3", ".", "-", "0x10"] {
            assert!(!is_number(value), "{value:?} should not be numeric");
        }
    }

    #[test]
    fn bounds_compare_numerically() {
        assert!(meets_numeric_bound("1", NumericBound::GreaterThanOrEqual(1.0)));
        assert!(!meets_numeric_bound("0", NumericBound::GreaterThanOrEqual(1.0)));
        assert!(meets_numeric_bound("1199", NumericBound::LessThan(1200.0)));
        assert!(!meets_numeric_bound("1200", NumericBound::LessThan(1200.0)));
        // "9" sorts after "1200" as text but not as a number
        assert!(meets_numeric_bound("9", NumericBound::LessThan(1200.0)));
        assert!(!meets_numeric_bound("0.1", NumericBound::GreaterThan(0.1)));
        assert!(meets_numeric_bound("0.11", NumericBound::GreaterThan(0.1)));
    }

    #[test]
    fn bounds_skip_empty_and_fail_garbage() {
        assert!(meets_numeric_bound("", NumericBound::GreaterThan(0.0)));
        assert!(!meets_numeric_bound("abc", NumericBound::GreaterThan(0.0)));
    }
}
