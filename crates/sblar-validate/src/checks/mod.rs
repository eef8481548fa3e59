//! Element-wise checks.
//!
//! Each check looks at one field value in isolation. All checks are total
//! over text: malformed input yields `false`, never an error or a panic.

pub mod dates;
pub mod numeric;
pub mod values;

use std::collections::BTreeSet;

use chrono::NaiveDate;

pub use dates::{format_date, is_date, is_date_in_range, parse_date, parse_date_bound};
pub use numeric::{NumericBound, is_number, meets_numeric_bound, parse_number};
pub use values::{
    has_valid_text_length, has_valid_value_count, is_unique_in_field, is_valid_enum,
    meets_multi_value_field_restriction,
};

use crate::error::{Result, ValidationError};

/// A check that depends only on the value of the field it is declared on.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementCheck {
    /// Real calendar date in YYYYMMDD form.
    Date,
    /// Real date within an inclusive window.
    DateInRange { start: NaiveDate, end: NaiveDate },
    /// Plain base-10 number when present.
    Number,
    /// Numeric threshold when present.
    NumericBound(NumericBound),
    /// Every code is an accepted value.
    Enum { accepted: BTreeSet<String> },
    /// Number of codes within bounds.
    ValueCount { min: usize, max: Option<usize> },
    /// No repeated codes.
    UniqueValues,
    /// Exclusive codes stand alone.
    SingleValueRestriction { single_values: BTreeSet<String> },
    /// Character length within bounds.
    TextLength { min: usize, max: usize },
}

impl ElementCheck {
    /// Date window from YYYYMMDD literals.
    pub fn date_in_range(start: &str, end: &str) -> Result<Self> {
        let start_date = parse_date_bound(start)?;
        let end_date = parse_date_bound(end)?;
        if start_date > end_date {
            return Err(ValidationError::InvalidRange {
                min: start.to_string(),
                max: end.to_string(),
            });
        }
        Ok(Self::DateInRange {
            start: start_date,
            end: end_date,
        })
    }

    pub fn enumeration<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }

    pub fn value_count(min: usize, max: Option<usize>) -> Result<Self> {
        if let Some(max) = max
            && min > max
        {
            return Err(ValidationError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self::ValueCount { min, max })
    }

    pub fn single_values<I, S>(single_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SingleValueRestriction {
            single_values: single_values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn text_length(min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(ValidationError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self::TextLength { min, max })
    }

    /// Evaluate the check against one raw field value.
    pub fn passes(&self, value: &str) -> bool {
        match self {
            Self::Date => is_date(value),
            Self::DateInRange { start, end } => is_date_in_range(value, *start, *end),
            Self::Number => is_number(value),
            Self::NumericBound(bound) => meets_numeric_bound(value, *bound),
            Self::Enum { accepted } => is_valid_enum(value, accepted),
            Self::ValueCount { min, max } => has_valid_value_count(value, *min, *max),
            Self::UniqueValues => is_unique_in_field(value),
            Self::SingleValueRestriction { single_values } => {
                meets_multi_value_field_restriction(value, single_values)
            }
            Self::TextLength { min, max } => has_valid_text_length(value, *min, *max),
        }
    }

    /// Evaluate the check against every value of a column, in row order.
    pub fn evaluate(&self, values: &[String]) -> Vec<bool> {
        values.iter().map(|value| self.passes(value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_reject_inverted_ranges() {
        assert!(ElementCheck::value_count(2, Some(1)).is_err());
        assert!(ElementCheck::value_count(2, None).is_ok());
        assert!(ElementCheck::text_length(10, 0).is_err());
        assert!(matches!(
            ElementCheck::date_in_range("20241231", "20241001"),
            Err(ValidationError::InvalidRange { .. })
        ));
        assert!(matches!(
            ElementCheck::date_in_range("20241301", "20241231"),
            Err(ValidationError::InvalidDateBound { .. })
        ));
    }

    #[test]
    fn evaluate_keeps_row_order() {
        let check = ElementCheck::enumeration(["1", "2"]);
        let values: Vec<String> = ["1", "3", "", "2;1"].map(String::from).to_vec();
        assert_eq!(check.evaluate(&values), vec![true, false, true, true]);
    }
}
