//! Checks whose outcome depends on a controlling column.
//!
//! Every check here consumes [`Partitions`] keyed by the controlling column's
//! raw value and returns one outcome per row, in row order. Per-partition work
//! (decoding the key, parsing a paired date) happens once per distinct key.

use std::collections::BTreeSet;

use crate::checks::parse_date;
use crate::codec;
use crate::error::{Result, ValidationError};
use crate::partition::Partitions;

/// Action-taken code for a denied application.
pub const DENIED: &str = "3";
/// Code for "not applicable".
pub const NOT_APPLICABLE: &str = "999";
/// Code for "other", which is backed by a free-form text field.
pub const OTHER: &str = "977";

/// Which way an enum pairing constrains the dependent field.
///
/// The two directions come from one business rule: when the controlling
/// field carries certain codes the dependent field must avoid a sentinel,
/// and when it carries certain other codes it must be exactly that sentinel.
/// A single check configures one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumPairing {
    /// Controlling codes that forbid the sentinel (`condition_values1`).
    MustDiffer(BTreeSet<String>),
    /// Controlling codes that require the sentinel (`condition_values2`).
    MustEqual(BTreeSet<String>),
    /// No controlling codes configured; every row passes.
    Unconstrained,
}

impl EnumPairing {
    /// Build from the two optional code sets; at most one may be supplied.
    pub fn new(
        condition_values1: Option<BTreeSet<String>>,
        condition_values2: Option<BTreeSet<String>>,
    ) -> Result<Self> {
        match (condition_values1, condition_values2) {
            (Some(_), Some(_)) => Err(ValidationError::ConflictingEnumPairing),
            (Some(codes), None) => Ok(Self::MustDiffer(codes)),
            (None, Some(codes)) => Ok(Self::MustEqual(codes)),
            (None, None) => Ok(Self::Unconstrained),
        }
    }

    pub fn must_differ<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MustDiffer(codes.into_iter().map(Into::into).collect())
    }

    pub fn must_equal<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MustEqual(codes.into_iter().map(Into::into).collect())
    }

    /// Requirement on the dependent value given the decoded controlling codes.
    /// `Some(true)` means "must equal", `Some(false)` "must differ".
    fn requirement(&self, codes: &[&str]) -> Option<bool> {
        let intersects = |set: &BTreeSet<String>| codes.iter().any(|code| set.contains(*code));
        match self {
            Self::MustDiffer(set) if intersects(set) => Some(false),
            Self::MustEqual(set) if intersects(set) => Some(true),
            _ => None,
        }
    }
}

/// A field must be filled exactly when the controlling value is one of
/// `condition_values` (compared as exact text), and blank otherwise.
pub fn has_no_conditional_field_conflict(
    partitions: &Partitions<'_>,
    condition_values: &BTreeSet<String>,
) -> Vec<bool> {
    partitions.scatter(|key| {
        let required = condition_values.contains(key);
        move |value: &str| value.is_empty() != required
    })
}

/// The dependent value must differ from or equal `condition_value` depending
/// on which configured codes the decoded controlling value contains.
pub fn has_valid_enum_pair(
    partitions: &Partitions<'_>,
    pairing: &EnumPairing,
    condition_value: &str,
) -> Vec<bool> {
    partitions.scatter(|key| {
        let requirement = pairing.requirement(&codec::split(key));
        move |value: &str| match requirement {
            Some(true) => value == condition_value,
            Some(false) => value != condition_value,
            None => true,
        }
    })
}

/// Denial reasons against action taken.
///
/// A denied application must not list `999` among its reasons; any other
/// action must list exactly `999` and nothing else.
pub fn denial_reasons_conditional_enum_value(partitions: &Partitions<'_>) -> Vec<bool> {
    partitions.scatter(|key| {
        let denied = key == DENIED;
        move |value: &str| {
            if denied {
                !codec::contains(value, NOT_APPLICABLE)
            } else {
                value == NOT_APPLICABLE
            }
        }
    })
}

/// Codes in the controlling field (not counting `other_code`) plus one for a
/// filled free-form companion field must not exceed `max_length`.
pub fn has_valid_multi_field_value_count(
    partitions: &Partitions<'_>,
    max_length: usize,
    other_code: &str,
) -> Vec<bool> {
    partitions.scatter(|key| {
        let coded = codec::split(key)
            .into_iter()
            .filter(|code| *code != other_code)
            .count();
        move |value: &str| coded + usize::from(!value.is_empty()) <= max_length
    })
}

/// This field's date is on or after the paired date held by the controlling
/// column. An unparseable date on either side fails.
pub fn is_date_after(partitions: &Partitions<'_>) -> Vec<bool> {
    partitions.scatter(|key| {
        let paired = parse_date(key);
        move |value: &str| match (parse_date(value), paired) {
            (Some(date), Some(paired)) => date >= paired,
            _ => false,
        }
    })
}

/// The paired date is at most `days` days before this field's date.
/// An unparseable date on either side fails.
pub fn is_date_before_in_days(partitions: &Partitions<'_>, days: u32) -> Vec<bool> {
    let limit = i64::from(days);
    partitions.scatter(|key| {
        let paired = parse_date(key);
        move |value: &str| match (parse_date(value), paired) {
            (Some(date), Some(paired)) => date.signed_duration_since(paired).num_days() <= limit,
            _ => false,
        }
    })
}

/// A check that depends on a controlling column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalCheck {
    FieldConflict {
        condition_values: BTreeSet<String>,
    },
    EnumPair {
        pairing: EnumPairing,
        condition_value: String,
    },
    DenialReasons,
    MultiFieldValueCount {
        max_length: usize,
        other_code: String,
    },
    DateAfter,
    DateBeforeInDays {
        days: u32,
    },
}

impl ConditionalCheck {
    pub fn field_conflict<I, S>(condition_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::FieldConflict {
            condition_values: condition_values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn enum_pair(pairing: EnumPairing, condition_value: impl Into<String>) -> Self {
        Self::EnumPair {
            pairing,
            condition_value: condition_value.into(),
        }
    }

    pub fn multi_field_value_count(max_length: usize, other_code: impl Into<String>) -> Self {
        Self::MultiFieldValueCount {
            max_length,
            other_code: other_code.into(),
        }
    }

    /// Evaluate against partitions of the dependent column.
    pub fn evaluate(&self, partitions: &Partitions<'_>) -> Vec<bool> {
        match self {
            Self::FieldConflict { condition_values } => {
                has_no_conditional_field_conflict(partitions, condition_values)
            }
            Self::EnumPair {
                pairing,
                condition_value,
            } => has_valid_enum_pair(partitions, pairing, condition_value),
            Self::DenialReasons => denial_reasons_conditional_enum_value(partitions),
            Self::MultiFieldValueCount {
                max_length,
                other_code,
            } => has_valid_multi_field_value_count(partitions, *max_length, other_code),
            Self::DateAfter => is_date_after(partitions),
            Self::DateBeforeInDays { days } => is_date_before_in_days(partitions, *days),
        }
    }
}
