//! Configuration errors.
//!
//! These are raised while building checks and schemas, or while binding a
//! schema to a table, and always before any row is evaluated. Data problems
//! in a filing are never errors: they are reported as violations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate column in schema: {column}")]
    DuplicateColumn { column: String },

    #[error("duplicate check {check} on column {column}")]
    DuplicateCheck { column: String, check: String },

    #[error("check {check} on column {column} is grouped by unknown column {groupby}")]
    UnknownControllingColumn {
        column: String,
        check: String,
        groupby: String,
    },

    #[error("column {column} is missing from the table")]
    MissingColumn { column: String },

    #[error("enum pairing takes either condition_values1 or condition_values2, not both")]
    ConflictingEnumPairing,

    #[error("invalid date bound {value:?}: expected a real calendar date in YYYYMMDD format")]
    InvalidDateBound { value: String },

    #[error("invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: String, max: String },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
