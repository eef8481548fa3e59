#![deny(unsafe_code)]

use sblar_validate::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StandardsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(
        "invalid reporting period {start:?} to {end:?}: expected YYYYMMDD dates with the start on or before the end"
    )]
    InvalidReportingPeriod { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, StandardsError>;
