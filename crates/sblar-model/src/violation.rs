use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::RowIndex;

/// Outcome class of a violated check.
///
/// Errors block the filing; warnings are advisory and leave it acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Parse severity from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One failed check on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Zero-based row position in the filing.
    pub row: RowIndex,
    /// Column the check is declared on.
    pub column: String,
    /// Check name, e.g. `"ct_loan_term.conditional_field_conflict"`.
    pub check: String,
    pub severity: Severity,
    /// Description echoed verbatim from the check configuration.
    pub description: String,
}

/// Overall result of validating one filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStatus {
    Passed,
    PassedWithWarnings,
    Failed,
}

/// Ordered violations for one evaluation pass.
///
/// Violations are ordered by row, then column declaration order, then check
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub rows: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|violation| violation.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.severity.is_blocking())
    }

    pub fn status(&self) -> FilingStatus {
        if self.has_errors() {
            FilingStatus::Failed
        } else if self.violations.is_empty() {
            FilingStatus::Passed
        } else {
            FilingStatus::PassedWithWarnings
        }
    }

    pub fn violations_for_row(&self, row: RowIndex) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.row == row)
    }
}
