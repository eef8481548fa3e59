//! Aggregated counts over a validation report.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::violation::{FilingStatus, Severity, ValidationReport};

/// Error and warning counts for one column or check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
}

impl SeverityCounts {
    fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub status: FilingStatus,
    pub rows: usize,
    pub errors: usize,
    pub warnings: usize,
    /// Rows with at least one error.
    pub rows_with_errors: usize,
    pub by_column: BTreeMap<String, SeverityCounts>,
    pub by_check: BTreeMap<String, SeverityCounts>,
}

impl ReportSummary {
    pub fn from_report(report: &ValidationReport) -> Self {
        let mut by_column: BTreeMap<String, SeverityCounts> = BTreeMap::new();
        let mut by_check: BTreeMap<String, SeverityCounts> = BTreeMap::new();
        let mut errors = 0usize;
        let mut warnings = 0usize;
        let mut error_rows = BTreeSet::new();
        for violation in &report.violations {
            by_column
                .entry(violation.column.clone())
                .or_default()
                .record(violation.severity);
            by_check
                .entry(violation.check.clone())
                .or_default()
                .record(violation.severity);
            match violation.severity {
                Severity::Error => {
                    errors += 1;
                    error_rows.insert(violation.row);
                }
                Severity::Warning => warnings += 1,
            }
        }
        Self {
            status: report.status(),
            rows: report.rows,
            errors,
            warnings,
            rows_with_errors: error_rows.len(),
            by_column,
            by_check,
        }
    }
}

impl ValidationReport {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_report(self)
    }
}
