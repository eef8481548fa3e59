//! Tests for sblar-model types.

use sblar_model::{FilingStatus, Severity, ValidationReport, Violation};

fn violation(row: usize, column: &str, check: &str, severity: Severity) -> Violation {
    Violation {
        row,
        column: column.to_string(),
        check: format!("{column}.{check}"),
        severity,
        description: format!("{column} failed {check}"),
    }
}

#[test]
fn summary_groups_by_column_and_check() {
    let report = ValidationReport {
        rows: 4,
        violations: vec![
            violation(0, "ct_guarantee", "invalid_enum_value", Severity::Error),
            violation(0, "ct_guarantee", "duplicates_in_field", Severity::Warning),
            violation(1, "ct_guarantee", "invalid_enum_value", Severity::Error),
            violation(1, "denial_reasons", "enum_value_conflict", Severity::Error),
            violation(3, "denial_reasons", "duplicates_in_field", Severity::Warning),
        ],
    };

    let summary = report.summary();

    assert_eq!(summary.status, FilingStatus::Failed);
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.errors, 3);
    assert_eq!(summary.warnings, 2);
    assert_eq!(summary.rows_with_errors, 2);

    let guarantee = summary.by_column["ct_guarantee"];
    assert_eq!(guarantee.errors, 2);
    assert_eq!(guarantee.warnings, 1);
    assert_eq!(guarantee.total(), 3);

    let enum_check = summary.by_check["ct_guarantee.invalid_enum_value"];
    assert_eq!(enum_check.errors, 2);
    assert_eq!(enum_check.warnings, 0);
    assert_eq!(summary.by_check.len(), 4);
}

#[test]
fn rows_with_errors_counts_unsorted_violations_once() {
    let report = ValidationReport {
        rows: 3,
        violations: vec![
            violation(2, "ct_guarantee", "invalid_enum_value", Severity::Error),
            violation(0, "ct_guarantee", "invalid_enum_value", Severity::Error),
            violation(2, "denial_reasons", "enum_value_conflict", Severity::Error),
            violation(1, "ct_guarantee", "duplicates_in_field", Severity::Warning),
        ],
    };
    assert_eq!(report.summary().rows_with_errors, 2);
}

#[test]
fn empty_report_passes() {
    let summary = ValidationReport::default().summary();
    assert_eq!(summary.status, FilingStatus::Passed);
    assert_eq!(summary.rows_with_errors, 0);
    assert!(summary.by_column.is_empty());
}

#[test]
fn report_serializes_with_lowercase_severity() {
    let report = ValidationReport {
        rows: 1,
        violations: vec![violation(
            0,
            "action_taken_date",
            "unreasonable_date_value",
            Severity::Warning,
        )],
    };
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["violations"][0]["severity"], "warning");
    assert_eq!(
        json["violations"][0]["check"],
        "action_taken_date.unreasonable_date_value"
    );

    let round: ValidationReport = serde_json::from_value(json).expect("deserialize report");
    assert_eq!(round, report);
}

#[test]
fn severity_parsing_is_lenient_about_case() {
    assert_eq!(Severity::parse(" ERROR "), Some(Severity::Error));
    assert_eq!(Severity::parse("warn"), Some(Severity::Warning));
    assert_eq!(Severity::parse("reject"), None);
    assert_eq!(Severity::Warning.to_string(), "Warning");
}
