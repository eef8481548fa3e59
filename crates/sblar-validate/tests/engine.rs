//! Evaluation driver tests.

use std::io;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use sblar_model::{FilingStatus, Severity, Table};
use sblar_validate::{
    CheckDescriptor, ColumnSchema, ConditionalCheck, ElementCheck, EvaluationOptions, Evaluator,
    NumericBound, Parallelism, Predicate, Schema, ValidationError, evaluate,
};

fn schema() -> Schema {
    Schema::new(vec![
        ColumnSchema::new("amount_applied_for_flag", "Field 13: amount applied for: NA/NP flag")
            .with_check(CheckDescriptor::error(
                "amount_applied_for_flag.invalid_enum_value",
                "must be 900, 988 or 999",
                ElementCheck::enumeration(["900", "988", "999"]),
            )),
        ColumnSchema::new("amount_applied_for", "Field 14: amount applied for").with_checks([
            CheckDescriptor::error(
                "amount_applied_for.conditional_field_conflict",
                "must be blank unless the flag is 900",
                Predicate::conditional(
                    "amount_applied_for_flag",
                    ConditionalCheck::field_conflict(["900"]),
                ),
            ),
            CheckDescriptor::error(
                "amount_applied_for.invalid_numeric_format",
                "must be numeric",
                ElementCheck::Number,
            ),
            CheckDescriptor::warning(
                "amount_applied_for.invalid_numeric_value",
                "should be greater than 0",
                ElementCheck::NumericBound(NumericBound::GreaterThan(0.0)),
            ),
        ]),
    ])
    .unwrap()
}

fn table(rows: &[[&str; 2]]) -> Table {
    Table::from_rows(
        &["amount_applied_for_flag", "amount_applied_for"],
        rows.iter()
            .map(|row| row.iter().map(|value| (*value).to_string()).collect())
            .collect(),
    )
    .unwrap()
}

#[test]
fn clean_filing_passes() {
    let report = evaluate(&table(&[["900", "50000"], ["988", ""]]), &schema()).unwrap();
    assert!(report.violations.is_empty());
    assert_eq!(report.rows, 2);
    assert_eq!(report.status(), FilingStatus::Passed);
}

#[test]
fn violations_are_ordered_by_row_then_column_then_check() {
    let report = evaluate(
        &table(&[["900", "abc"], ["1", ""], ["988", "-5"]]),
        &schema(),
    )
    .unwrap();

    let order: Vec<(usize, &str)> = report
        .violations
        .iter()
        .map(|violation| (violation.row, violation.check.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            (0, "amount_applied_for.invalid_numeric_format"),
            (0, "amount_applied_for.invalid_numeric_value"),
            (1, "amount_applied_for_flag.invalid_enum_value"),
            (2, "amount_applied_for.conditional_field_conflict"),
            (2, "amount_applied_for.invalid_numeric_value"),
        ]
    );
    assert_eq!(report.error_count(), 3);
    assert_eq!(report.warning_count(), 2);
    assert_eq!(report.status(), FilingStatus::Failed);
}

#[test]
fn violation_carries_check_metadata() {
    let report = evaluate(&table(&[["988", "10"]]), &schema()).unwrap();
    let violation = &report.violations[0];
    assert_eq!(violation.row, 0);
    assert_eq!(violation.column, "amount_applied_for");
    assert_eq!(
        violation.check,
        "amount_applied_for.conditional_field_conflict"
    );
    assert_eq!(violation.severity, Severity::Error);
    assert_eq!(violation.description, "must be blank unless the flag is 900");
}

#[test]
fn warnings_alone_do_not_fail_the_filing() {
    let report = evaluate(&table(&[["900", "0"]]), &schema()).unwrap();
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());
    assert_eq!(report.status(), FilingStatus::PassedWithWarnings);
}

#[test]
fn evaluation_is_idempotent() {
    let schema = schema();
    let table = table(&[["900", "abc"], ["1", ""], ["988", "-5"]]);
    assert_eq!(
        evaluate(&table, &schema).unwrap(),
        evaluate(&table, &schema).unwrap()
    );
}

#[test]
fn threaded_matches_sequential() {
    let schema = schema();
    let rows: Vec<[&str; 2]> = (0..200)
        .map(|idx| match idx % 5 {
            0 => ["900", "100"],
            1 => ["900", ""],
            2 => ["988", "7"],
            3 => ["5", "x"],
            _ => ["999", ""],
        })
        .collect();
    let table = table(&rows);

    let sequential = evaluate(&table, &schema).unwrap();
    for parallelism in [
        Parallelism::Auto,
        Parallelism::Threads(NonZeroUsize::new(2).unwrap()),
        Parallelism::Threads(NonZeroUsize::new(8).unwrap()),
    ] {
        let threaded = Evaluator::new(&schema)
            .with_options(EvaluationOptions::default().with_parallelism(parallelism))
            .evaluate(&table)
            .unwrap();
        assert_eq!(threaded, sequential, "{parallelism:?}");
    }
}

#[test]
fn missing_schema_column_is_a_config_error() {
    let table = Table::from_rows(&["amount_applied_for_flag"], vec![vec!["900".to_string()]])
        .unwrap();
    assert_eq!(
        evaluate(&table, &schema()),
        Err(ValidationError::MissingColumn {
            column: "amount_applied_for".to_string()
        })
    );
}

#[test]
fn missing_controlling_column_is_a_config_error() {
    let schema = Schema::new(vec![
        ColumnSchema::new("amount_applied_for", "Field 14: amount applied for").with_check(
            CheckDescriptor::error(
                "amount_applied_for.conditional_field_conflict",
                "must be blank unless the flag is 900",
                Predicate::conditional(
                    "amount_applied_for_flag",
                    ConditionalCheck::field_conflict(["900"]),
                ),
            ),
        ),
        ColumnSchema::new("amount_applied_for_flag", "Field 13: amount applied for: NA/NP flag"),
    ])
    .unwrap();
    let table =
        Table::from_rows(&["amount_applied_for"], vec![vec!["1".to_string()]]).unwrap();

    assert_eq!(
        evaluate(&table, &schema),
        Err(ValidationError::MissingColumn {
            column: "amount_applied_for_flag".to_string()
        })
    );
}

#[test]
fn empty_table_has_no_violations() {
    let report = evaluate(&table(&[]), &schema()).unwrap();
    assert_eq!(report.rows, 0);
    assert!(report.violations.is_empty());
}

/// Collects formatted log lines written by the subscriber.
struct LogCapture {
    logs: Arc<Mutex<Vec<String>>>,
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.logs
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(buf).to_string());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn logs_counts_without_row_values() {
    let logs = Arc::new(Mutex::new(Vec::new()));
    let writer_logs = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(move || LogCapture {
            logs: writer_logs.clone(),
        })
        .with_env_filter("sblar_validate=trace")
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    evaluate(&table(&[["988", "31415926"]]), &schema()).unwrap();

    let output = logs.lock().unwrap().concat();
    assert!(output.contains("evaluation complete"), "{output}");
    assert!(output.contains("\"errors\":1"), "{output}");
    assert!(output.contains("column evaluated"), "{output}");
    assert!(!output.contains("31415926"), "{output}");
}
