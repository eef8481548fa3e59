//! Evaluation driver.
//!
//! Binds a [`Schema`] to a [`Table`], runs every check on every column and
//! collects failed rows as violations. Binding resolves all referenced
//! columns up front, so a missing column is reported before any row is read.
//!
//! With [`Parallelism::Sequential`] columns are evaluated on the calling
//! thread. Otherwise columns are dealt round-robin to scoped workers, each
//! filling its own buffer. Either way the merged output is sorted by row,
//! then column declaration order, then check declaration order, so the
//! report does not depend on the mode.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{Span, debug, debug_span, info, trace};

use sblar_model::{RowIndex, Table, ValidationReport, Violation};

use crate::checks::ElementCheck;
use crate::conditional::ConditionalCheck;
use crate::descriptor::{CheckDescriptor, Predicate};
use crate::error::{Result, ValidationError};
use crate::partition::Partitions;
use crate::schema::{ColumnSchema, Schema};

/// How columns are spread across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// Evaluate on the calling thread.
    #[default]
    Sequential,
    /// One worker per available core.
    Auto,
    /// A fixed number of workers.
    Threads(NonZeroUsize),
}

impl Parallelism {
    /// Workers to spawn for `columns` columns; never more than there are
    /// columns and never zero.
    fn worker_count(self, columns: usize) -> usize {
        let wanted = match self {
            Self::Sequential => 1,
            Self::Auto => thread::available_parallelism().map_or(1, NonZeroUsize::get),
            Self::Threads(count) => count.get(),
        };
        wanted.min(columns).max(1)
    }
}

/// Options for one evaluation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationOptions {
    pub parallelism: Parallelism,
}

impl EvaluationOptions {
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }
}

/// Evaluate `table` against `schema` with default options.
pub fn evaluate(table: &Table, schema: &Schema) -> Result<ValidationReport> {
    Evaluator::new(schema).evaluate(table)
}

/// Runs a schema against tables.
#[derive(Debug, Clone)]
pub struct Evaluator<'s> {
    schema: &'s Schema,
    options: EvaluationOptions,
}

impl<'s> Evaluator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            options: EvaluationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EvaluationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> EvaluationOptions {
        self.options
    }

    /// Evaluate every check of the schema against `table`.
    ///
    /// Fails only when a schema column or a controlling column is absent from
    /// the table. Rule failures are returned as violations in the report.
    pub fn evaluate(&self, table: &Table) -> Result<ValidationReport> {
        let span = debug_span!(
            "evaluate",
            rows = table.row_count(),
            columns = self.schema.len()
        );
        let _enter = span.enter();
        let started = Instant::now();

        let bound = bind(self.schema, table)?;
        let workers = self.options.parallelism.worker_count(bound.len());
        debug!(
            checks = self.schema.check_count(),
            workers, "schema bound to table"
        );

        let mut keyed = if workers <= 1 {
            let mut buffer = Vec::new();
            for column in &bound {
                column.evaluate_into(&mut buffer);
            }
            buffer
        } else {
            evaluate_threaded(&bound, workers, &span)
        };
        keyed.sort_by_key(KeyedViolation::sort_key);

        let report = ValidationReport {
            rows: table.row_count(),
            violations: keyed.into_iter().map(|keyed| keyed.violation).collect(),
        };
        info!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            duration_ms = started.elapsed().as_millis() as u64,
            "evaluation complete"
        );
        Ok(report)
    }
}

fn evaluate_threaded(
    bound: &[BoundColumn<'_>],
    workers: usize,
    span: &Span,
) -> Vec<KeyedViolation> {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let span = span.clone();
                scope.spawn(move || {
                    let _enter = span.enter();
                    let mut buffer = Vec::new();
                    for column in bound.iter().skip(worker).step_by(workers) {
                        column.evaluate_into(&mut buffer);
                    }
                    buffer
                })
            })
            .collect();

        let mut merged = Vec::new();
        for handle in handles {
            match handle.join() {
                Ok(buffer) => merged.extend(buffer),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        merged
    })
}

/// Resolve every column a schema touches against the table.
fn bind<'a>(schema: &'a Schema, table: &'a Table) -> Result<Vec<BoundColumn<'a>>> {
    let lookup = |name: &str| {
        table
            .column(name)
            .map(|column| column.values())
            .ok_or_else(|| ValidationError::MissingColumn {
                column: name.to_string(),
            })
    };

    schema
        .columns()
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let values = lookup(column.name())?;
            let checks = column
                .checks()
                .iter()
                .map(|descriptor| {
                    let predicate = match descriptor.predicate() {
                        Predicate::ElementWise(check) => BoundPredicate::ElementWise(check),
                        Predicate::Conditional { groupby, check } => BoundPredicate::Conditional {
                            check,
                            controlling: lookup(groupby)?,
                        },
                    };
                    Ok(BoundCheck {
                        descriptor,
                        predicate,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(BoundColumn {
                index,
                schema: column,
                values,
                checks,
            })
        })
        .collect()
}

struct BoundColumn<'a> {
    index: usize,
    schema: &'a ColumnSchema,
    values: &'a [String],
    checks: Vec<BoundCheck<'a>>,
}

struct BoundCheck<'a> {
    descriptor: &'a CheckDescriptor,
    predicate: BoundPredicate<'a>,
}

enum BoundPredicate<'a> {
    ElementWise(&'a ElementCheck),
    Conditional {
        check: &'a ConditionalCheck,
        controlling: &'a [String],
    },
}

impl BoundColumn<'_> {
    fn evaluate_into(&self, buffer: &mut Vec<KeyedViolation>) {
        let before = buffer.len();
        for (check_index, check) in self.checks.iter().enumerate() {
            let outcomes = match &check.predicate {
                BoundPredicate::ElementWise(element) => element.evaluate(self.values),
                BoundPredicate::Conditional { check, controlling } => {
                    check.evaluate(&Partitions::build(controlling, self.values))
                }
            };
            let descriptor = check.descriptor;
            buffer.extend(
                outcomes
                    .iter()
                    .enumerate()
                    .filter(|(_, passed)| !**passed)
                    .map(|(row, _)| KeyedViolation {
                        column: self.index,
                        check: check_index,
                        violation: Violation {
                            row,
                            column: self.schema.name().to_string(),
                            check: descriptor.name().to_string(),
                            severity: descriptor.severity(),
                            description: descriptor.description().to_string(),
                        },
                    }),
            );
        }
        trace!(
            column = self.schema.name(),
            violations = buffer.len() - before,
            "column evaluated"
        );
    }
}

/// A violation tagged with its declaration position for ordering.
struct KeyedViolation {
    column: usize,
    check: usize,
    violation: Violation,
}

impl KeyedViolation {
    fn sort_key(&self) -> (RowIndex, usize, usize) {
        (self.violation.row, self.column, self.check)
    }
}
