//! Column schemas and their structural validation.

use std::collections::BTreeSet;

use tracing::debug;

use crate::descriptor::CheckDescriptor;
use crate::error::{Result, ValidationError};

/// Checks declared on one column, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    name: String,
    title: String,
    checks: Vec<CheckDescriptor>,
}

impl ColumnSchema {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            checks: Vec::new(),
        }
    }

    pub fn with_check(mut self, check: CheckDescriptor) -> Self {
        self.checks.push(check);
        self
    }

    pub fn with_checks(mut self, checks: impl IntoIterator<Item = CheckDescriptor>) -> Self {
        self.checks.extend(checks);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title, e.g. `"Field 10: loan term"`.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn checks(&self) -> &[CheckDescriptor] {
        &self.checks
    }
}

/// An ordered, validated set of column schemas.
///
/// Construction guarantees unique column names, unique check names within
/// each column, and that every conditional check is grouped by a column
/// declared in the same schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<ColumnSchema>,
}

impl Schema {
    pub fn new(columns: Vec<ColumnSchema>) -> Result<Self> {
        let mut names = BTreeSet::new();
        for column in &columns {
            if !names.insert(column.name.as_str()) {
                return Err(ValidationError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }

        for column in &columns {
            let mut checks = BTreeSet::new();
            for check in &column.checks {
                if !checks.insert(check.name()) {
                    return Err(ValidationError::DuplicateCheck {
                        column: column.name.clone(),
                        check: check.name().to_string(),
                    });
                }
                if let Some(groupby) = check.groupby()
                    && !names.contains(groupby)
                {
                    return Err(ValidationError::UnknownControllingColumn {
                        column: column.name.clone(),
                        check: check.name().to_string(),
                        groupby: groupby.to_string(),
                    });
                }
            }
        }

        let schema = Self { columns };
        debug!(
            columns = schema.columns.len(),
            checks = schema.check_count(),
            "schema validated"
        );
        Ok(schema)
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Total number of checks across all columns.
    pub fn check_count(&self) -> usize {
        self.columns.iter().map(|column| column.checks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::ElementCheck;
    use crate::conditional::ConditionalCheck;
    use crate::descriptor::Predicate;

    fn number_check(name: &str) -> CheckDescriptor {
        CheckDescriptor::error(name, "must be numeric", ElementCheck::Number)
    }

    #[test]
    fn rejects_duplicate_columns() {
        let result = Schema::new(vec![
            ColumnSchema::new("a", "Field 1: a"),
            ColumnSchema::new("a", "Field 2: a"),
        ]);
        assert_eq!(
            result,
            Err(ValidationError::DuplicateColumn {
                column: "a".to_string()
            })
        );
    }

    #[test]
    fn rejects_duplicate_checks_within_a_column() {
        let result = Schema::new(vec![ColumnSchema::new("a", "Field 1: a").with_checks([
            number_check("a.invalid_numeric_format"),
            number_check("a.invalid_numeric_format"),
        ])]);
        assert!(matches!(result, Err(ValidationError::DuplicateCheck { .. })));
    }

    #[test]
    fn same_check_name_on_different_columns_is_fine() {
        let schema = Schema::new(vec![
            ColumnSchema::new("a", "Field 1: a").with_check(number_check("numeric")),
            ColumnSchema::new("b", "Field 2: b").with_check(number_check("numeric")),
        ])
        .unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.check_count(), 2);
    }

    #[test]
    fn groupby_may_reference_a_later_column() {
        let conflict = CheckDescriptor::error(
            "b.conditional_field_conflict",
            "required when flag is 900",
            Predicate::conditional("flag", ConditionalCheck::field_conflict(["900"])),
        );
        let schema = Schema::new(vec![
            ColumnSchema::new("b", "Field 2: b").with_check(conflict),
            ColumnSchema::new("flag", "Field 1: flag"),
        ]);
        assert!(schema.is_ok());
    }

    #[test]
    fn rejects_unknown_controlling_column() {
        let conflict = CheckDescriptor::error(
            "b.conditional_field_conflict",
            "required when flag is 900",
            Predicate::conditional("missing", ConditionalCheck::field_conflict(["900"])),
        );
        let result = Schema::new(vec![ColumnSchema::new("b", "Field 2: b").with_check(conflict)]);
        assert_eq!(
            result,
            Err(ValidationError::UnknownControllingColumn {
                column: "b".to_string(),
                check: "b.conditional_field_conflict".to_string(),
                groupby: "missing".to_string(),
            })
        );
    }
}
