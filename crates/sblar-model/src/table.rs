//! Column-oriented, all-text filing table.
//!
//! Every field in a filing is text. A missing value is the empty string; there
//! is no null sentinel. Rows are addressed by their zero-based position, which
//! stays stable for the lifetime of the table.

#![deny(unsafe_code)]

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Zero-based position of a row in the filing.
pub type RowIndex = usize;

/// A named column of raw field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, row: RowIndex) -> Option<&str> {
        self.values.get(row).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An in-memory filing: columns of equal length, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns.
    ///
    /// Fails if two columns share a name or the columns differ in length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ModelError::DuplicateColumn(column.name.clone()));
            }
        }
        let row_count = columns.first().map_or(0, Column::len);
        for column in &columns {
            if column.len() != row_count {
                return Err(ModelError::ColumnLength {
                    column: column.name.clone(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Build a table from a header row and row-major records.
    pub fn from_rows<S>(headers: &[S], rows: Vec<Vec<String>>) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let mut values: Vec<Vec<String>> = headers
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();
        for (row, record) in rows.into_iter().enumerate() {
            if record.len() != headers.len() {
                return Err(ModelError::RowLength {
                    row,
                    expected: headers.len(),
                    actual: record.len(),
                });
            }
            for (slot, value) in values.iter_mut().zip(record) {
                slot.push(value);
            }
        }
        let columns = headers
            .iter()
            .zip(values)
            .map(|(name, values)| Column::new(name.as_ref(), values))
            .collect();
        Self::new(columns)
    }

    /// Append one row; values are given in column order.
    pub fn push_row(&mut self, record: Vec<String>) -> Result<()> {
        if record.len() != self.columns.len() {
            return Err(ModelError::RowLength {
                row: self.row_count,
                expected: self.columns.len(),
                actual: record.len(),
            });
        }
        for (column, value) in self.columns.iter_mut().zip(record) {
            column.values.push(value);
        }
        self.row_count += 1;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Values of one row in column order.
    pub fn row(&self, row: RowIndex) -> Option<Vec<&str>> {
        if row >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| column.values[row].as_str())
                .collect(),
        )
    }
}
