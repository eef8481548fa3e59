//! Grouping rows by the raw value of a controlling column.
//!
//! Conditional checks decide per controlling value, so rows are first grouped
//! by that value. Each group keeps the original row positions so the per-row
//! outcome can be scattered back into filing order afterwards.
//!
//! The builder compares controlling values as exact text. Decoding a key as a
//! multi-value field is left to the check that consumes the partitions.

use std::collections::BTreeMap;

use sblar_model::RowIndex;

/// Rows of a dependent column grouped by controlling value.
///
/// Invariant: every row index in `0..row_count` appears in exactly one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions<'a> {
    groups: BTreeMap<&'a str, Vec<(RowIndex, &'a str)>>,
    row_count: usize,
}

impl<'a> Partitions<'a> {
    /// Group `dependent` values by the `controlling` value on the same row.
    ///
    /// Both slices are indexed by row and must have the same length; extra
    /// values on the longer side are ignored.
    pub fn build(controlling: &'a [String], dependent: &'a [String]) -> Self {
        debug_assert_eq!(controlling.len(), dependent.len());
        let mut groups: BTreeMap<&'a str, Vec<(RowIndex, &'a str)>> = BTreeMap::new();
        let mut row_count = 0usize;
        for (row, (key, value)) in controlling.iter().zip(dependent).enumerate() {
            groups
                .entry(key.as_str())
                .or_default()
                .push((row, value.as_str()));
            row_count += 1;
        }
        Self { groups, row_count }
    }

    /// Number of distinct controlling values.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of rows across all groups.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn get(&self, key: &str) -> Option<&[(RowIndex, &'a str)]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[(RowIndex, &'a str)])> + '_ {
        self.groups
            .iter()
            .map(|(key, rows)| (*key, rows.as_slice()))
    }

    /// Evaluate a rule group by group and reassemble per-row outcomes.
    ///
    /// `per_partition` is called once per controlling value and returns the
    /// test applied to each dependent value in that group. The result has one
    /// entry per row, in row order.
    pub fn scatter<F, G>(&self, mut per_partition: F) -> Vec<bool>
    where
        F: FnMut(&'a str) -> G,
        G: FnMut(&'a str) -> bool,
    {
        let mut outcomes = vec![true; self.row_count];
        for (&key, rows) in &self.groups {
            let mut test = per_partition(key);
            for &(row, value) in rows {
                outcomes[row] = test(value);
            }
        }
        outcomes
    }
}
