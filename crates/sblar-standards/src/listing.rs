//! Flat listing of a schema's checks.

use serde::{Deserialize, Serialize};

use sblar_model::Severity;
use sblar_validate::Schema;

/// One check of a schema, flattened for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub column: String,
    pub title: String,
    pub check: String,
    pub severity: Severity,
    /// Controlling column for conditional checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupby: Option<String>,
    pub description: String,
}

/// List every check of `schema` in declaration order. Columns without checks
/// contribute no entries.
pub fn catalog_entries(schema: &Schema) -> Vec<CatalogEntry> {
    schema
        .columns()
        .iter()
        .flat_map(|column| {
            column.checks().iter().map(move |check| CatalogEntry {
                column: column.name().to_string(),
                title: column.title().to_string(),
                check: check.name().to_string(),
                severity: check.severity(),
                groupby: check.groupby().map(str::to_string),
                description: check.description().to_string(),
            })
        })
        .collect()
}
