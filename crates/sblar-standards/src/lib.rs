//! The published SBLAR check catalog.
//!
//! [`sblar_schema`] builds the validation schema for all 81 filing fields from
//! [`CatalogOptions`]; [`catalog_entries`] flattens any schema into a listing
//! of its checks.

pub mod catalog;
pub mod error;
pub mod listing;
pub mod options;

pub use catalog::{load_default_schema, sblar_schema};
pub use error::{Result, StandardsError};
pub use listing::{CatalogEntry, catalog_entries};
pub use options::{CatalogOptions, ReportingPeriod};
