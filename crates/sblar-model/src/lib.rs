pub mod error;
pub mod summary;
pub mod table;
pub mod violation;

pub use error::{ModelError, Result};
pub use summary::{ReportSummary, SeverityCounts};
pub use table::{Column, RowIndex, Table};
pub use violation::{FilingStatus, Severity, ValidationReport, Violation};
