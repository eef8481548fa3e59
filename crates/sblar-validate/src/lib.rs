//! Cross-field validation of SBLAR filings.
//!
//! A [`Schema`] lists, per column, the checks a filing must pass. Element
//! checks look at one value; conditional checks first group the column by a
//! controlling column (see [`Partitions`]) and decide per group. The
//! [`evaluate`] entry point turns failed rows into an ordered
//! [`ValidationReport`](sblar_model::ValidationReport).

pub mod checks;
pub mod codec;
pub mod conditional;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod partition;
pub mod schema;

pub use checks::{ElementCheck, NumericBound};
pub use conditional::{ConditionalCheck, EnumPairing};
pub use descriptor::{CheckDescriptor, Predicate};
pub use engine::{EvaluationOptions, Evaluator, Parallelism, evaluate};
pub use error::{Result, ValidationError};
pub use partition::Partitions;
pub use schema::{ColumnSchema, Schema};
