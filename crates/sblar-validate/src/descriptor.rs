//! Named, severity-tagged checks.

use sblar_model::Severity;

use crate::checks::ElementCheck;
use crate::conditional::ConditionalCheck;

/// What a descriptor evaluates.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Looks only at the value of the column the check is declared on.
    ElementWise(ElementCheck),
    /// Partitions the column by `groupby` before evaluating.
    Conditional {
        groupby: String,
        check: ConditionalCheck,
    },
}

impl Predicate {
    pub fn conditional(groupby: impl Into<String>, check: ConditionalCheck) -> Self {
        Self::Conditional {
            groupby: groupby.into(),
            check,
        }
    }
}

impl From<ElementCheck> for Predicate {
    fn from(check: ElementCheck) -> Self {
        Self::ElementWise(check)
    }
}

/// A predicate bound to its reporting metadata.
///
/// `name` and `description` are echoed verbatim into every violation the
/// check produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckDescriptor {
    name: String,
    severity: Severity,
    description: String,
    predicate: Predicate,
}

impl CheckDescriptor {
    pub fn new(
        name: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        predicate: impl Into<Predicate>,
    ) -> Self {
        Self {
            name: name.into(),
            severity,
            description: description.into(),
            predicate: predicate.into(),
        }
    }

    pub fn error(
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: impl Into<Predicate>,
    ) -> Self {
        Self::new(name, Severity::Error, description, predicate)
    }

    pub fn warning(
        name: impl Into<String>,
        description: impl Into<String>,
        predicate: impl Into<Predicate>,
    ) -> Self {
        Self::new(name, Severity::Warning, description, predicate)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Controlling column, for conditional checks.
    pub fn groupby(&self) -> Option<&str> {
        match &self.predicate {
            Predicate::ElementWise(_) => None,
            Predicate::Conditional { groupby, .. } => Some(groupby),
        }
    }
}
