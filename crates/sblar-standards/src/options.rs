//! Configuration of the published catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sblar_validate::checks::{format_date, parse_date};
use sblar_validate::conditional::OTHER;

use crate::error::{Result, StandardsError};

/// Inclusive window in which action taken dates must fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    /// Build a period from YYYYMMDD literals.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let invalid = || StandardsError::InvalidReportingPeriod {
            start: start.to_string(),
            end: end.to_string(),
        };
        let start_date = parse_date(start).ok_or_else(invalid)?;
        let end_date = parse_date(end).ok_or_else(invalid)?;
        if start_date > end_date {
            return Err(invalid());
        }
        Ok(Self {
            start: start_date,
            end: end_date,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Bounds as YYYYMMDD, the format filings use.
    pub fn bounds(&self) -> (String, String) {
        (format_date(self.start), format_date(self.end))
    }

    /// Human-readable form, e.g. "October 1, 2024 to December 31, 2024".
    pub fn describe(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%B %-d, %Y"),
            self.end.format("%B %-d, %Y")
        )
    }
}

impl Default for ReportingPeriod {
    /// The 2024 filing period, October 1 to December 31.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
        }
    }
}

/// Options for building the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// Window for `action_taken_date`.
    pub reporting_period: ReportingPeriod,

    /// How many days before the action taken date an application date may
    /// fall before it is flagged as unreasonable.
    pub application_window_days: u32,

    /// Code for "other" in multi-value fields backed by free-form text.
    /// Not counted towards the combined value limit.
    pub other_code: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            reporting_period: ReportingPeriod::default(),
            application_window_days: 730,
            other_code: OTHER.to_string(),
        }
    }
}

impl CatalogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporting_period(mut self, period: ReportingPeriod) -> Self {
        self.reporting_period = period;
        self
    }

    pub fn with_application_window_days(mut self, days: u32) -> Self {
        self.application_window_days = days;
        self
    }

    pub fn with_other_code(mut self, code: impl Into<String>) -> Self {
        self.other_code = code.into();
        self
    }
}
