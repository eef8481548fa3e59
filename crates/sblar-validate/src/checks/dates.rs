//! YYYYMMDD date checks.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, ValidationError};

/// Length of a YYYYMMDD date.
const DATE_LEN: usize = 8;

/// Parse a YYYYMMDD value into a calendar date.
///
/// Returns `None` for anything that is not exactly eight ASCII digits forming
/// a real date. Year `0000` is rejected.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != DATE_LEN || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let year: i32 = value[0..4].parse().ok()?;
    let month: u32 = value[4..6].parse().ok()?;
    let day: u32 = value[6..8].parse().ok()?;
    if year == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a configured date bound, failing loudly on a bad literal.
pub fn parse_date_bound(value: &str) -> Result<NaiveDate> {
    parse_date(value).ok_or_else(|| ValidationError::InvalidDateBound {
        value: value.to_string(),
    })
}

/// Format a date back into YYYYMMDD.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

pub fn is_date(value: &str) -> bool {
    parse_date(value).is_some()
}

/// Valid date within `[start, end]`, both inclusive.
pub fn is_date_in_range(value: &str, start: NaiveDate, end: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| start <= date && date <= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_dates() {
        assert!(is_date("20231010"));
        assert!(is_date("20240229"));
        assert!(is_date("00010101"));
    }

    #[test]
    fn rejects_malformed_dates() {
        // wrong length
        assert!(!is_date("202310101"));
        assert!(!is_date("2023101"));
        assert!(!is_date(""));
        // day out of range
        assert!(!is_date("20231032"));
        assert!(!is_date("20230431"));
        assert!(!is_date("20230230"));
        assert!(!is_date("20230229"));
        // month out of range
        assert!(!is_date("20231301"));
        assert!(!is_date("20230001"));
        // year zero
        assert!(!is_date("00001201"));
        // non-digits
        assert!(!is_date("2023-1-1"));
        assert!(!is_date("+2023101"));
        assert!(!is_date("２０２３１０１"));
    }

    #[test]
    fn range_is_inclusive() {
        let start = parse_date_bound("20241001").expect("start");
        let end = parse_date_bound("20241231").expect("end");
        assert!(is_date_in_range("20241001", start, end));
        assert!(is_date_in_range("20241231", start, end));
        assert!(!is_date_in_range("20240930", start, end));
        assert!(!is_date_in_range("20250101", start, end));
        assert!(!is_date_in_range("20241232", start, end));
    }

    #[test]
    fn bad_bound_is_a_configuration_error() {
        assert_eq!(
            parse_date_bound("2024-10-01"),
            Err(ValidationError::InvalidDateBound {
                value: "2024-10-01".to_string()
            })
        );
    }

    #[test]
    fn format_round_trips_bounds() {
        let date = parse_date_bound("20241001").expect("date");
        assert_eq!(format_date(date), "20241001");
    }
}
