//! Pay period model.
//!
//! A pay period is identified by a month name and a year. The calculator
//! treats it as a label only; callers pre-filter attendance for the window.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// A (month name, year) pair identifying a payroll computation window.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new("October", 2023);
/// assert_eq!(period.label(), "October-2023");
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2023, 10, 9).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The month name as entered (e.g., "October").
    pub month: String,
    /// The calendar year.
    pub year: i32,
}

impl PayPeriod {
    /// Creates a pay period.
    pub fn new(month: &str, year: i32) -> Self {
        Self {
            month: month.to_string(),
            year,
        }
    }

    /// Returns the printable label, e.g. "October-2023".
    pub fn label(&self) -> String {
        format!("{}-{}", self.month, self.year)
    }

    /// Resolves the month name to its number (1-12).
    ///
    /// Full names and three-letter abbreviations are accepted in any case.
    /// Returns `None` if the name is not a month.
    pub fn month_number(&self) -> Option<u32> {
        Month::from_str(self.month.trim())
            .ok()
            .map(|m| m.number_from_month())
    }

    /// Checks whether `date` falls in this period's calendar month.
    ///
    /// Always false when the month name cannot be resolved.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.month_number()
            .is_some_and(|month| date.year() == self.year && date.month() == month)
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label_and_display_agree() {
        let period = PayPeriod::new("November", 2023);
        assert_eq!(period.label(), "November-2023");
        assert_eq!(period.to_string(), period.label());
    }

    #[test]
    fn test_month_number_full_and_abbreviated() {
        assert_eq!(PayPeriod::new("December", 2023).month_number(), Some(12));
        assert_eq!(PayPeriod::new("dec", 2023).month_number(), Some(12));
        assert_eq!(PayPeriod::new("JANUARY", 2024).month_number(), Some(1));
    }

    #[test]
    fn test_unknown_month_name_resolves_to_none() {
        let period = PayPeriod::new("Smarch", 2023);
        assert_eq!(period.month_number(), None);
        assert!(!period.contains_date(date(2023, 3, 1)));
    }

    #[test]
    fn test_contains_date_checks_year() {
        let period = PayPeriod::new("October", 2023);
        assert!(period.contains_date(date(2023, 10, 1)));
        assert!(period.contains_date(date(2023, 10, 31)));
        assert!(!period.contains_date(date(2022, 10, 15)));
        assert!(!period.contains_date(date(2023, 9, 30)));
    }

    #[test]
    fn test_serialize_pay_period() {
        let period = PayPeriod::new("October", 2023);
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, r#"{"month":"October","year":2023}"#);
    }
}
