//! Attendance models.
//!
//! [`AttendanceRecord`] is the typed, per-date record the calculator
//! consumes; the date itself is the storage key. [`AttendanceEntry`] is the
//! loosely-typed form that arrives from manual entry or bulk import, where
//! any field may be missing.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Maximum overtime accepted for a single day in strict mode.
pub const MAX_DAILY_OVERTIME_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Attendance status for one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worked the full day.
    Present,
    /// Worked half the day.
    #[serde(alias = "Half Day")]
    HalfDay,
    /// Did not work. Also the fallback for missing data.
    #[default]
    Absent,
    /// On leave.
    Leave,
    /// Scheduled weekly off.
    #[serde(alias = "Week Off")]
    WeekOff,
}

impl AttendanceStatus {
    /// Parses a status label as written by people and import files.
    ///
    /// Matching ignores case, spaces, hyphens and underscores, so
    /// "Half Day", "half_day" and "HalfDay" are equivalent.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::AttendanceStatus;
    ///
    /// assert_eq!(AttendanceStatus::parse_label("Half Day"), Some(AttendanceStatus::HalfDay));
    /// assert_eq!(AttendanceStatus::parse_label("week-off"), Some(AttendanceStatus::WeekOff));
    /// assert_eq!(AttendanceStatus::parse_label("Sick"), None);
    /// ```
    pub fn parse_label(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "present" => Some(Self::Present),
            "halfday" => Some(Self::HalfDay),
            "absent" => Some(Self::Absent),
            "leave" => Some(Self::Leave),
            "weekoff" => Some(Self::WeekOff),
            _ => None,
        }
    }

    /// The fraction of a day this status contributes to paid days.
    pub fn paid_fraction(self) -> Decimal {
        match self {
            Self::Present => Decimal::ONE,
            Self::HalfDay => Decimal::new(5, 1),
            Self::Absent | Self::Leave | Self::WeekOff => Decimal::ZERO,
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Present => "Present",
            Self::HalfDay => "Half Day",
            Self::Absent => "Absent",
            Self::Leave => "Leave",
            Self::WeekOff => "Week Off",
        };
        f.write_str(label)
    }
}

/// One attendance record for an employee on a single date.
///
/// Missing fields deserialize to `Absent` and zero overtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceRecord {
    /// Attendance status for the day.
    pub status: AttendanceStatus,
    /// Overtime hours worked on the day.
    pub overtime_hours: Decimal,
}

impl AttendanceRecord {
    /// Creates a record with the given status and overtime.
    pub fn new(status: AttendanceStatus, overtime_hours: Decimal) -> Self {
        Self {
            status,
            overtime_hours,
        }
    }

    /// Creates a `Present` record with no overtime.
    pub fn present() -> Self {
        Self::new(AttendanceStatus::Present, Decimal::ZERO)
    }
}

/// A raw attendance entry as supplied by manual entry or bulk import.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceEntry, AttendanceStatus};
/// use rust_decimal::Decimal;
///
/// let entry: AttendanceEntry = serde_json::from_str(r#"{"status": "Half Day"}"#).unwrap();
/// let (record, notes) = entry.resolve_lenient();
///
/// assert_eq!(record.status, AttendanceStatus::HalfDay);
/// assert_eq!(record.overtime_hours, Decimal::ZERO);
/// assert_eq!(notes, vec!["overtime_hours missing, defaulted to 0".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceEntry {
    /// The calendar date of the entry.
    pub date: Option<NaiveDate>,
    /// Free-text status label.
    pub status: Option<String>,
    /// Overtime hours worked.
    #[serde(alias = "ot_hours")]
    pub overtime_hours: Option<Decimal>,
}

impl AttendanceEntry {
    /// Creates a fully-populated entry.
    pub fn new(date: NaiveDate, status: &str, overtime_hours: Decimal) -> Self {
        Self {
            date: Some(date),
            status: Some(status.to_string()),
            overtime_hours: Some(overtime_hours),
        }
    }

    /// Converts the entry, substituting defaults for anything missing.
    ///
    /// A missing or unrecognized status becomes `Absent` and missing
    /// overtime becomes zero. Each substitution is described in the
    /// returned notes so callers can surface it.
    pub fn resolve_lenient(&self) -> (AttendanceRecord, Vec<String>) {
        let mut notes = Vec::new();

        let status = match self.status.as_deref() {
            Some(label) => AttendanceStatus::parse_label(label).unwrap_or_else(|| {
                notes.push(format!("status '{}' not recognized, defaulted to Absent", label));
                AttendanceStatus::Absent
            }),
            None => {
                notes.push("status missing, defaulted to Absent".to_string());
                AttendanceStatus::Absent
            }
        };

        let overtime_hours = self.overtime_hours.unwrap_or_else(|| {
            notes.push("overtime_hours missing, defaulted to 0".to_string());
            Decimal::ZERO
        });

        (AttendanceRecord::new(status, overtime_hours), notes)
    }

    /// Converts the entry, rejecting anything missing or out of range.
    ///
    /// `index` is the entry's position in its sequence and is carried into
    /// the error.
    pub fn resolve_strict(&self, index: usize) -> PayrollResult<(NaiveDate, AttendanceRecord)> {
        let invalid = |message: String| PayrollError::InvalidAttendance { index, message };

        let date = self
            .date
            .ok_or_else(|| invalid("date is missing".to_string()))?;

        let label = self
            .status
            .as_deref()
            .ok_or_else(|| invalid(format!("status is missing for {}", date)))?;
        let status = AttendanceStatus::parse_label(label)
            .ok_or_else(|| invalid(format!("unrecognized status '{}' for {}", label, date)))?;

        let overtime_hours = self
            .overtime_hours
            .ok_or_else(|| invalid(format!("overtime_hours is missing for {}", date)))?;
        if overtime_hours < Decimal::ZERO {
            return Err(invalid(format!(
                "overtime_hours {} is negative for {}",
                overtime_hours, date
            )));
        }
        if overtime_hours > MAX_DAILY_OVERTIME_HOURS {
            return Err(invalid(format!(
                "overtime_hours {} exceeds {} for {}",
                overtime_hours, MAX_DAILY_OVERTIME_HOURS, date
            )));
        }

        Ok((date, AttendanceRecord::new(status, overtime_hours)))
    }
}
