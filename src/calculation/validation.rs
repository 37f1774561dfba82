//! Attendance normalization and strict validation.
//!
//! Permissive normalization never fails: missing or unrecognized fields are
//! defaulted and reported as audit warnings. Strict validation rejects the
//! same inputs with [`PayrollError`].

use std::collections::HashSet;

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceEntry, AttendanceRecord, AuditWarning, WarningSeverity};

/// Warning code raised for each defaulted attendance field.
pub const ATTENDANCE_DEFAULTED: &str = "ATTENDANCE_DEFAULTED";

/// Converts raw entries to records, defaulting anything missing.
///
/// Returns the records in input order together with one warning per
/// defaulted field.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::normalize_attendance;
/// use payroll_engine::models::{AttendanceEntry, AttendanceStatus};
///
/// let entries = vec![AttendanceEntry::default()];
/// let (records, warnings) = normalize_attendance(&entries);
///
/// assert_eq!(records[0].status, AttendanceStatus::Absent);
/// assert_eq!(warnings.len(), 2);
/// ```
pub fn normalize_attendance(
    entries: &[AttendanceEntry],
) -> (Vec<AttendanceRecord>, Vec<AuditWarning>) {
    let mut records = Vec::with_capacity(entries.len());
    let mut warnings = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let (record, notes) = entry.resolve_lenient();
        for note in notes {
            let location = match entry.date {
                Some(date) => format!("entry #{} ({})", index, date),
                None => format!("entry #{}", index),
            };
            warn!(entry = index, note = %note, "Attendance field defaulted");
            warnings.push(AuditWarning::new(
                ATTENDANCE_DEFAULTED,
                format!("{}: {}", location, note),
                WarningSeverity::Medium,
            ));
        }
        records.push(record);
    }

    (records, warnings)
}

/// Converts raw entries to records, rejecting malformed or duplicate ones.
///
/// Every entry must carry a date, a recognized status and a non-negative
/// overtime figure no greater than 24 hours; no date may appear twice.
pub fn validate_attendance(entries: &[AttendanceEntry]) -> PayrollResult<Vec<AttendanceRecord>> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut records = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let (date, record) = entry.resolve_strict(index)?;
        if !seen.insert(date) {
            return Err(PayrollError::InvalidAttendance {
                index,
                message: format!("duplicate entry for {}", date),
            });
        }
        records.push(record);
    }

    Ok(records)
}

/// Rejects a zero working-day count, which would otherwise prorate to zero.
pub fn validate_working_days(working_days: u32) -> PayrollResult<()> {
    if working_days == 0 {
        return Err(PayrollError::InvalidWorkingDays { working_days });
    }
    Ok(())
}
