//! Paid-day accumulation.
//!
//! Converts a period's attendance records into the number of days to pay
//! for and the total overtime hours worked.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceStatus, AuditStep};

/// The result of accumulating paid days, including the audit step.
#[derive(Debug, Clone)]
pub struct PaidDaysResult {
    /// Days to pay for (Present = 1, Half Day = 0.5).
    pub paid_days: Decimal,
    /// Overtime hours summed across every record.
    pub overtime_hours: Decimal,
    /// True when no attendance was supplied and full pay was assumed.
    pub used_fallback: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Accumulates paid days and overtime hours from attendance records.
///
/// An empty attendance sequence is treated as full presence: the employee is
/// paid for every working day and no overtime. Otherwise `Present` counts
/// one day, `HalfDay` half a day and every other status nothing, while
/// overtime is summed regardless of status.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::accumulate_paid_days;
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use rust_decimal::Decimal;
///
/// let attendance = vec![
///     AttendanceRecord::new(AttendanceStatus::Present, Decimal::new(2, 0)),
///     AttendanceRecord::new(AttendanceStatus::HalfDay, Decimal::ZERO),
///     AttendanceRecord::new(AttendanceStatus::Leave, Decimal::ONE),
/// ];
///
/// let result = accumulate_paid_days(&attendance, 30, 1);
/// assert_eq!(result.paid_days, Decimal::new(15, 1));
/// assert_eq!(result.overtime_hours, Decimal::new(3, 0));
/// assert!(!result.used_fallback);
/// ```
pub fn accumulate_paid_days(
    attendance: &[AttendanceRecord],
    working_days: u32,
    step_number: u32,
) -> PaidDaysResult {
    if attendance.is_empty() {
        let paid_days = Decimal::from(working_days);
        return PaidDaysResult {
            paid_days,
            overtime_hours: Decimal::ZERO,
            used_fallback: true,
            audit_step: AuditStep {
                step_number,
                rule_id: "paid_days".to_string(),
                rule_name: "Paid Day Accumulation".to_string(),
                input: serde_json::json!({
                    "records": 0,
                    "working_days": working_days
                }),
                output: serde_json::json!({
                    "paid_days": paid_days.to_string(),
                    "overtime_hours": "0",
                    "fallback": true
                }),
                reasoning: format!(
                    "No attendance recorded - assuming full presence for {} working days",
                    working_days
                ),
            },
        };
    }

    let mut paid_days = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    let mut present = 0u32;
    let mut half_days = 0u32;

    for record in attendance {
        paid_days += record.status.paid_fraction();
        overtime_hours += record.overtime_hours;
        match record.status {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::HalfDay => half_days += 1,
            _ => {}
        }
    }

    let unpaid = attendance.len() as u32 - present - half_days;

    PaidDaysResult {
        paid_days,
        overtime_hours,
        used_fallback: false,
        audit_step: AuditStep {
            step_number,
            rule_id: "paid_days".to_string(),
            rule_name: "Paid Day Accumulation".to_string(),
            input: serde_json::json!({
                "records": attendance.len(),
                "present": present,
                "half_days": half_days,
                "unpaid": unpaid
            }),
            output: serde_json::json!({
                "paid_days": paid_days.normalize().to_string(),
                "overtime_hours": overtime_hours.normalize().to_string(),
                "fallback": false
            }),
            reasoning: format!(
                "{} present + {} half days x 0.5 = {} paid days; {} overtime hours",
                present,
                half_days,
                paid_days.normalize(),
                overtime_hours.normalize()
            ),
        },
    }
}
