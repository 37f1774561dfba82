//! Salary calculation for one employee and one pay period.
//!
//! Chains paid-day accumulation, proration, earnings and deductions into a
//! [`PayBreakdown`], recording an audit trace along the way.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PolicyConfig;
use crate::error::PayrollResult;
use crate::models::{
    AttendanceEntry, AttendanceRecord, AuditTrace, AuditWarning, Employee, PayBreakdown,
    PayPeriod, WarningSeverity,
};

use super::{
    accumulate_paid_days, calculate_deductions, calculate_earnings, calculate_prorate_factor,
    normalize_attendance, validate_attendance, validate_working_days,
};

/// Working days assumed in a month when the caller has no calendar.
pub const DEFAULT_WORKING_DAYS: u32 = 30;

/// Warning code: no attendance was supplied, so full pay was assumed.
pub const NO_ATTENDANCE_FULL_PAY: &str = "NO_ATTENDANCE_FULL_PAY";
/// Warning code: working days was zero, so pay was prorated to nothing.
pub const ZERO_WORKING_DAYS: &str = "ZERO_WORKING_DAYS";
/// Warning code: overtime summed to a negative number of hours.
pub const NEGATIVE_OVERTIME: &str = "NEGATIVE_OVERTIME";

/// How raw attendance entries are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalculationMode {
    /// Default missing fields and never fail.
    #[default]
    Permissive,
    /// Reject malformed entries and a zero working-day count.
    Strict,
}

/// A pay breakdown together with the audit trace that produced it.
#[derive(Debug, Clone)]
pub struct SalaryCalculation {
    /// The itemized pay.
    pub breakdown: PayBreakdown,
    /// Every rule applied and every fallback taken.
    pub audit_trace: AuditTrace,
}

/// Calculates an employee's pay for a period.
///
/// Never fails: an empty attendance sequence pays the full month and zero
/// working days prorates to nothing. Use [`calculate_salary_traced`] to see
/// which fallbacks were taken.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_salary, DEFAULT_WORKING_DAYS};
/// use payroll_engine::config::PolicyConfig;
/// use payroll_engine::models::{CompensationStructure, Employee, PayPeriod, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP001".to_string(),
///     name: "Alice Johnson".to_string(),
///     email: "alice@company.com".to_string(),
///     role: Role::Hr,
///     department: "Human Resources".to_string(),
///     designation: "Manager".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     compensation: CompensationStructure {
///         ctc: Decimal::new(1_200_000, 0),
///         basic: Decimal::new(600_000, 0),
///         house_rent_allowance: Decimal::new(240_000, 0),
///         special_allowance: Decimal::new(360_000, 0),
///     },
/// };
///
/// let breakdown = calculate_salary(
///     &employee,
///     &[],
///     &PayPeriod::new("October", 2023),
///     DEFAULT_WORKING_DAYS,
///     &PolicyConfig::default(),
/// );
///
/// assert_eq!(breakdown.gross_salary, Decimal::new(100_000, 0));
/// assert_eq!(breakdown.total_deductions, Decimal::new(11_225, 0));
/// assert_eq!(breakdown.net_salary, Decimal::new(88_775, 0));
/// ```
pub fn calculate_salary(
    employee: &Employee,
    attendance: &[AttendanceRecord],
    period: &PayPeriod,
    working_days: u32,
    policy: &PolicyConfig,
) -> PayBreakdown {
    calculate_salary_traced(employee, attendance, period, working_days, policy).breakdown
}

/// Calculates an employee's pay for a period and returns the audit trace.
pub fn calculate_salary_traced(
    employee: &Employee,
    attendance: &[AttendanceRecord],
    period: &PayPeriod,
    working_days: u32,
    policy: &PolicyConfig,
) -> SalaryCalculation {
    let start_time = Instant::now();
    let mut steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let paid = accumulate_paid_days(attendance, working_days, step_number);
    steps.push(paid.audit_step);
    step_number += 1;

    if paid.used_fallback {
        warnings.push(AuditWarning::new(
            NO_ATTENDANCE_FULL_PAY,
            format!(
                "No attendance for {} in {}; paid for all {} working days",
                employee.id, period, working_days
            ),
            WarningSeverity::Medium,
        ));
    }
    if paid.overtime_hours < Decimal::ZERO {
        warnings.push(AuditWarning::new(
            NEGATIVE_OVERTIME,
            format!(
                "Overtime for {} in {} sums to {} hours",
                employee.id,
                period,
                paid.overtime_hours.normalize()
            ),
            WarningSeverity::Medium,
        ));
    }

    let proration = calculate_prorate_factor(paid.paid_days, working_days, step_number);
    steps.push(proration.audit_step);
    step_number += 1;

    if working_days == 0 {
        warnings.push(AuditWarning::new(
            ZERO_WORKING_DAYS,
            format!("Zero working days for {}; base pay prorated to 0", period),
            WarningSeverity::High,
        ));
    }

    let earnings = calculate_earnings(
        &employee.compensation,
        proration.factor,
        paid.overtime_hours,
        policy,
        step_number,
    );
    step_number += earnings.audit_steps.len() as u32;

    let deductions = calculate_deductions(
        earnings.basic_exact,
        earnings.gross_exact,
        policy,
        step_number,
    );

    let gross_salary = earnings.gross_salary;
    let total_deductions = deductions.total_deductions;
    let net_salary = gross_salary - total_deductions;

    let earning_items = earnings.items();
    let deduction_items = deductions.items();
    steps.extend(earnings.audit_steps);
    steps.extend(deductions.audit_steps);

    for warning in &warnings {
        warn!(
            employee_id = %employee.id,
            period = %period,
            code = %warning.code,
            "{}",
            warning.message
        );
    }

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        employee_id = %employee.id,
        period = %period,
        paid_days = %paid.paid_days.normalize(),
        gross_salary = %gross_salary,
        net_salary = %net_salary,
        duration_us,
        "Salary calculated"
    );

    SalaryCalculation {
        breakdown: PayBreakdown {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            designation: employee.designation.clone(),
            department: employee.department.clone(),
            period: period.clone(),
            paid_days: paid.paid_days,
            working_days,
            earnings: earning_items,
            deductions: deduction_items,
            gross_salary,
            total_deductions,
            net_salary,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Calculates pay from raw attendance entries.
///
/// In [`CalculationMode::Permissive`] missing fields are defaulted (status
/// `Absent`, overtime 0), each default is recorded as an audit warning, and
/// the call never fails. In [`CalculationMode::Strict`] malformed or
/// duplicate entries and a zero working-day count are rejected.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_salary_from_entries, CalculationMode};
/// use payroll_engine::config::PolicyConfig;
/// use payroll_engine::models::{AttendanceEntry, CompensationStructure, Employee, PayPeriod, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// # let employee = Employee {
/// #     id: "EMP003".to_string(),
/// #     name: "Charlie Brown".to_string(),
/// #     email: "charlie@company.com".to_string(),
/// #     role: Role::Employee,
/// #     department: "Operations".to_string(),
/// #     designation: "Associate".to_string(),
/// #     joining_date: NaiveDate::from_ymd_opt(2023, 6, 10).unwrap(),
/// #     compensation: CompensationStructure {
/// #         ctc: Decimal::new(500_000, 0),
/// #         basic: Decimal::new(250_000, 0),
/// #         house_rent_allowance: Decimal::new(100_000, 0),
/// #         special_allowance: Decimal::new(150_000, 0),
/// #     },
/// # };
/// let entries = vec![AttendanceEntry {
///     date: NaiveDate::from_ymd_opt(2023, 10, 2),
///     status: None,
///     overtime_hours: None,
/// }];
/// let period = PayPeriod::new("October", 2023);
/// let policy = PolicyConfig::default();
///
/// let lenient = calculate_salary_from_entries(
///     &employee, &entries, &period, 30, &policy, CalculationMode::Permissive,
/// )?;
/// assert_eq!(lenient.breakdown.paid_days, Decimal::ZERO);
///
/// let strict = calculate_salary_from_entries(
///     &employee, &entries, &period, 30, &policy, CalculationMode::Strict,
/// );
/// assert!(strict.is_err());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
pub fn calculate_salary_from_entries(
    employee: &Employee,
    entries: &[AttendanceEntry],
    period: &PayPeriod,
    working_days: u32,
    policy: &PolicyConfig,
    mode: CalculationMode,
) -> PayrollResult<SalaryCalculation> {
    match mode {
        CalculationMode::Permissive => {
            let (records, defaulted) = normalize_attendance(entries);
            let mut calculation =
                calculate_salary_traced(employee, &records, period, working_days, policy);
            let mut warnings = defaulted;
            warnings.append(&mut calculation.audit_trace.warnings);
            calculation.audit_trace.warnings = warnings;
            Ok(calculation)
        }
        CalculationMode::Strict => {
            validate_working_days(working_days)?;
            let records = validate_attendance(entries)?;
            Ok(calculate_salary_traced(
                employee,
                &records,
                period,
                working_days,
                policy,
            ))
        }
    }
}
