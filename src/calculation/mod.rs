//! Calculation logic for the payroll engine.
//!
//! This module contains the salary pipeline: paid-day accumulation from
//! attendance, proration by working days, earnings, statutory deductions,
//! and the attendance normalization that feeds them.

mod deductions;
mod earnings;
mod paid_days;
mod proration;
mod rounding;
mod salary;
mod validation;

pub use deductions::{
    DeductionsResult, ESI_LABEL, LWF_LABEL, PF_LABEL, PROFESSIONAL_TAX_LABEL, TDS_LABEL,
    calculate_deductions, employee_state_insurance, labour_welfare_fund, professional_tax,
    provident_fund, withholding_tax,
};
pub use earnings::{
    BASIC_SALARY_LABEL, EarningsResult, HRA_LABEL, OVERTIME_PAY_LABEL, SPECIAL_ALLOWANCE_LABEL,
    calculate_earnings, prorated_monthly,
};
pub use paid_days::{PaidDaysResult, accumulate_paid_days};
pub use proration::{ProrationResult, calculate_prorate_factor};
pub use rounding::{MONEY_SCALE, round_money};
pub use salary::{
    CalculationMode, DEFAULT_WORKING_DAYS, NEGATIVE_OVERTIME, NO_ATTENDANCE_FULL_PAY,
    SalaryCalculation, ZERO_WORKING_DAYS, calculate_salary, calculate_salary_from_entries,
    calculate_salary_traced,
};
pub use validation::{
    ATTENDANCE_DEFAULTED, normalize_attendance, validate_attendance, validate_working_days,
};
