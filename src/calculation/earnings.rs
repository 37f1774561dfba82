//! Earnings calculation.
//!
//! Monthly earnings are one twelfth of each annual component scaled by the
//! prorate factor, plus flat-rate overtime pay.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{AuditStep, CompensationStructure, PayItem};

use super::round_money;

/// Label of the basic pay line.
pub const BASIC_SALARY_LABEL: &str = "Basic Salary";
/// Label of the house rent allowance line.
pub const HRA_LABEL: &str = "HRA";
/// Label of the special allowance line.
pub const SPECIAL_ALLOWANCE_LABEL: &str = "Special Allowance";
/// Label of the overtime pay line.
pub const OVERTIME_PAY_LABEL: &str = "Overtime Pay";

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The earnings for one period, each line rounded to two decimals.
///
/// The unrounded earned basic and gross are kept alongside the printed
/// lines; deductions are evaluated against those.
#[derive(Debug, Clone)]
pub struct EarningsResult {
    /// Prorated monthly basic pay.
    pub basic_earned: Decimal,
    /// Prorated monthly house rent allowance.
    pub hra_earned: Decimal,
    /// Prorated monthly special allowance.
    pub special_earned: Decimal,
    /// Overtime hours × overtime rate.
    pub overtime_amount: Decimal,
    /// Sum of the four lines above.
    pub gross_salary: Decimal,
    /// Earned basic before rounding.
    pub basic_exact: Decimal,
    /// Gross before any line is rounded.
    pub gross_exact: Decimal,
    /// One audit step per line plus one for the gross.
    pub audit_steps: Vec<AuditStep>,
}

impl EarningsResult {
    /// Returns the earnings lines in payslip order.
    pub fn items(&self) -> Vec<PayItem> {
        vec![
            PayItem::new(BASIC_SALARY_LABEL, self.basic_earned),
            PayItem::new(HRA_LABEL, self.hra_earned),
            PayItem::new(SPECIAL_ALLOWANCE_LABEL, self.special_earned),
            PayItem::new(OVERTIME_PAY_LABEL, self.overtime_amount),
        ]
    }
}

/// Computes the monthly share of an annual component, unrounded.
pub fn prorated_monthly(annual: Decimal, prorate_factor: Decimal) -> Decimal {
    annual / MONTHS_PER_YEAR * prorate_factor
}

/// Calculates the period's earnings.
///
/// Each line is rounded once; the gross is the sum of the rounded lines so
/// that the printed earnings always add up to it. `basic_exact` and
/// `gross_exact` carry the same figures before rounding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_earnings;
/// use payroll_engine::config::PolicyConfig;
/// use payroll_engine::models::CompensationStructure;
/// use rust_decimal::Decimal;
///
/// let compensation = CompensationStructure {
///     ctc: Decimal::new(1_200_000, 0),
///     basic: Decimal::new(600_000, 0),
///     house_rent_allowance: Decimal::new(240_000, 0),
///     special_allowance: Decimal::new(360_000, 0),
/// };
///
/// let result = calculate_earnings(
///     &compensation,
///     Decimal::ONE,
///     Decimal::new(2, 0),
///     &PolicyConfig::default(),
///     1,
/// );
/// assert_eq!(result.basic_earned, Decimal::new(50_000, 0));
/// assert_eq!(result.overtime_amount, Decimal::new(1_000, 0));
/// assert_eq!(result.gross_salary, Decimal::new(101_000, 0));
/// ```
pub fn calculate_earnings(
    compensation: &CompensationStructure,
    prorate_factor: Decimal,
    overtime_hours: Decimal,
    policy: &PolicyConfig,
    step_number: u32,
) -> EarningsResult {
    let factor_str = prorate_factor.normalize().to_string();
    let mut audit_steps = Vec::with_capacity(5);
    let mut step = step_number;

    let mut prorate = |rule_id: &str, rule_name: &str, annual: Decimal| -> (Decimal, Decimal) {
        let exact = prorated_monthly(annual, prorate_factor);
        let amount = round_money(exact);
        audit_steps.push(AuditStep {
            step_number: step,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input: serde_json::json!({
                "annual": annual.normalize().to_string(),
                "prorate_factor": factor_str
            }),
            output: serde_json::json!({ "amount": amount.to_string() }),
            reasoning: format!(
                "{} / 12 x {} = {}",
                annual.normalize(),
                factor_str,
                amount
            ),
        });
        step += 1;
        (exact, amount)
    };

    let (basic_exact, basic_earned) = prorate("basic_earned", "Basic Salary", compensation.basic);
    let (hra_exact, hra_earned) = prorate(
        "hra_earned",
        "House Rent Allowance",
        compensation.house_rent_allowance,
    );
    let (special_exact, special_earned) = prorate(
        "special_earned",
        "Special Allowance",
        compensation.special_allowance,
    );

    let overtime_exact = overtime_hours * policy.overtime_rate;
    let overtime_amount = round_money(overtime_exact);
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "overtime_rate": policy.overtime_rate.normalize().to_string()
        }),
        output: serde_json::json!({ "amount": overtime_amount.to_string() }),
        reasoning: format!(
            "{} hours x {} = {}",
            overtime_hours.normalize(),
            policy.overtime_rate.normalize(),
            overtime_amount
        ),
    });
    step += 1;

    let gross_salary = basic_earned + hra_earned + special_earned + overtime_amount;
    let gross_exact = basic_exact + hra_exact + special_exact + overtime_exact;
    audit_steps.push(AuditStep {
        step_number: step,
        rule_id: "gross_salary".to_string(),
        rule_name: "Gross Salary".to_string(),
        input: serde_json::json!({
            "basic_earned": basic_earned.to_string(),
            "hra_earned": hra_earned.to_string(),
            "special_earned": special_earned.to_string(),
            "overtime_amount": overtime_amount.to_string()
        }),
        output: serde_json::json!({
            "gross_salary": gross_salary.to_string(),
            "gross_exact": gross_exact.normalize().to_string()
        }),
        reasoning: format!(
            "{} + {} + {} + {} = {}",
            basic_earned, hra_earned, special_earned, overtime_amount, gross_salary
        ),
    });

    EarningsResult {
        basic_earned,
        hra_earned,
        special_earned,
        overtime_amount,
        gross_salary,
        basic_exact,
        gross_exact,
        audit_steps,
    }
}
