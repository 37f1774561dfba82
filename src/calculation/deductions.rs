//! Statutory-style deductions.
//!
//! Each deduction is an independent rule evaluated against the period's
//! unrounded gross salary or unrounded earned basic, and rounded once.
//! Threshold comparisons are strict: a gross exactly at a threshold takes
//! the "else" branch.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{AuditStep, PayItem};

use super::round_money;

/// Label of the provident fund line.
pub const PF_LABEL: &str = "PF";
/// Label of the employee state insurance line.
pub const ESI_LABEL: &str = "ESI";
/// Label of the professional tax line.
pub const PROFESSIONAL_TAX_LABEL: &str = "Professional Tax";
/// Label of the labour welfare fund line.
pub const LWF_LABEL: &str = "LWF";
/// Label of the withholding tax line.
pub const TDS_LABEL: &str = "TDS";

/// Provident fund: earned basic × PF rate.
pub fn provident_fund(basic_earned: Decimal, policy: &PolicyConfig) -> Decimal {
    round_money(basic_earned * policy.pf_rate)
}

/// Employee state insurance: gross × ESI rate while gross is below the limit.
///
/// The limit is compared against the period's gross, not an annualized
/// figure.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::employee_state_insurance;
/// use payroll_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(employee_state_insurance(Decimal::new(20000, 0), &policy), Decimal::new(150, 0));
/// assert_eq!(employee_state_insurance(Decimal::new(21000, 0), &policy), Decimal::ZERO);
/// ```
pub fn employee_state_insurance(gross_salary: Decimal, policy: &PolicyConfig) -> Decimal {
    if gross_salary < policy.esi_limit {
        round_money(gross_salary * policy.esi_rate)
    } else {
        round_money(Decimal::ZERO)
    }
}

/// Professional tax: a flat amount once gross exceeds the threshold.
pub fn professional_tax(gross_salary: Decimal, policy: &PolicyConfig) -> Decimal {
    if gross_salary > policy.pt_threshold {
        round_money(policy.pt_amount)
    } else {
        round_money(Decimal::ZERO)
    }
}

/// Labour welfare fund: a flat amount, always deducted.
pub fn labour_welfare_fund(policy: &PolicyConfig) -> Decimal {
    round_money(policy.lwf_amount)
}

/// Withholding tax: TDS rate on the portion of gross above the threshold.
///
/// A single-slab approximation, not a model of real income tax.
pub fn withholding_tax(gross_salary: Decimal, policy: &PolicyConfig) -> Decimal {
    if gross_salary > policy.tds_threshold {
        round_money((gross_salary - policy.tds_threshold) * policy.tds_rate)
    } else {
        round_money(Decimal::ZERO)
    }
}

/// All deductions for one period.
#[derive(Debug, Clone)]
pub struct DeductionsResult {
    /// Provident fund.
    pub provident_fund: Decimal,
    /// Employee state insurance.
    pub employee_state_insurance: Decimal,
    /// Professional tax.
    pub professional_tax: Decimal,
    /// Labour welfare fund.
    pub labour_welfare_fund: Decimal,
    /// Tax deducted at source.
    pub withholding_tax: Decimal,
    /// Sum of the five deductions.
    pub total_deductions: Decimal,
    /// One audit step per deduction.
    pub audit_steps: Vec<AuditStep>,
}

impl DeductionsResult {
    /// Returns the deduction lines in payslip order.
    pub fn items(&self) -> Vec<PayItem> {
        vec![
            PayItem::new(PF_LABEL, self.provident_fund),
            PayItem::new(ESI_LABEL, self.employee_state_insurance),
            PayItem::new(PROFESSIONAL_TAX_LABEL, self.professional_tax),
            PayItem::new(LWF_LABEL, self.labour_welfare_fund),
            PayItem::new(TDS_LABEL, self.withholding_tax),
        ]
    }
}

/// Calculates every deduction for the period.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_deductions;
/// use payroll_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let result = calculate_deductions(
///     Decimal::new(50_000, 0),
///     Decimal::new(100_000, 0),
///     &PolicyConfig::default(),
///     1,
/// );
/// assert_eq!(result.provident_fund, Decimal::new(6_000, 0));
/// assert_eq!(result.withholding_tax, Decimal::new(5_000, 0));
/// assert_eq!(result.total_deductions, Decimal::new(11_225, 0));
/// ```
pub fn calculate_deductions(
    basic_earned: Decimal,
    gross_salary: Decimal,
    policy: &PolicyConfig,
    step_number: u32,
) -> DeductionsResult {
    let pf = provident_fund(basic_earned, policy);
    let esi = employee_state_insurance(gross_salary, policy);
    let pt = professional_tax(gross_salary, policy);
    let lwf = labour_welfare_fund(policy);
    let tds = withholding_tax(gross_salary, policy);
    let total_deductions = pf + esi + pt + lwf + tds;

    let gross_str = gross_salary.normalize().to_string();
    let basic_str = basic_earned.normalize().to_string();
    let audit_steps = vec![
        AuditStep {
            step_number,
            rule_id: "provident_fund".to_string(),
            rule_name: "Provident Fund".to_string(),
            input: serde_json::json!({
                "basic_earned": basic_str,
                "pf_rate": policy.pf_rate.normalize().to_string()
            }),
            output: serde_json::json!({ "amount": pf.to_string() }),
            reasoning: format!(
                "{} x {} = {}",
                basic_str,
                policy.pf_rate.normalize(),
                pf
            ),
        },
        AuditStep {
            step_number: step_number + 1,
            rule_id: "employee_state_insurance".to_string(),
            rule_name: "Employee State Insurance".to_string(),
            input: serde_json::json!({
                "gross_salary": gross_str,
                "esi_rate": policy.esi_rate.normalize().to_string(),
                "esi_limit": policy.esi_limit.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": esi.to_string(),
                "applied": gross_salary < policy.esi_limit
            }),
            reasoning: if gross_salary < policy.esi_limit {
                format!(
                    "Gross {} is below {} limit: {} x {} = {}",
                    gross_str,
                    policy.esi_limit.normalize(),
                    gross_str,
                    policy.esi_rate.normalize(),
                    esi
                )
            } else {
                format!(
                    "Gross {} is not below {} limit - no ESI",
                    gross_str,
                    policy.esi_limit.normalize()
                )
            },
        },
        AuditStep {
            step_number: step_number + 2,
            rule_id: "professional_tax".to_string(),
            rule_name: "Professional Tax".to_string(),
            input: serde_json::json!({
                "gross_salary": gross_str,
                "pt_threshold": policy.pt_threshold.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": pt.to_string(),
                "applied": gross_salary > policy.pt_threshold
            }),
            reasoning: if gross_salary > policy.pt_threshold {
                format!(
                    "Gross {} exceeds {} - flat {}",
                    gross_str,
                    policy.pt_threshold.normalize(),
                    pt
                )
            } else {
                format!(
                    "Gross {} does not exceed {} - no professional tax",
                    gross_str,
                    policy.pt_threshold.normalize()
                )
            },
        },
        AuditStep {
            step_number: step_number + 3,
            rule_id: "labour_welfare_fund".to_string(),
            rule_name: "Labour Welfare Fund".to_string(),
            input: serde_json::json!({
                "lwf_amount": policy.lwf_amount.normalize().to_string()
            }),
            output: serde_json::json!({ "amount": lwf.to_string() }),
            reasoning: format!("Flat {} deducted every period", lwf),
        },
        AuditStep {
            step_number: step_number + 4,
            rule_id: "withholding_tax".to_string(),
            rule_name: "Tax Deducted at Source".to_string(),
            input: serde_json::json!({
                "gross_salary": gross_str,
                "tds_rate": policy.tds_rate.normalize().to_string(),
                "tds_threshold": policy.tds_threshold.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": tds.to_string(),
                "applied": gross_salary > policy.tds_threshold
            }),
            reasoning: if gross_salary > policy.tds_threshold {
                format!(
                    "({} - {}) x {} = {}",
                    gross_str,
                    policy.tds_threshold.normalize(),
                    policy.tds_rate.normalize(),
                    tds
                )
            } else {
                format!(
                    "Gross {} does not exceed {} - no TDS",
                    gross_str,
                    policy.tds_threshold.normalize()
                )
            },
        },
    ];

    DeductionsResult {
        provident_fund: pf,
        employee_state_insurance: esi,
        professional_tax: pt,
        labour_welfare_fund: lwf,
        withholding_tax: tds,
        total_deductions,
        audit_steps,
    }
}
