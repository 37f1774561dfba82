//! Proration of monthly pay by paid days.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of computing the prorate factor, including the audit step.
#[derive(Debug, Clone)]
pub struct ProrationResult {
    /// paid_days / working_days, or zero when there are no working days.
    pub factor: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the fraction of monthly pay earned in the period.
///
/// A period with zero working days yields a factor of zero rather than a
/// division error. The factor is not capped, so paid days in excess of
/// working days prorate above 1.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_prorate_factor;
/// use rust_decimal::Decimal;
///
/// let result = calculate_prorate_factor(Decimal::new(15, 0), 30, 2);
/// assert_eq!(result.factor, Decimal::new(5, 1));
///
/// let result = calculate_prorate_factor(Decimal::new(15, 0), 0, 2);
/// assert_eq!(result.factor, Decimal::ZERO);
/// ```
pub fn calculate_prorate_factor(
    paid_days: Decimal,
    working_days: u32,
    step_number: u32,
) -> ProrationResult {
    let (factor, reasoning) = if working_days == 0 {
        (
            Decimal::ZERO,
            "No working days in period - prorate factor is 0".to_string(),
        )
    } else {
        let factor = paid_days / Decimal::from(working_days);
        (
            factor,
            format!(
                "{} paid days / {} working days = {}",
                paid_days.normalize(),
                working_days,
                factor.normalize()
            ),
        )
    };

    ProrationResult {
        factor,
        audit_step: AuditStep {
            step_number,
            rule_id: "proration".to_string(),
            rule_name: "Attendance Proration".to_string(),
            input: serde_json::json!({
                "paid_days": paid_days.normalize().to_string(),
                "working_days": working_days
            }),
            output: serde_json::json!({
                "prorate_factor": factor.normalize().to_string()
            }),
            reasoning,
        },
    }
}
