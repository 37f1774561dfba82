//! Configuration types for payroll policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `policy.yaml`. Every section falls back to the
//! documented defaults, so a file only needs to list what differs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Organization details printed on payslips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// The organization name shown in the payslip header.
    pub name: String,
    /// The currency label shown next to amounts (e.g., "INR").
    pub currency: String,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "Helix Enterprises".to_string(),
            currency: "INR".to_string(),
        }
    }
}

/// Flat-rate deduction and overtime policy consumed by the salary calculator.
///
/// Rates are fractions (0.12 means 12%); amounts and thresholds are in the
/// payroll currency and apply to a single pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.overtime_rate, Decimal::new(500, 0));
/// assert_eq!(policy.esi_limit, Decimal::new(21000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Flat pay per overtime hour.
    pub overtime_rate: Decimal,
    /// Provident fund rate applied to earned basic.
    pub pf_rate: Decimal,
    /// Employee state insurance rate applied to gross.
    pub esi_rate: Decimal,
    /// ESI applies only while gross is strictly below this limit.
    pub esi_limit: Decimal,
    /// Flat professional tax amount.
    pub pt_amount: Decimal,
    /// Professional tax applies only while gross is strictly above this.
    pub pt_threshold: Decimal,
    /// Flat labour welfare fund amount, always deducted.
    pub lwf_amount: Decimal,
    /// Withholding rate applied to gross above `tds_threshold`.
    pub tds_rate: Decimal,
    /// Gross above which withholding tax applies.
    pub tds_threshold: Decimal,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            overtime_rate: Decimal::new(500, 0),
            pf_rate: Decimal::new(12, 2),
            esi_rate: Decimal::new(75, 4),
            esi_limit: Decimal::new(21000, 0),
            pt_amount: Decimal::new(200, 0),
            pt_threshold: Decimal::new(15000, 0),
            lwf_amount: Decimal::new(25, 0),
            tds_rate: Decimal::new(10, 2),
            tds_threshold: Decimal::new(50000, 0),
        }
    }
}

impl PolicyConfig {
    /// Checks that rates lie in `[0, 1]` and amounts are not negative.
    pub fn validate(&self) -> PayrollResult<()> {
        check_rate("pf_rate", self.pf_rate)?;
        check_rate("esi_rate", self.esi_rate)?;
        check_rate("tds_rate", self.tds_rate)?;
        check_amount("overtime_rate", self.overtime_rate)?;
        check_amount("esi_limit", self.esi_limit)?;
        check_amount("pt_amount", self.pt_amount)?;
        check_amount("pt_threshold", self.pt_threshold)?;
        check_amount("lwf_amount", self.lwf_amount)?;
        check_amount("tds_threshold", self.tds_threshold)
    }
}

/// Ratios used to split an annual CTC into its components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Basic pay as a fraction of CTC.
    pub basic_ratio: Decimal,
    /// House rent allowance as a fraction of basic.
    pub hra_ratio_of_basic: Decimal,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            basic_ratio: Decimal::new(50, 2),
            hra_ratio_of_basic: Decimal::new(20, 2),
        }
    }
}

impl StructureConfig {
    /// Checks that both ratios lie in `[0, 1]`.
    pub fn validate(&self) -> PayrollResult<()> {
        check_rate("basic_ratio", self.basic_ratio)?;
        check_rate("hra_ratio_of_basic", self.hra_ratio_of_basic)
    }
}

/// The complete payroll configuration loaded from `policy.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Organization details for payslips.
    pub organization: OrganizationConfig,
    /// Deduction and overtime policy.
    pub policy: PolicyConfig,
    /// CTC split ratios.
    pub structure: StructureConfig,
}

impl PayrollConfig {
    /// Validates every section.
    pub fn validate(&self) -> PayrollResult<()> {
        self.policy.validate()?;
        self.structure.validate()
    }
}

fn check_rate(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(PayrollError::InvalidPolicy {
            field: field.to_string(),
            message: format!("rate {} must be between 0 and 1", value),
        });
    }
    Ok(())
}

fn check_amount(field: &str, value: Decimal) -> PayrollResult<()> {
    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidPolicy {
            field: field.to_string(),
            message: format!("amount {} must not be negative", value),
        });
    }
    Ok(())
}
