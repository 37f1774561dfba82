//! Annual compensation structure.
//!
//! An employee's pay is described by a single annual CTC figure which is
//! split into basic pay, house rent allowance and a balancing special
//! allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StructureConfig;

/// Per-employee annual compensation figures.
///
/// The components always reconcile to the CTC because the special allowance
/// is derived as the remainder. The structure is only ever replaced as a
/// whole through [`CompensationStructure::from_ctc`]; there is no way to
/// update one component on its own.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StructureConfig;
/// use payroll_engine::models::CompensationStructure;
/// use rust_decimal::Decimal;
///
/// let structure = CompensationStructure::from_ctc(
///     Decimal::new(1_200_000, 0),
///     &StructureConfig::default(),
/// );
/// assert_eq!(structure.basic, Decimal::new(600_000, 0));
/// assert_eq!(structure.house_rent_allowance, Decimal::new(120_000, 0));
/// assert_eq!(structure.special_allowance, Decimal::new(480_000, 0));
/// assert!(structure.is_reconciled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationStructure {
    /// Total annual cost-to-company.
    pub ctc: Decimal,
    /// Annual basic pay.
    pub basic: Decimal,
    /// Annual house rent allowance.
    pub house_rent_allowance: Decimal,
    /// Annual special allowance (the balance of CTC).
    pub special_allowance: Decimal,
}

impl CompensationStructure {
    /// Derives the full structure from an annual CTC.
    ///
    /// basic = ctc × basic_ratio, HRA = basic × hra_ratio_of_basic and the
    /// special allowance takes whatever remains.
    pub fn from_ctc(ctc: Decimal, structure: &StructureConfig) -> Self {
        let basic = ctc * structure.basic_ratio;
        let house_rent_allowance = basic * structure.hra_ratio_of_basic;
        let special_allowance = ctc - basic - house_rent_allowance;

        Self {
            ctc,
            basic,
            house_rent_allowance,
            special_allowance,
        }
    }

    /// Returns true if basic + HRA + special equals the CTC.
    ///
    /// Structures built with [`from_ctc`](Self::from_ctc) always reconcile;
    /// imported records may not, and the calculator does not check.
    pub fn is_reconciled(&self) -> bool {
        self.basic + self.house_rent_allowance + self.special_allowance == self.ctc
    }
}
