//! Pay breakdown models.
//!
//! A [`PayBreakdown`] is the itemized result of one salary calculation. It is
//! a snapshot: nothing in it links back to the employee record, so later
//! compensation changes never alter a breakdown already produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// A labelled amount in the earnings or deductions ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayItem {
    /// The line label (e.g., "Basic Salary", "PF").
    pub label: String,
    /// The amount, rounded to two decimal places.
    pub amount: Decimal,
}

impl PayItem {
    /// Creates a pay item.
    pub fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}

/// The itemized pay for one employee and one pay period.
///
/// `earnings` and `deductions` keep the order in which the calculator
/// produced them. Totals were computed from the listed amounts, so the
/// earnings sum to `gross_salary` and the deductions sum to
/// `total_deductions`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayBreakdown, PayItem, PayPeriod};
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     employee_id: "EMP001".to_string(),
///     name: "Alice Johnson".to_string(),
///     designation: "Manager".to_string(),
///     department: "Human Resources".to_string(),
///     period: PayPeriod::new("October", 2023),
///     paid_days: Decimal::new(30, 0),
///     working_days: 30,
///     earnings: vec![PayItem::new("Basic Salary", Decimal::new(5000000, 2))],
///     deductions: vec![PayItem::new("PF", Decimal::new(600000, 2))],
///     gross_salary: Decimal::new(5000000, 2),
///     total_deductions: Decimal::new(600000, 2),
///     net_salary: Decimal::new(4400000, 2),
/// };
///
/// assert_eq!(breakdown.earning("Basic Salary"), Some(Decimal::new(50000, 0)));
/// assert_eq!(breakdown.deduction("ESI"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// The employee's job title.
    pub designation: String,
    /// The employee's department.
    pub department: String,
    /// The pay period this breakdown covers.
    pub period: PayPeriod,
    /// Days paid for (may include halves).
    pub paid_days: Decimal,
    /// Working days in the period used for proration.
    pub working_days: u32,
    /// Earnings lines in calculation order.
    pub earnings: Vec<PayItem>,
    /// Deduction lines in calculation order.
    pub deductions: Vec<PayItem>,
    /// Sum of all earnings.
    pub gross_salary: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross minus deductions.
    pub net_salary: Decimal,
}

impl PayBreakdown {
    /// Looks up an earnings line by label.
    pub fn earning(&self, label: &str) -> Option<Decimal> {
        find_amount(&self.earnings, label)
    }

    /// Looks up a deductions line by label.
    pub fn deduction(&self, label: &str) -> Option<Decimal> {
        find_amount(&self.deductions, label)
    }
}

fn find_amount(items: &[PayItem], label: &str) -> Option<Decimal> {
    items.iter().find(|i| i.label == label).map(|i| i.amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_breakdown() -> PayBreakdown {
        PayBreakdown {
            employee_id: "EMP002".to_string(),
            name: "Bob Smith".to_string(),
            designation: "Developer".to_string(),
            department: "IT".to_string(),
            period: PayPeriod::new("November", 2023),
            paid_days: dec("21.5"),
            working_days: 30,
            earnings: vec![
                PayItem::new("Basic Salary", dec("23888.89")),
                PayItem::new("Overtime Pay", dec("1000.00")),
            ],
            deductions: vec![
                PayItem::new("PF", dec("2866.67")),
                PayItem::new("LWF", dec("25.00")),
            ],
            gross_salary: dec("24888.89"),
            total_deductions: dec("2891.67"),
            net_salary: dec("21997.22"),
        }
    }

    #[test]
    fn test_lookup_by_label() {
        let breakdown = create_sample_breakdown();
        assert_eq!(breakdown.earning("Overtime Pay"), Some(dec("1000")));
        assert_eq!(breakdown.deduction("LWF"), Some(dec("25")));
        assert_eq!(breakdown.deduction("TDS"), None);
    }

    #[test]
    fn test_serialization_preserves_line_order() {
        let breakdown = create_sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();

        let basic = json.find("Basic Salary").unwrap();
        let overtime = json.find("Overtime Pay").unwrap();
        assert!(basic < overtime);
        assert!(json.contains("\"net_salary\":\"21997.22\""));
        assert!(json.contains("\"paid_days\":\"21.5\""));
    }

    #[test]
    fn test_deserialization_round_trip() {
        let breakdown = create_sample_breakdown();
        let json = serde_json::to_string(&breakdown).unwrap();
        let restored: PayBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, breakdown);
    }
}
