//! The two-column earnings/deductions ledger shared by every payslip format.

use rust_decimal::Decimal;

use crate::calculation::{MONEY_SCALE, round_money};
use crate::models::{PayBreakdown, PayItem};

/// One printed row of the ledger.
///
/// Either side is `None` once that column has run out of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    /// The earnings cell.
    pub earning: Option<PayItem>,
    /// The deductions cell.
    pub deduction: Option<PayItem>,
}

/// Pairs earnings with deductions row by row.
///
/// Both columns keep the breakdown's order; the shorter one is padded with
/// blank cells so the ledger is as long as the longer column.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{PayBreakdown, PayItem, PayPeriod};
/// use payroll_engine::render::build_ledger;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown {
///     employee_id: "EMP002".to_string(),
///     name: "Bob Smith".to_string(),
///     designation: "Developer".to_string(),
///     department: "IT".to_string(),
///     period: PayPeriod::new("October", 2023),
///     paid_days: Decimal::new(30, 0),
///     working_days: 30,
///     earnings: vec![
///         PayItem::new("Basic Salary", Decimal::new(3_000_000, 2)),
///         PayItem::new("HRA", Decimal::new(600_000, 2)),
///     ],
///     deductions: vec![PayItem::new("PF", Decimal::new(360_000, 2))],
///     gross_salary: Decimal::new(3_600_000, 2),
///     total_deductions: Decimal::new(360_000, 2),
///     net_salary: Decimal::new(3_240_000, 2),
/// };
///
/// let rows = build_ledger(&breakdown);
/// assert_eq!(rows.len(), 2);
/// assert!(rows[1].deduction.is_none());
/// ```
pub fn build_ledger(breakdown: &PayBreakdown) -> Vec<LedgerRow> {
    let len = breakdown.earnings.len().max(breakdown.deductions.len());

    (0..len)
        .map(|i| LedgerRow {
            earning: breakdown.earnings.get(i).cloned(),
            deduction: breakdown.deductions.get(i).cloned(),
        })
        .collect()
}

/// Formats an amount with thousands separators and two decimals.
///
/// # Examples
///
/// ```
/// use payroll_engine::render::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(100_000, 0)), "100,000.00");
/// assert_eq!(format_amount(Decimal::new(-123_456_789, 3)), "-123,456.79");
/// assert_eq!(format_amount(Decimal::ZERO), "0.00");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let plain = format!("{:.*}", MONEY_SCALE as usize, rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}
