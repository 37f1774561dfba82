//! Payslip rendering.
//!
//! A [`PayBreakdown`] is rendered either as a PDF document for download or
//! as an HTML preview for on-screen display. Both formats share the same
//! ledger so they always show the same figures.

mod document;
mod ledger;
mod pdf;
mod preview;

use tracing::debug;

use crate::config::OrganizationConfig;
use crate::error::PayrollResult;
use crate::models::PayBreakdown;

pub use ledger::{LedgerRow, build_ledger, format_amount};
pub use preview::escape_html;

/// Renders payslips for one organization.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::OrganizationConfig;
/// use payroll_engine::models::{PayBreakdown, PayItem, PayPeriod};
/// use payroll_engine::render::PayslipRenderer;
/// use rust_decimal::Decimal;
///
/// let renderer = PayslipRenderer::new(OrganizationConfig {
///     name: "Acme Ltd".to_string(),
///     currency: "INR".to_string(),
/// });
/// let breakdown = PayBreakdown {
///     employee_id: "EMP003".to_string(),
///     name: "Charlie Brown".to_string(),
///     designation: "Associate".to_string(),
///     department: "Operations".to_string(),
///     period: PayPeriod::new("October", 2023),
///     paid_days: Decimal::new(30, 0),
///     working_days: 30,
///     earnings: vec![PayItem::new("Basic Salary", Decimal::new(2_083_333, 2))],
///     deductions: vec![PayItem::new("PF", Decimal::new(250_000, 2))],
///     gross_salary: Decimal::new(2_083_333, 2),
///     total_deductions: Decimal::new(250_000, 2),
///     net_salary: Decimal::new(1_833_333, 2),
/// };
///
/// let pdf = renderer.render_document(&breakdown)?;
/// assert!(pdf.starts_with(b"%PDF-"));
///
/// let html = renderer.render_preview(&breakdown);
/// assert!(html.contains("Acme Ltd"));
/// assert!(html.contains("Net Salary Payable: INR 18,333.33"));
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayslipRenderer {
    organization: OrganizationConfig,
}

impl PayslipRenderer {
    /// Creates a renderer that prints `organization` in the header.
    pub fn new(organization: OrganizationConfig) -> Self {
        Self { organization }
    }

    /// The organization printed on every payslip.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Renders the payslip as PDF bytes.
    ///
    /// Fails only if the PDF library cannot build or serialize the
    /// document.
    pub fn render_document(&self, breakdown: &PayBreakdown) -> PayrollResult<Vec<u8>> {
        let bytes = document::render(&self.organization, breakdown)?;
        debug!(
            employee_id = %breakdown.employee_id,
            period = %breakdown.period,
            bytes = bytes.len(),
            "Payslip document rendered"
        );
        Ok(bytes)
    }

    /// Renders the payslip as an HTML fragment.
    pub fn render_preview(&self, breakdown: &PayBreakdown) -> String {
        let html = preview::render(&self.organization, breakdown);
        debug!(
            employee_id = %breakdown.employee_id,
            period = %breakdown.period,
            bytes = html.len(),
            "Payslip preview rendered"
        );
        html
    }
}

/// Renders a PDF payslip for the default organization.
pub fn render_document(breakdown: &PayBreakdown) -> PayrollResult<Vec<u8>> {
    PayslipRenderer::default().render_document(breakdown)
}

/// Renders an HTML payslip preview for the default organization.
pub fn render_preview(breakdown: &PayBreakdown) -> String {
    PayslipRenderer::default().render_preview(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayItem, PayPeriod};
    use crate::render::pdf::page_texts;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_breakdown() -> PayBreakdown {
        PayBreakdown {
            employee_id: "EMP001".to_string(),
            name: "Alice Johnson".to_string(),
            designation: "Manager".to_string(),
            department: "Human Resources".to_string(),
            period: PayPeriod::new("October", 2023),
            paid_days: dec("15"),
            working_days: 30,
            earnings: vec![
                PayItem::new("Basic Salary", dec("25000.00")),
                PayItem::new("HRA", dec("10000.00")),
                PayItem::new("Special Allowance", dec("15000.00")),
                PayItem::new("Overtime Pay", dec("0.00")),
            ],
            deductions: vec![
                PayItem::new("PF", dec("3000.00")),
                PayItem::new("ESI", dec("0")),
                PayItem::new("Professional Tax", dec("200.00")),
                PayItem::new("LWF", dec("25.00")),
                PayItem::new("TDS", dec("0")),
            ],
            gross_salary: dec("50000.00"),
            total_deductions: dec("3225.00"),
            net_salary: dec("46775.00"),
        }
    }

    fn document_lines(pdf: &[u8]) -> Vec<String> {
        page_texts(pdf)
            .iter()
            .flat_map(|text| text.lines().map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn test_free_functions_use_default_organization() {
        let breakdown = create_test_breakdown();
        let html = render_preview(&breakdown);
        let pdf = document_lines(&render_document(&breakdown).unwrap());

        assert!(html.contains("Helix Enterprises"));
        assert!(html.contains("Net Salary Payable: INR 46,775.00"));
        assert!(pdf.iter().any(|l| l == "Helix Enterprises"));
        assert!(pdf.iter().any(|l| l == "Net Salary Payable: INR 46,775.00"));
    }

    #[test]
    fn test_renderer_uses_configured_currency() {
        let renderer = PayslipRenderer::new(OrganizationConfig {
            name: "Globex".to_string(),
            currency: "USD".to_string(),
        });
        let breakdown = create_test_breakdown();

        let html = renderer.render_preview(&breakdown);
        let pdf = document_lines(&renderer.render_document(&breakdown).unwrap());

        assert_eq!(renderer.organization().name, "Globex");
        assert!(html.contains("Amount (USD)"));
        assert!(html.contains("Net Salary Payable: USD 46,775.00"));
        assert!(pdf.iter().any(|l| l == "Amount (USD)"));
        assert!(pdf.iter().any(|l| l == "Globex"));
    }

    #[test]
    fn test_both_formats_show_same_figures() {
        let breakdown = create_test_breakdown();
        let html = render_preview(&breakdown);
        let pdf = document_lines(&render_document(&breakdown).unwrap());

        for item in breakdown.earnings.iter().chain(&breakdown.deductions) {
            let amount = format_amount(item.amount);
            assert!(html.contains(&amount), "preview missing {}", amount);
            assert!(pdf.contains(&amount), "document missing {}", amount);
        }
    }
}
