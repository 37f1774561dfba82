//! HTML payslip preview.
//!
//! Produces a self-contained fragment with inline styles, suitable for
//! embedding in a page. Every piece of text is escaped.

use crate::config::OrganizationConfig;
use crate::models::{PayBreakdown, PayItem};

use super::ledger::{build_ledger, format_amount};

const CONTAINER_STYLE: &str = "font-family: Helvetica, Arial, sans-serif; max-width: 720px; \
     border: 1px solid #ccc; padding: 24px; color: #222;";
const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; margin-top: 16px;";
const HEAD_STYLE: &str = "background: #d9d9d9; text-align: left; padding: 6px;";
const CELL_STYLE: &str = "padding: 6px; border-bottom: 1px solid #eee;";
const AMOUNT_STYLE: &str = "padding: 6px; border-bottom: 1px solid #eee; text-align: right;";
const TOTAL_STYLE: &str = "padding: 6px; font-weight: bold; border-top: 2px solid #222;";
const NET_STYLE: &str = "margin-top: 20px; padding: 12px; background: #e6e6e6; \
     font-size: 1.15em; font-weight: bold;";

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a payslip as an HTML fragment.
pub(crate) fn render(organization: &OrganizationConfig, breakdown: &PayBreakdown) -> String {
    let mut html = String::with_capacity(4096);
    let currency = escape_html(&organization.currency);

    html.push_str(&format!("<div class=\"payslip\" style=\"{}\">\n", CONTAINER_STYLE));
    html.push_str(&format!(
        "  <h2 style=\"margin: 0;\">{}</h2>\n",
        escape_html(&organization.name)
    ));
    html.push_str(&format!(
        "  <h3 style=\"margin: 4px 0 12px;\">Payslip for {}</h3>\n",
        escape_html(&breakdown.period.to_string())
    ));

    html.push_str(&format!("  <table class=\"employee-details\" style=\"{}\">\n", TABLE_STYLE));
    push_identity_row(
        &mut html,
        ("Employee ID", &breakdown.employee_id),
        ("Name", &breakdown.name),
    );
    push_identity_row(
        &mut html,
        ("Designation", &breakdown.designation),
        ("Department", &breakdown.department),
    );
    push_identity_row(
        &mut html,
        ("Paid Days", &breakdown.paid_days.normalize().to_string()),
        ("Working Days", &breakdown.working_days.to_string()),
    );
    html.push_str("  </table>\n");

    html.push_str(&format!("  <table class=\"ledger\" style=\"{}\">\n", TABLE_STYLE));
    html.push_str("    <thead><tr>");
    for heading in [
        "Earnings".to_string(),
        format!("Amount ({})", currency),
        "Deductions".to_string(),
        format!("Amount ({})", currency),
    ] {
        html.push_str(&format!("<th style=\"{}\">{}</th>", HEAD_STYLE, heading));
    }
    html.push_str("</tr></thead>\n    <tbody>\n");

    for row in build_ledger(breakdown) {
        html.push_str("      <tr>");
        push_ledger_cells(&mut html, row.earning.as_ref(), "earnings");
        push_ledger_cells(&mut html, row.deduction.as_ref(), "deductions");
        html.push_str("</tr>\n");
    }

    html.push_str("    </tbody>\n    <tfoot><tr>");
    html.push_str(&format!(
        "<td style=\"{}\">Total Earnings</td>\
         <td style=\"{} text-align: right;\" data-total=\"earnings\">{}</td>\
         <td style=\"{}\">Total Deductions</td>\
         <td style=\"{} text-align: right;\" data-total=\"deductions\">{}</td>",
        TOTAL_STYLE,
        TOTAL_STYLE,
        format_amount(breakdown.gross_salary),
        TOTAL_STYLE,
        TOTAL_STYLE,
        format_amount(breakdown.total_deductions),
    ));
    html.push_str("</tr></tfoot>\n  </table>\n");

    html.push_str(&format!(
        "  <div class=\"net-pay\" style=\"{}\">Net Salary Payable: {} {}</div>\n",
        NET_STYLE,
        currency,
        format_amount(breakdown.net_salary)
    ));
    html.push_str("</div>\n");

    html
}

fn push_identity_row(html: &mut String, left: (&str, &str), right: (&str, &str)) {
    html.push_str("    <tr>");
    for (label, value) in [left, right] {
        html.push_str(&format!(
            "<th style=\"{}\">{}</th><td style=\"{}\">{}</td>",
            CELL_STYLE,
            label,
            CELL_STYLE,
            escape_html(value)
        ));
    }
    html.push_str("</tr>\n");
}

fn push_ledger_cells(html: &mut String, item: Option<&PayItem>, column: &str) {
    match item {
        Some(item) => html.push_str(&format!(
            "<td style=\"{}\">{}</td><td style=\"{}\" data-column=\"{}\">{}</td>",
            CELL_STYLE,
            escape_html(&item.label),
            AMOUNT_STYLE,
            column,
            format_amount(item.amount)
        )),
        None => html.push_str(&format!(
            "<td style=\"{}\"></td><td style=\"{}\"></td>",
            CELL_STYLE, AMOUNT_STYLE
        )),
    }
}
