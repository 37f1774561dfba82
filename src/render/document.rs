//! PDF payslip layout.

use crate::config::OrganizationConfig;
use crate::error::PayrollResult;
use crate::models::PayBreakdown;

use super::ledger::{LedgerRow, build_ledger, format_amount};
use super::pdf::{Font, PAGE_HEIGHT, PAGE_WIDTH, PageCanvas, PdfPages, fit_text};

const MARGIN: f32 = 50.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const COLUMN_GAP: f32 = 16.0;
const HALF_WIDTH: f32 = (CONTENT_WIDTH - COLUMN_GAP) / 2.0;
const EARNINGS_LEFT: f32 = MARGIN;
const DEDUCTIONS_LEFT: f32 = MARGIN + HALF_WIDTH + COLUMN_GAP;
const CELL_PADDING: f32 = 6.0;
/// Offset of an identity value from its label.
const VALUE_OFFSET: f32 = 80.0;
const VALUE_WIDTH: f32 = HALF_WIDTH - VALUE_OFFSET;

const ROW_HEIGHT: f32 = 18.0;
const BODY_SIZE: f32 = 10.0;
/// Lowest baseline a ledger row may use, leaving room for totals and footer.
const LEDGER_FLOOR: f32 = 160.0;

/// Ledger rows that fit on the first page below the identity block.
pub(crate) const FIRST_PAGE_ROWS: usize = rows_between(594.0);
/// Ledger rows that fit on each continuation page.
pub(crate) const CONTINUATION_ROWS: usize = rows_between(654.0);

const fn rows_between(first_baseline: f32) -> usize {
    ((first_baseline - LEDGER_FLOOR) / ROW_HEIGHT) as usize + 1
}

/// Lays out a payslip as a PDF document.
pub(crate) fn render(
    organization: &OrganizationConfig,
    breakdown: &PayBreakdown,
) -> PayrollResult<Vec<u8>> {
    let rows = build_ledger(breakdown);
    let chunks = paginate(&rows);
    let page_total = chunks.len();
    let pages = PdfPages::new(&format!(
        "Payslip {} {}",
        breakdown.employee_id, breakdown.period
    ))?;

    for (index, chunk) in chunks.into_iter().enumerate() {
        let page = pages.add_page();
        let first = index == 0;
        let last = index + 1 == page_total;

        let mut y = draw_header(&page, organization, breakdown, first);
        if first {
            y = draw_identity(&page, breakdown, y);
        }
        y = draw_ledger_heading(&page, &organization.currency, y);
        for row in chunk {
            draw_ledger_row(&page, row, y);
            y -= ROW_HEIGHT;
        }
        if last {
            draw_totals(&page, breakdown, y);
            draw_net_pay(&page, &organization.currency, breakdown, y - 2.0 * ROW_HEIGHT);
        }
        if page_total > 1 {
            page.text_right(
                Font::Regular,
                8.0,
                PAGE_WIDTH - MARGIN,
                36.0,
                &format!("Page {} of {}", index + 1, page_total),
            );
        }
    }

    pages.finish()
}

/// Splits ledger rows into per-page chunks; always at least one chunk.
fn paginate(rows: &[LedgerRow]) -> Vec<&[LedgerRow]> {
    let split = rows.len().min(FIRST_PAGE_ROWS);
    let (head, mut rest) = rows.split_at(split);
    let mut chunks = vec![head];

    while !rest.is_empty() {
        let take = rest.len().min(CONTINUATION_ROWS);
        let (chunk, tail) = rest.split_at(take);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}

fn draw_header(
    page: &PageCanvas,
    organization: &OrganizationConfig,
    breakdown: &PayBreakdown,
    first: bool,
) -> f32 {
    let top = PAGE_HEIGHT - MARGIN;
    page.text(Font::Bold, 16.0, MARGIN, top - 16.0, &organization.name);

    let title = if first {
        format!("Payslip for {}", breakdown.period)
    } else {
        format!("Payslip for {} (continued)", breakdown.period)
    };
    page.text(Font::Bold, 13.0, MARGIN, top - 38.0, &title);
    page.line(MARGIN, top - 48.0, PAGE_WIDTH - MARGIN, top - 48.0, 1.0);

    top - 70.0
}

fn draw_identity(page: &PageCanvas, breakdown: &PayBreakdown, y: f32) -> f32 {
    let pairs = [
        (
            ("Employee ID:", breakdown.employee_id.clone()),
            ("Name:", breakdown.name.clone()),
        ),
        (
            ("Designation:", breakdown.designation.clone()),
            ("Department:", breakdown.department.clone()),
        ),
        (
            ("Paid Days:", breakdown.paid_days.normalize().to_string()),
            ("Working Days:", breakdown.working_days.to_string()),
        ),
    ];

    let mut y = y;
    for ((left_label, left_value), (right_label, right_value)) in pairs {
        for (left, label, value) in [
            (EARNINGS_LEFT, left_label, left_value),
            (DEDUCTIONS_LEFT, right_label, right_value),
        ] {
            page.text(Font::Bold, BODY_SIZE, left, y, label);
            page.text(
                Font::Regular,
                BODY_SIZE,
                left + VALUE_OFFSET,
                y,
                &fit_text(&value, Font::Regular, BODY_SIZE, VALUE_WIDTH),
            );
        }
        y -= 16.0;
    }

    y - 12.0
}

fn draw_ledger_heading(page: &PageCanvas, currency: &str, y: f32) -> f32 {
    let amount_heading = format!("Amount ({})", currency);
    page.fill_rect(MARGIN, y - 6.0, CONTENT_WIDTH, ROW_HEIGHT, 0.85);
    draw_cells(
        page,
        Font::Bold,
        y,
        ("Earnings", amount_heading.as_str()),
        ("Deductions", amount_heading.as_str()),
    );
    y - ROW_HEIGHT
}

fn draw_ledger_row(page: &PageCanvas, row: &LedgerRow, y: f32) {
    let earning = row
        .earning
        .as_ref()
        .map(|item| (item.label.clone(), format_amount(item.amount)))
        .unwrap_or_default();
    let deduction = row
        .deduction
        .as_ref()
        .map(|item| (item.label.clone(), format_amount(item.amount)))
        .unwrap_or_default();

    draw_cells(
        page,
        Font::Regular,
        y,
        (earning.0.as_str(), earning.1.as_str()),
        (deduction.0.as_str(), deduction.1.as_str()),
    );
    page.line(MARGIN, y - 6.0, PAGE_WIDTH - MARGIN, y - 6.0, 0.25);
}

fn draw_totals(page: &PageCanvas, breakdown: &PayBreakdown, y: f32) {
    let gross = format_amount(breakdown.gross_salary);
    let total = format_amount(breakdown.total_deductions);
    page.line(MARGIN, y + ROW_HEIGHT - 6.0, PAGE_WIDTH - MARGIN, y + ROW_HEIGHT - 6.0, 1.0);
    draw_cells(
        page,
        Font::Bold,
        y,
        ("Total Earnings", gross.as_str()),
        ("Total Deductions", total.as_str()),
    );
}

fn draw_net_pay(page: &PageCanvas, currency: &str, breakdown: &PayBreakdown, y: f32) {
    page.fill_rect(MARGIN, y - 10.0, CONTENT_WIDTH, 30.0, 0.9);
    page.text(
        Font::Bold,
        12.0,
        MARGIN + CELL_PADDING,
        y,
        &format!(
            "Net Salary Payable: {} {}",
            currency,
            format_amount(breakdown.net_salary)
        ),
    );
}

fn draw_cells(
    page: &PageCanvas,
    font: Font,
    y: f32,
    earning: (&str, &str),
    deduction: (&str, &str),
) {
    for (left, (label, amount)) in [(EARNINGS_LEFT, earning), (DEDUCTIONS_LEFT, deduction)] {
        if !label.is_empty() {
            page.text(font, BODY_SIZE, left + CELL_PADDING, y, label);
        }
        if !amount.is_empty() {
            page.text_right(font, BODY_SIZE, left + HALF_WIDTH - CELL_PADDING, y, amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayItem, PayPeriod};
    use crate::render::pdf::{page_texts, text_width};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_breakdown(extra_earnings: usize) -> PayBreakdown {
        let mut earnings = vec![
            PayItem::new("Basic Salary", dec("50000.00")),
            PayItem::new("HRA", dec("20000.00")),
            PayItem::new("Special Allowance", dec("30000.00")),
            PayItem::new("Overtime Pay", dec("0.00")),
        ];
        for i in 0..extra_earnings {
            earnings.push(PayItem::new(&format!("Arrears {}", i + 1), dec("1.00")));
        }
        let gross_salary = earnings.iter().map(|i| i.amount).sum();

        PayBreakdown {
            employee_id: "EMP001".to_string(),
            name: "Alice Johnson".to_string(),
            designation: "Manager".to_string(),
            department: "Human Resources".to_string(),
            period: PayPeriod::new("October", 2023),
            paid_days: dec("30"),
            working_days: 30,
            earnings,
            deductions: vec![
                PayItem::new("PF", dec("6000.00")),
                PayItem::new("ESI", dec("0")),
                PayItem::new("Professional Tax", dec("200.00")),
                PayItem::new("LWF", dec("25.00")),
                PayItem::new("TDS", dec("5000.00")),
            ],
            gross_salary,
            total_deductions: dec("11225.00"),
            net_salary: gross_salary - dec("11225.00"),
        }
    }

    fn render_pages(breakdown: &PayBreakdown) -> Vec<Vec<String>> {
        let bytes = render(&OrganizationConfig::default(), breakdown).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        page_texts(&bytes)
            .iter()
            .map(|text| text.lines().map(str::to_string).collect())
            .collect()
    }

    fn has_line(page: &[String], expected: &str) -> bool {
        page.iter().any(|line| line == expected)
    }

    #[test]
    fn test_single_page_payslip() {
        let pages = render_pages(&create_test_breakdown(0));
        assert_eq!(pages.len(), 1);

        let page = &pages[0];
        for expected in [
            "Helix Enterprises",
            "Payslip for October-2023",
            "EMP001",
            "Human Resources",
            "Amount (INR)",
            "50,000.00",
            "Total Earnings",
            "100,000.00",
            "11,225.00",
            "Net Salary Payable: INR 88,775.00",
        ] {
            assert!(has_line(page, expected), "missing {:?}", expected);
        }
        assert!(!page.iter().any(|line| line.starts_with("Page 1 of")));
    }

    #[test]
    fn test_long_ledger_paginates() {
        let breakdown = create_test_breakdown(FIRST_PAGE_ROWS + 5);
        let pages = render_pages(&breakdown);

        assert_eq!(pages.len(), 2);
        assert!(has_line(&pages[1], "Payslip for October-2023 (continued)"));
        assert!(has_line(&pages[0], "Page 1 of 2"));
        assert!(has_line(&pages[1], "Page 2 of 2"));
        assert!(has_line(&pages[0], "Helix Enterprises"));
        assert!(has_line(&pages[1], "Helix Enterprises"));
        assert!(!has_line(&pages[1], "EMP001"));

        let net = format!("Net Salary Payable: INR {}", format_amount(breakdown.net_salary));
        assert!(!has_line(&pages[0], &net));
        assert!(has_line(&pages[1], &net));
    }

    #[test]
    fn test_paginate_chunk_sizes() {
        let rows = vec![
            LedgerRow {
                earning: None,
                deduction: None,
            };
            FIRST_PAGE_ROWS + CONTINUATION_ROWS + 1
        ];
        let chunks = paginate(&rows);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), FIRST_PAGE_ROWS);
        assert_eq!(chunks[1].len(), CONTINUATION_ROWS);
        assert_eq!(chunks[2].len(), 1);
    }

    #[test]
    fn test_empty_ledger_still_renders_one_page() {
        assert_eq!(paginate(&[]).len(), 1);
    }

    #[test]
    fn test_unencodable_names_are_replaced() {
        let mut breakdown = create_test_breakdown(0);
        breakdown.name = "Zoë (Ops) ₹".to_string();
        let pages = render_pages(&breakdown);

        assert!(has_line(&pages[0], "Zoë (Ops) ?"));
    }

    #[test]
    fn test_long_identity_values_are_shortened() {
        let mut breakdown = create_test_breakdown(0);
        breakdown.name = "Maximiliana Alexandra Konstantinopoulou-Vanderberg".to_string();
        breakdown.designation = "Senior Principal Distinguished Engineering Manager".to_string();
        let pages = render_pages(&breakdown);

        let name = pages[0]
            .iter()
            .find(|line| line.starts_with("Maximiliana"))
            .unwrap();
        assert!(name.ends_with("..."));
        assert!(text_width(name, Font::Regular, BODY_SIZE) <= VALUE_WIDTH);

        let designation = pages[0]
            .iter()
            .find(|line| line.starts_with("Senior"))
            .unwrap();
        assert!(designation.ends_with("..."));
        assert!(text_width(designation, Font::Regular, BODY_SIZE) <= VALUE_WIDTH);
    }
}
