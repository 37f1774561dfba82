//! Property tests for the salary calculator and payslip ledger.

use chrono::NaiveDate;
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    DeductionsResult, calculate_deductions, calculate_salary, prorated_monthly, round_money,
};
use payroll_engine::config::PolicyConfig;
use payroll_engine::models::{
    AttendanceRecord, AttendanceStatus, CompensationStructure, Employee, PayPeriod, Role,
};
use payroll_engine::render::build_ledger;

fn employee(basic: i64, hra: i64, special: i64) -> Employee {
    Employee {
        id: "EMP900".to_string(),
        name: "Property Test".to_string(),
        email: "prop@company.com".to_string(),
        role: Role::Employee,
        department: "QA".to_string(),
        designation: "Tester".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        compensation: CompensationStructure {
            ctc: Decimal::from(basic + hra + special),
            basic: Decimal::from(basic),
            house_rent_allowance: Decimal::from(hra),
            special_allowance: Decimal::from(special),
        },
    }
}

fn status_strategy() -> impl Strategy<Value = AttendanceStatus> {
    prop_oneof![
        Just(AttendanceStatus::Present),
        Just(AttendanceStatus::HalfDay),
        Just(AttendanceStatus::Absent),
        Just(AttendanceStatus::Leave),
        Just(AttendanceStatus::WeekOff),
    ]
}

fn record_strategy() -> impl Strategy<Value = AttendanceRecord> {
    (status_strategy(), 0_i64..=1200)
        .prop_map(|(status, cents)| AttendanceRecord::new(status, Decimal::new(cents, 2)))
}

fn gross_strategy() -> impl Strategy<Value = Decimal> {
    (100_i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn applied(result: &DeductionsResult, rule_id: &str) -> bool {
    result
        .audit_steps
        .iter()
        .find(|s| s.rule_id == rule_id)
        .map(|s| s.output["applied"] == serde_json::json!(true))
        .unwrap_or(false)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn empty_attendance_pays_every_working_day(
        basic in 0_i64..3_000_000,
        hra in 0_i64..1_000_000,
        special in 0_i64..2_000_000,
        working_days in 1_u32..=31,
    ) {
        let breakdown = calculate_salary(
            &employee(basic, hra, special),
            &[],
            &PayPeriod::new("October", 2023),
            working_days,
            &PolicyConfig::default(),
        );
        prop_assert_eq!(breakdown.paid_days, Decimal::from(working_days));
    }

    #[test]
    fn net_is_gross_minus_deductions(
        basic in 0_i64..3_000_000,
        hra in 0_i64..1_000_000,
        special in 0_i64..2_000_000,
        attendance in proptest::collection::vec(record_strategy(), 0..31),
        working_days in 0_u32..=31,
    ) {
        let breakdown = calculate_salary(
            &employee(basic, hra, special),
            &attendance,
            &PayPeriod::new("October", 2023),
            working_days,
            &PolicyConfig::default(),
        );
        prop_assert_eq!(breakdown.net_salary, breakdown.gross_salary - breakdown.total_deductions);
    }

    #[test]
    fn ledger_columns_sum_to_totals(
        basic in 0_i64..3_000_000,
        hra in 0_i64..1_000_000,
        special in 0_i64..2_000_000,
        attendance in proptest::collection::vec(record_strategy(), 0..31),
    ) {
        let breakdown = calculate_salary(
            &employee(basic, hra, special),
            &attendance,
            &PayPeriod::new("October", 2023),
            30,
            &PolicyConfig::default(),
        );
        let rows = build_ledger(&breakdown);

        let earnings: Decimal = rows.iter().filter_map(|r| r.earning.as_ref()).map(|i| i.amount).sum();
        let deductions: Decimal = rows.iter().filter_map(|r| r.deduction.as_ref()).map(|i| i.amount).sum();
        prop_assert_eq!(earnings, breakdown.gross_salary);
        prop_assert_eq!(deductions, breakdown.total_deductions);
    }

    #[test]
    fn base_earnings_scale_linearly(
        annual in 0_i64..5_000_000,
        paid_days in 0_u32..=15,
        working_days in 15_u32..=31,
    ) {
        let annual = Decimal::from(annual);
        let factor = Decimal::from(paid_days) / Decimal::from(working_days);
        let single = round_money(prorated_monthly(annual, factor));
        let double = round_money(prorated_monthly(annual, factor * Decimal::TWO));

        let drift = (double - single * Decimal::TWO).abs();
        prop_assert!(drift <= Decimal::new(1, 2), "drift {} too large", drift);
        prop_assert_eq!(
            round_money(prorated_monthly(annual, Decimal::ONE)),
            round_money(annual / Decimal::from(12))
        );
    }

    #[test]
    fn threshold_deductions_follow_strict_comparisons(gross in gross_strategy()) {
        let policy = PolicyConfig::default();
        let result = calculate_deductions(Decimal::ZERO, gross, &policy, 1);

        prop_assert_eq!(applied(&result, "employee_state_insurance"), gross < policy.esi_limit);
        prop_assert_eq!(applied(&result, "professional_tax"), gross > policy.pt_threshold);
        prop_assert_eq!(applied(&result, "withholding_tax"), gross > policy.tds_threshold);
    }
}

#[test]
fn thresholds_at_exact_boundaries_take_else_branch() {
    let policy = PolicyConfig::default();

    let at_esi = calculate_deductions(Decimal::ZERO, policy.esi_limit, &policy, 1);
    assert_eq!(at_esi.employee_state_insurance, Decimal::ZERO);

    let at_pt = calculate_deductions(Decimal::ZERO, policy.pt_threshold, &policy, 1);
    assert_eq!(at_pt.professional_tax, Decimal::ZERO);

    let at_tds = calculate_deductions(Decimal::ZERO, policy.tds_threshold, &policy, 1);
    assert_eq!(at_tds.withholding_tax, Decimal::ZERO);
}
