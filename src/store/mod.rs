//! In-memory payroll store.
//!
//! [`PayrollStore`] owns employees, their attendance keyed by date, and the
//! history of saved payroll records. It is a plain value owned by the
//! caller; nothing in the crate holds global state.

mod batch;

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::calculate_salary;
use crate::config::{PolicyConfig, StructureConfig};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AttendanceRecord, Employee, PayBreakdown, PayPeriod};

pub use batch::{PayrollBatch, PayrollRecord};

/// Employees, attendance and payroll history.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::{PolicyConfig, StructureConfig};
/// use payroll_engine::models::{AttendanceRecord, CompensationStructure, Employee, PayPeriod, Role};
/// use payroll_engine::store::PayrollStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut store = PayrollStore::new();
/// store.add_employee(Employee {
///     id: "EMP002".to_string(),
///     name: "Bob Smith".to_string(),
///     email: "bob@company.com".to_string(),
///     role: Role::Employee,
///     department: "IT".to_string(),
///     designation: "Developer".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2023, 3, 15).unwrap(),
///     compensation: CompensationStructure::from_ctc(
///         Decimal::new(800_000, 0),
///         &StructureConfig::default(),
///     ),
/// });
/// store.log_attendance(
///     "EMP002",
///     NaiveDate::from_ymd_opt(2023, 10, 2).unwrap(),
///     AttendanceRecord::present(),
/// )?;
///
/// let batch = store.run_payroll(&PayPeriod::new("October", 2023), 30, &PolicyConfig::default());
/// assert_eq!(batch.find("EMP002").unwrap().paid_days, Decimal::ONE);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollStore {
    employees: BTreeMap<String, Employee>,
    attendance: HashMap<String, BTreeMap<NaiveDate, AttendanceRecord>>,
    history: Vec<PayrollRecord>,
}

impl PayrollStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee, replacing any existing record with the same id.
    ///
    /// Returns the replaced record, if any. Attendance already logged for
    /// the id is kept.
    pub fn add_employee(&mut self, employee: Employee) -> Option<Employee> {
        info!(employee_id = %employee.id, "Employee added");
        self.employees.insert(employee.id.clone(), employee)
    }

    /// Looks up an employee by id.
    pub fn employee(&self, employee_id: &str) -> PayrollResult<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// All employees ordered by id.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Re-derives an employee's compensation structure from a new CTC.
    ///
    /// Breakdowns already computed or saved are unaffected.
    pub fn update_ctc(
        &mut self,
        employee_id: &str,
        ctc: Decimal,
        structure: &StructureConfig,
    ) -> PayrollResult<&Employee> {
        let employee =
            self.employees
                .get_mut(employee_id)
                .ok_or_else(|| PayrollError::EmployeeNotFound {
                    employee_id: employee_id.to_string(),
                })?;
        employee.apply_ctc(ctc, structure)?;

        info!(
            employee_id = %employee_id,
            ctc = %ctc,
            basic = %employee.compensation.basic,
            "Compensation updated"
        );
        Ok(employee)
    }

    /// Records attendance for one date, overwriting any earlier record.
    pub fn log_attendance(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        record: AttendanceRecord,
    ) -> PayrollResult<()> {
        self.employee(employee_id)?;
        debug!(
            employee_id = %employee_id,
            date = %date,
            status = %record.status,
            "Attendance logged"
        );
        self.attendance
            .entry(employee_id.to_string())
            .or_default()
            .insert(date, record);
        Ok(())
    }

    /// All attendance for an employee in date order.
    pub fn attendance_for(&self, employee_id: &str) -> Vec<(NaiveDate, AttendanceRecord)> {
        self.attendance
            .get(employee_id)
            .map(|days| days.iter().map(|(d, r)| (*d, r.clone())).collect())
            .unwrap_or_default()
    }

    /// Attendance records falling within `period`, in date order.
    ///
    /// Empty when the period's month name cannot be resolved.
    pub fn attendance_for_period(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> Vec<AttendanceRecord> {
        self.attendance
            .get(employee_id)
            .map(|days| {
                days.iter()
                    .filter(|(date, _)| period.contains_date(**date))
                    .map(|(_, record)| record.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Computes every employee's breakdown for `period`.
    ///
    /// Each employee's attendance is filtered to the period first; an
    /// employee with none is paid for every working day.
    pub fn run_payroll(
        &self,
        period: &PayPeriod,
        working_days: u32,
        policy: &PolicyConfig,
    ) -> PayrollBatch {
        let start_time = Instant::now();
        let run_id = Uuid::new_v4();
        info!(
            run_id = %run_id,
            period = %period,
            employees = self.employees.len(),
            "Starting payroll run"
        );

        let breakdowns: Vec<PayBreakdown> = self
            .employees
            .values()
            .map(|employee| {
                let attendance = self.attendance_for_period(&employee.id, period);
                calculate_salary(employee, &attendance, period, working_days, policy)
            })
            .collect();

        let batch = PayrollBatch {
            run_id,
            period: period.clone(),
            working_days,
            breakdowns,
            generated_at: Utc::now(),
        };

        info!(
            run_id = %run_id,
            period = %period,
            total_net_payable = %batch.total_net_payable(),
            duration_us = start_time.elapsed().as_micros() as u64,
            "Payroll run complete"
        );
        batch
    }

    /// Appends a breakdown to payroll history and returns its record id.
    pub fn save_payroll_record(&mut self, breakdown: PayBreakdown) -> Uuid {
        let record = PayrollRecord::new(breakdown);
        let record_id = record.record_id;
        info!(
            record_id = %record_id,
            employee_id = %record.breakdown.employee_id,
            period = %record.breakdown.period,
            "Payroll record saved"
        );
        self.history.push(record);
        record_id
    }

    /// Saved payroll records in the order they were saved.
    pub fn payroll_history(&self) -> &[PayrollRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceStatus, CompensationStructure, Role};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, month, day).unwrap()
    }

    fn create_test_employee(id: &str, name: &str, ctc: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@company.com", id.to_lowercase()),
            role: Role::Employee,
            department: "IT".to_string(),
            designation: "Developer".to_string(),
            joining_date: date(1, 1),
            compensation: CompensationStructure::from_ctc(dec(ctc), &StructureConfig::default()),
        }
    }

    fn create_test_store() -> PayrollStore {
        let mut store = PayrollStore::new();
        store.add_employee(create_test_employee("EMP001", "Alice Johnson", "1200000"));
        store.add_employee(create_test_employee("EMP002", "Bob Smith", "800000"));
        store
    }

    #[test]
    fn test_add_and_lookup_employee() {
        let store = create_test_store();

        assert_eq!(store.employee("EMP001").unwrap().name, "Alice Johnson");
        let ids: Vec<&str> = store.employees().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP001", "EMP002"]);
    }

    #[test]
    fn test_add_employee_replaces_same_id() {
        let mut store = create_test_store();
        let replaced = store.add_employee(create_test_employee("EMP001", "Alice Cooper", "1200000"));

        assert_eq!(replaced.unwrap().name, "Alice Johnson");
        assert_eq!(store.employee("EMP001").unwrap().name, "Alice Cooper");
        assert_eq!(store.employees().count(), 2);
    }

    #[test]
    fn test_unknown_employee() {
        let store = create_test_store();
        match store.employee("EMP999") {
            Err(PayrollError::EmployeeNotFound { employee_id }) => assert_eq!(employee_id, "EMP999"),
            other => panic!("Expected EmployeeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_ctc_rederives_structure() {
        let mut store = create_test_store();
        let employee = store
            .update_ctc("EMP002", dec("1000000"), &StructureConfig::default())
            .unwrap();

        assert_eq!(employee.compensation.ctc, dec("1000000"));
        assert_eq!(employee.compensation.basic, dec("500000"));
        assert_eq!(employee.compensation.house_rent_allowance, dec("100000"));
        assert_eq!(employee.compensation.special_allowance, dec("400000"));
    }

    #[test]
    fn test_update_ctc_unknown_employee() {
        let mut store = create_test_store();
        let result = store.update_ctc("EMP404", dec("1"), &StructureConfig::default());
        assert!(matches!(result, Err(PayrollError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_update_ctc_does_not_touch_saved_records() {
        let mut store = create_test_store();
        let policy = PolicyConfig::default();
        let period = PayPeriod::new("October", 2023);
        let batch = store.run_payroll(&period, 30, &policy);
        let saved = batch.find("EMP001").unwrap().clone();
        store.save_payroll_record(saved.clone());

        store
            .update_ctc("EMP001", dec("2400000"), &StructureConfig::default())
            .unwrap();

        assert_eq!(store.payroll_history()[0].breakdown, saved);
        assert_eq!(saved.gross_salary, dec("100000.00"));
    }

    #[test]
    fn test_log_attendance_overwrites_same_date() {
        let mut store = create_test_store();
        store
            .log_attendance("EMP001", date(10, 2), AttendanceRecord::present())
            .unwrap();
        store
            .log_attendance(
                "EMP001",
                date(10, 2),
                AttendanceRecord::new(AttendanceStatus::HalfDay, dec("1")),
            )
            .unwrap();

        let attendance = store.attendance_for("EMP001");
        assert_eq!(attendance.len(), 1);
        assert_eq!(attendance[0].1.status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_log_attendance_unknown_employee() {
        let mut store = create_test_store();
        let result = store.log_attendance("EMP404", date(10, 2), AttendanceRecord::present());
        assert!(matches!(result, Err(PayrollError::EmployeeNotFound { .. })));
        assert!(store.attendance_for("EMP404").is_empty());
    }

    #[test]
    fn test_attendance_in_date_order() {
        let mut store = create_test_store();
        for day in [5, 1, 3] {
            store
                .log_attendance("EMP001", date(10, day), AttendanceRecord::present())
                .unwrap();
        }

        let dates: Vec<NaiveDate> = store.attendance_for("EMP001").into_iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![date(10, 1), date(10, 3), date(10, 5)]);
    }

    #[test]
    fn test_attendance_for_period_filters_month() {
        let mut store = create_test_store();
        store
            .log_attendance("EMP001", date(9, 30), AttendanceRecord::present())
            .unwrap();
        store
            .log_attendance("EMP001", date(10, 1), AttendanceRecord::present())
            .unwrap();
        store
            .log_attendance("EMP001", date(11, 1), AttendanceRecord::present())
            .unwrap();

        let october = store.attendance_for_period("EMP001", &PayPeriod::new("October", 2023));
        assert_eq!(october.len(), 1);
        let unknown = store.attendance_for_period("EMP001", &PayPeriod::new("Octember", 2023));
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_run_payroll_uses_period_attendance() {
        let mut store = create_test_store();
        for day in 1..=15 {
            store
                .log_attendance("EMP001", date(10, day), AttendanceRecord::present())
                .unwrap();
        }
        // Outside the period; must not count.
        store
            .log_attendance("EMP001", date(9, 29), AttendanceRecord::present())
            .unwrap();

        let batch = store.run_payroll(&PayPeriod::new("October", 2023), 30, &PolicyConfig::default());

        assert_eq!(batch.len(), 2);
        let alice = batch.find("EMP001").unwrap();
        assert_eq!(alice.paid_days, dec("15"));
        assert_eq!(alice.net_salary, dec("46775.00"));

        // No attendance: full month.
        let bob = batch.find("EMP002").unwrap();
        assert_eq!(bob.paid_days, dec("30"));
        assert_eq!(
            batch.total_net_payable(),
            alice.net_salary + bob.net_salary
        );
    }

    #[test]
    fn test_save_payroll_record_appends_history() {
        let mut store = create_test_store();
        let batch = store.run_payroll(&PayPeriod::new("October", 2023), 30, &PolicyConfig::default());

        let ids: Vec<Uuid> = batch
            .breakdowns
            .iter()
            .cloned()
            .map(|b| store.save_payroll_record(b))
            .collect();

        let history = store.payroll_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].record_id, ids[0]);
        assert_eq!(history[1].breakdown.employee_id, "EMP002");
    }
}
