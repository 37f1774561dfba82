//! Payroll run results and saved payroll records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PayBreakdown, PayPeriod};

/// The breakdowns produced by one payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollBatch {
    /// Identifies this run in logs.
    pub run_id: Uuid,
    /// The period the run covers.
    pub period: PayPeriod,
    /// Working days used for every employee.
    pub working_days: u32,
    /// One breakdown per employee, ordered by employee id.
    pub breakdowns: Vec<PayBreakdown>,
    /// When the run completed.
    pub generated_at: DateTime<Utc>,
}

impl PayrollBatch {
    /// Sum of every employee's net salary.
    pub fn total_net_payable(&self) -> Decimal {
        self.breakdowns.iter().map(|b| b.net_salary).sum()
    }

    /// Finds the breakdown for `employee_id`.
    pub fn find(&self, employee_id: &str) -> Option<&PayBreakdown> {
        self.breakdowns.iter().find(|b| b.employee_id == employee_id)
    }

    /// Number of employees in the run.
    pub fn len(&self) -> usize {
        self.breakdowns.len()
    }

    /// Returns true if the run covered no employees.
    pub fn is_empty(&self) -> bool {
        self.breakdowns.is_empty()
    }
}

/// A breakdown saved to payroll history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier assigned when saved.
    pub record_id: Uuid,
    /// When the record was saved.
    pub saved_at: DateTime<Utc>,
    /// The saved breakdown.
    pub breakdown: PayBreakdown,
}

impl PayrollRecord {
    /// Wraps a breakdown with a fresh identifier and timestamp.
    pub fn new(breakdown: PayBreakdown) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            saved_at: Utc::now(),
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn breakdown(employee_id: &str, net: &str) -> PayBreakdown {
        PayBreakdown {
            employee_id: employee_id.to_string(),
            name: "Test".to_string(),
            designation: "Associate".to_string(),
            department: "Operations".to_string(),
            period: PayPeriod::new("October", 2023),
            paid_days: dec("30"),
            working_days: 30,
            earnings: vec![],
            deductions: vec![],
            gross_salary: dec(net),
            total_deductions: Decimal::ZERO,
            net_salary: dec(net),
        }
    }

    #[test]
    fn test_total_net_payable() {
        let batch = PayrollBatch {
            run_id: Uuid::new_v4(),
            period: PayPeriod::new("October", 2023),
            working_days: 30,
            breakdowns: vec![breakdown("EMP001", "88775.00"), breakdown("EMP002", "58466.67")],
            generated_at: Utc::now(),
        };

        assert_eq!(batch.total_net_payable(), dec("147241.67"));
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.find("EMP002").unwrap().net_salary, dec("58466.67"));
        assert!(batch.find("EMP999").is_none());
    }

    #[test]
    fn test_empty_batch_totals_zero() {
        let batch = PayrollBatch {
            run_id: Uuid::new_v4(),
            period: PayPeriod::new("October", 2023),
            working_days: 30,
            breakdowns: vec![],
            generated_at: Utc::now(),
        };

        assert!(batch.is_empty());
        assert_eq!(batch.total_net_payable(), Decimal::ZERO);
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let first = PayrollRecord::new(breakdown("EMP001", "1"));
        let second = PayrollRecord::new(breakdown("EMP001", "1"));
        assert_ne!(first.record_id, second.record_id);
    }
}
