//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! staff records held by the payroll store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StructureConfig;
use crate::error::{PayrollError, PayrollResult};

use super::CompensationStructure;

/// Portal role of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// HR administrator: manages compensation, attendance and payroll runs.
    #[serde(alias = "HR")]
    Hr,
    /// Regular employee with self-service access.
    #[serde(alias = "Employee")]
    Employee,
}

/// An employee record as held by the payroll store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier (e.g., "EMP001").
    pub id: String,
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Portal role.
    pub role: Role,
    /// Department name.
    pub department: String,
    /// Job title.
    pub designation: String,
    /// Date the employee joined.
    pub joining_date: NaiveDate,
    /// Current annual compensation.
    pub compensation: CompensationStructure,
}

impl Employee {
    /// Returns true if the employee is an HR administrator.
    pub fn is_hr(&self) -> bool {
        self.role == Role::Hr
    }

    /// Replaces the compensation structure with one derived from `ctc`.
    ///
    /// The whole structure is recomputed; a negative CTC is rejected and
    /// leaves the current structure untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::StructureConfig;
    /// use payroll_engine::models::{CompensationStructure, Employee, Role};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
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
    /// };
    ///
    /// employee.apply_ctc(Decimal::new(900_000, 0), &StructureConfig::default())?;
    /// assert_eq!(employee.compensation.basic, Decimal::new(450_000, 0));
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn apply_ctc(&mut self, ctc: Decimal, structure: &StructureConfig) -> PayrollResult<()> {
        if ctc < Decimal::ZERO {
            return Err(PayrollError::InvalidCompensation {
                employee_id: self.id.clone(),
                message: format!("CTC cannot be negative (got {})", ctc),
            });
        }
        self.compensation = CompensationStructure::from_ctc(ctc, structure);
        Ok(())
    }
}
