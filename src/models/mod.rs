//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod compensation;
mod employee;
mod pay_breakdown;
mod pay_period;

pub use attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, MAX_DAILY_OVERTIME_HOURS,
};
pub use audit::{AuditStep, AuditTrace, AuditWarning, WarningSeverity};
pub use compensation::CompensationStructure;
pub use employee::{Employee, Role};
pub use pay_breakdown::{PayBreakdown, PayItem};
pub use pay_period::PayPeriod;
