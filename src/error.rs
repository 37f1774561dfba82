//! Error types for the payroll engine.
//!
//! The salary calculator itself never fails in its default permissive mode.
//! These errors cover configuration loading, the employee store, the
//! strict attendance validation mode and failures reported by the PDF
//! library.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     employee_id: "EMP404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP404");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value is outside its permitted range.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// No employee with the given id exists in the store.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        employee_id: String,
    },

    /// A compensation figure could not be applied.
    #[error("Invalid compensation for '{employee_id}': {message}")]
    InvalidCompensation {
        /// The employee whose compensation was being changed.
        employee_id: String,
        /// A description of the problem.
        message: String,
    },

    /// An attendance entry was rejected in strict mode.
    #[error("Invalid attendance entry #{index}: {message}")]
    InvalidAttendance {
        /// Position of the entry in the supplied sequence.
        index: usize,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// The number of working days cannot be used for proration.
    #[error("Invalid working days: {working_days}")]
    InvalidWorkingDays {
        /// The rejected value.
        working_days: u32,
    },

    /// The PDF library failed to build or serialize a payslip.
    #[error("Failed to render payslip: {message}")]
    RenderError {
        /// The library's description of the failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
