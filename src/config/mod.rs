//! Configuration loading and management for the payroll engine.
//!
//! Policy constants (overtime rate, deduction rates, thresholds) and the CTC
//! split ratios are configuration inputs rather than literals, so that
//! jurisdictional rules can vary without code changes.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Payslips issued by: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{OrganizationConfig, PayrollConfig, PolicyConfig, StructureConfig};
