//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};

use super::types::{OrganizationConfig, PayrollConfig, PolicyConfig, StructureConfig};

/// Name of the configuration file inside a configuration directory.
pub const POLICY_FILE_NAME: &str = "policy.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # organization, policy and structure sections
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Overtime rate: {}", loader.policy().overtime_rate);
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from `policy.yaml` in the specified directory.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// contains out-of-range policy values.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE_NAME);
        let path_str = policy_path.display().to_string();

        let content =
            fs::read_to_string(&policy_path).map_err(|_| PayrollError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            organization = %loader.organization().name,
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("policy:\n  overtime_rate: \"650\"\n")?;
    /// assert_eq!(loader.policy().overtime_rate, Decimal::new(650, 0));
    /// # Ok::<(), payroll_engine::error::PayrollError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> PayrollResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        debug!(path = %path, policy = ?config.policy, "Parsed payroll policy");
        Ok(Self { config })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the organization details.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.config.organization
    }

    /// Returns the deduction and overtime policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.config.policy
    }

    /// Returns the CTC split ratios.
    pub fn structure(&self) -> &StructureConfig {
        &self.config.structure
    }
}
