//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayPeriod;

use super::types::{PaySchedule, PayrollConfig, PayrollRules};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── payroll.yaml   # Overtime/tax rules and pay schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Overtime after {} hours", loader.rules().overtime_threshold_hours);
/// # Ok::<(), shift_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `payroll.yaml` is missing
    /// - the file contains invalid YAML
    /// - a rule is out of range (negative threshold, multiplier below 1,
    ///   tax rate outside 0..=1)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<PayrollConfig>(&config_path)?;
        Self::check_rules(&config.rules, &config_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_rules(rules: &PayrollRules, path: &Path) -> PayrollResult<()> {
        let invalid = |message: &str| PayrollError::ConfigParseError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if rules.overtime_threshold_hours < Decimal::ZERO {
            return Err(invalid("overtime_threshold_hours must not be negative"));
        }
        if rules.overtime_multiplier < Decimal::ONE {
            return Err(invalid("overtime_multiplier must be at least 1"));
        }
        if rules.tax_rate < Decimal::ZERO || rules.tax_rate > Decimal::ONE {
            return Err(invalid("tax_rate must be between 0 and 1"));
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the overtime and tax rules.
    pub fn rules(&self) -> &PayrollRules {
        &self.config.rules
    }

    /// Returns the pay schedule, if one is configured.
    pub fn pay_schedule(&self) -> Option<&PaySchedule> {
        self.config.pay_schedule.as_ref()
    }

    /// Derives the scheduled pay period containing `date`.
    ///
    /// Returns `Ok(None)` when no pay schedule is configured.
    pub fn period_for(&self, date: NaiveDate) -> PayrollResult<Option<PayPeriod>> {
        self.pay_schedule()
            .map(|schedule| PayPeriod::containing(date, schedule.frequency, schedule.anchor_date))
            .transpose()
    }
}
