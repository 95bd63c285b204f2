//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_OVERTIME_THRESHOLD, DEFAULT_TAX_RATE};
use crate::models::PayFrequency;

/// The numeric policy applied when aggregating payroll.
///
/// Missing keys fall back to the defaults: 8 hours per shift before overtime,
/// overtime paid at 1.5× and a flat 15% tax estimate.
///
/// # Example
///
/// ```
/// use shift_payroll::config::PayrollRules;
/// use rust_decimal::Decimal;
///
/// let rules = PayrollRules::default();
/// assert_eq!(rules.overtime_threshold_hours, Decimal::new(8, 0));
/// assert_eq!(rules.overtime_multiplier, Decimal::new(15, 1));
/// assert_eq!(rules.tax_rate, Decimal::new(15, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollRules {
    /// Hours per shift paid at the regular rate.
    pub overtime_threshold_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Flat tax rate applied to gross pay.
    pub tax_rate: Decimal,
}

impl Default for PayrollRules {
    fn default() -> Self {
        Self {
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

/// The recurring pay schedule used to derive pay periods from a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySchedule {
    /// How often periods repeat.
    pub frequency: PayFrequency,
    /// The first day of any one period; weekly and biweekly periods align to it.
    pub anchor_date: NaiveDate,
}

/// Layout of `payroll.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Overtime and tax policy.
    #[serde(default)]
    pub rules: PayrollRules,
    /// Optional pay schedule.
    #[serde(default)]
    pub pay_schedule: Option<PaySchedule>,
}
