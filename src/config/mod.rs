//! Configuration loading and management for the shift payroll engine.
//!
//! This module loads the overtime/tax policy and the pay schedule from a
//! YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Tax rate: {}", config.rules().tax_rate);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{PaySchedule, PayrollConfig, PayrollRules};
