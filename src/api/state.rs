//! Shared state for the payroll API.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::{ConfigLoader, PayrollRules};
use crate::error::{PayrollError, PayrollResult};
use crate::models::PayPeriod;

/// Loaded payroll configuration, shared read-only by every handler.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for use as router state.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the overtime and tax rules in effect.
    pub fn rules(&self) -> &PayrollRules {
        self.config.rules()
    }

    /// Picks the pay period a payroll request covers.
    ///
    /// Explicit bounds win. Otherwise `period_date` is placed on the
    /// configured pay schedule. With neither, or with a date but no schedule,
    /// the request is missing its `pay_period`.
    pub fn pay_period(
        &self,
        explicit: Option<PayPeriod>,
        period_date: Option<NaiveDate>,
    ) -> PayrollResult<PayPeriod> {
        if let Some(period) = explicit {
            return Ok(period);
        }
        let date = period_date.ok_or_else(|| {
            PayrollError::missing_field("pay_period", "either pay_period or period_date is required")
        })?;
        self.config.period_for(date)?.ok_or_else(|| {
            PayrollError::missing_field(
                "pay_period",
                "no pay schedule is configured to derive a period from period_date",
            )
        })
    }
}
