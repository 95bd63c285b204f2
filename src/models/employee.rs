//! Employee reference used to resolve names and rates for payroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

fn default_active() -> bool {
    true
}

/// The slice of an employee record that payroll needs.
///
/// `hourly_rate` is the employee's current rate; it is applied to every
/// shift in a pay period regardless of when the shift was worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, when the roster has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current hourly rate.
    pub hourly_rate: Decimal,
    /// Whether the employee is still on the roster.
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Employee {
    /// Checks the fields payroll depends on.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: Some("Ada Lovelace".to_string()),
    ///     hourly_rate: Decimal::new(2550, 2),
    ///     active: true,
    /// };
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> PayrollResult<()> {
        if self.id.trim().is_empty() {
            return Err(PayrollError::missing_field(
                "employee_id",
                "employee id must not be empty",
            ));
        }
        if self.hourly_rate < Decimal::ZERO {
            return Err(PayrollError::missing_field(
                "hourly_rate",
                format!("employee '{}' has a negative hourly rate", self.id),
            ));
        }
        Ok(())
    }
}
