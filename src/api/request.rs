//! Request types for the shift payroll API.
//!
//! This module defines the JSON request structures for the payroll and shift
//! endpoints and their conversions into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PayPeriod, Shift, ShiftStatus};

fn default_active() -> bool {
    true
}

/// Request body for the `/payroll/calculate` endpoint.
///
/// The pay period is either given explicitly or derived from `period_date`
/// using the configured pay schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// Explicit pay period bounds.
    #[serde(default)]
    pub pay_period: Option<PayPeriodRequest>,
    /// A date inside the wanted pay period, used when `pay_period` is absent.
    #[serde(default)]
    pub period_date: Option<NaiveDate>,
    /// Deductions to apply to the record.
    #[serde(default)]
    pub deductions: Option<Decimal>,
    /// Candidate shifts; only the employee's completed shifts inside the
    /// period are paid.
    pub shifts: Vec<ShiftRequest>,
}

/// Request body for the `/shifts/conflicts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRequest {
    /// The shifts already on the schedule.
    pub shifts: Vec<ShiftRequest>,
    /// A shift about to be saved; when present only its conflicts are returned.
    #[serde(default)]
    pub candidate: Option<ShiftRequest>,
}

/// Request body for the `/shifts/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// The shift to measure.
    pub shift: ShiftRequest,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, when known.
    #[serde(default)]
    pub name: Option<String>,
    /// Current hourly rate.
    pub hourly_rate: Decimal,
    /// Whether the employee is still on the roster.
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Pay period bounds in a payroll request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Shift information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// Display name of the employee.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Scheduled start, `"HH:MM"`.
    pub start_time: String,
    /// Scheduled end, `"HH:MM"`.
    pub end_time: String,
    /// Recorded clock-in time.
    #[serde(default)]
    pub actual_start_time: Option<String>,
    /// Recorded clock-out time.
    #[serde(default)]
    pub actual_end_time: Option<String>,
    /// Hourly rate for the shift; defaults to zero when the caller pays by
    /// employee rate.
    #[serde(default)]
    pub hourly_rate: Decimal,
    /// Attendance status.
    #[serde(default)]
    pub status: ShiftStatus,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            hourly_rate: req.hourly_rate,
            active: req.active,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod::new(req.start_date, req.end_date)
    }
}

impl From<ShiftRequest> for Shift {
    fn from(req: ShiftRequest) -> Self {
        Shift {
            id: req.id,
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            actual_start_time: req.actual_start_time,
            actual_end_time: req.actual_end_time,
            hourly_rate: req.hourly_rate,
            status: req.status,
        }
    }
}
