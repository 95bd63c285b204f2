//! Payroll record model.
//!
//! A [`PayrollRecord`] is the aggregate produced for one employee over one pay
//! period. It is recomputed from shifts rather than updated incrementally;
//! only its status, timestamps and deductions change after creation.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

/// Lifecycle of a payroll record.
///
/// Transitions only move forward. A pending record may be processed, and a
/// pending or processed record may be paid or cancelled. Paid and cancelled
/// are final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    /// Calculated, awaiting review.
    #[default]
    Pending,
    /// Approved for payment.
    Processed,
    /// Paid out.
    Paid,
    /// Withdrawn.
    Cancelled,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayrollStatus::Pending => "pending",
            PayrollStatus::Processed => "processed",
            PayrollStatus::Paid => "paid",
            PayrollStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Payroll totals for one employee over one pay period.
///
/// Hours are split per shift: each shift contributes at most the overtime
/// threshold to `regular_hours` and the remainder to `overtime_hours`, so
/// `total_hours == regular_hours + overtime_hours`.
///
/// Records are built by [`crate::calculation::calculate_from_shifts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The employee being paid.
    pub employee_id: String,
    /// Display name of the employee, resolved by the caller when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// First day of the pay period (inclusive).
    pub pay_period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub pay_period_end: NaiveDate,
    /// Rate applied to every shift in the period.
    pub hourly_rate: Decimal,
    /// Number of shifts aggregated.
    pub shift_count: usize,
    /// Sum of all shift durations.
    pub total_hours: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// `regular_hours × hourly_rate`.
    pub regular_pay: Decimal,
    /// `hourly_rate × overtime multiplier`.
    pub overtime_rate: Decimal,
    /// `overtime_hours × overtime_rate`.
    pub overtime_pay: Decimal,
    /// Gross pay, `regular_pay + overtime_pay`.
    pub total_pay: Decimal,
    /// Flat-rate tax estimate on `total_pay`.
    pub taxes: Decimal,
    /// Other deductions set before the record is processed.
    pub deductions: Decimal,
    /// `total_pay − taxes − deductions`.
    pub net_pay: Decimal,
    pub(crate) status: PayrollStatus,
    /// When the record was calculated.
    pub created_at: DateTime<Utc>,
    /// When the record was processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,
    /// When the record was paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    /// When the record was cancelled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl PayrollRecord {
    /// Returns the current lifecycle status.
    pub fn status(&self) -> PayrollStatus {
        self.status
    }

    /// Replaces the deductions and recomputes net pay.
    ///
    /// Only allowed while the record is pending.
    pub fn set_deductions(&mut self, deductions: Decimal) -> PayrollResult<()> {
        if self.status != PayrollStatus::Pending {
            return Err(self.transition_error("change deductions on"));
        }
        if deductions < Decimal::ZERO {
            return Err(PayrollError::missing_field(
                "deductions",
                "deductions must not be negative",
            ));
        }
        let net_pay = self
            .total_pay
            .checked_sub(self.taxes)
            .and_then(|net| net.checked_sub(deductions))
            .ok_or_else(|| {
                PayrollError::missing_field(
                    "deductions",
                    "net pay exceeds the representable decimal range",
                )
            })?;
        self.deductions = deductions;
        self.net_pay = net_pay;
        Ok(())
    }

    /// Approves a pending record for payment.
    pub fn process(&mut self) -> PayrollResult<()> {
        if self.status != PayrollStatus::Pending {
            return Err(self.transition_error("process"));
        }
        self.status = PayrollStatus::Processed;
        self.processed_at = Some(Utc::now());
        Ok(())
    }

    /// Marks a pending or processed record as paid.
    pub fn mark_as_paid(&mut self) -> PayrollResult<()> {
        if !matches!(
            self.status,
            PayrollStatus::Pending | PayrollStatus::Processed
        ) {
            return Err(self.transition_error("mark as paid"));
        }
        self.status = PayrollStatus::Paid;
        self.paid_at = Some(Utc::now());
        Ok(())
    }

    /// Withdraws a record that has not been paid.
    pub fn cancel(&mut self) -> PayrollResult<()> {
        if !matches!(
            self.status,
            PayrollStatus::Pending | PayrollStatus::Processed
        ) {
            return Err(self.transition_error("cancel"));
        }
        self.status = PayrollStatus::Cancelled;
        self.cancelled_at = Some(Utc::now());
        Ok(())
    }

    fn transition_error(&self, action: &str) -> PayrollError {
        PayrollError::InvalidPayrollState {
            record_id: self.id.to_string(),
            action: action.to_string(),
            status: self.status.to_string(),
        }
    }
}
