//! Payroll aggregation.
//!
//! This module turns a list of shifts into a [`PayrollRecord`]: each shift's
//! duration is split into regular and overtime hours, the hours are summed,
//! and pay, tax and net pay are derived from the totals.
//!
//! Aggregation is all-or-nothing. If any shift cannot be measured the whole
//! batch fails with an error naming that shift; no partial record is built.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollRules;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayPeriod, PayrollRecord, PayrollStatus, Shift, ShiftStatus};

use super::duration::compute_duration;
use super::overtime::split_overtime;

/// Default multiplier applied to the hourly rate for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default flat tax rate applied to gross pay.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

fn pay_overflow() -> PayrollError {
    PayrollError::missing_field(
        "hourly_rate",
        "pay exceeds the representable decimal range",
    )
}

fn hours_overflow(shift_id: &str) -> PayrollError {
    PayrollError::InvalidShift {
        shift_id: shift_id.to_string(),
        message: "accumulated hours exceed the representable decimal range".to_string(),
    }
}

/// Selects the shifts that belong on an employee's payroll for a period.
///
/// A shift is payable when it belongs to the employee, its date falls inside
/// the period (inclusive), and it has been completed.
pub fn select_payable_shifts<'a>(
    shifts: &'a [Shift],
    employee_id: &str,
    pay_period: &PayPeriod,
) -> Vec<&'a Shift> {
    shifts
        .iter()
        .filter(|shift| {
            shift.employee_id == employee_id
                && pay_period.contains_date(shift.date)
                && shift.status == ShiftStatus::Completed
        })
        .collect()
}

/// Aggregates shifts into a payroll record.
///
/// The shifts are taken as given: the caller is expected to have filtered
/// them to the employee, the period and completed status (see
/// [`select_payable_shifts`]). The same `hourly_rate` is applied to every
/// shift. Calling this twice with the same input yields the same totals; only
/// the record id and creation time differ.
///
/// # Arguments
///
/// * `employee_id` - The employee being paid
/// * `hourly_rate` - The employee's current rate
/// * `shifts` - The shifts to aggregate
/// * `pay_period` - The period the record covers
/// * `rules` - Overtime threshold, overtime multiplier and tax rate
///
/// # Errors
///
/// - [`PayrollError::MissingField`] for a blank employee id, a negative rate,
///   a pay period that ends before it starts, or pay too large to represent
/// - [`PayrollError::ShiftCalculation`] naming the first shift whose duration
///   could not be computed
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::calculate_from_shifts;
/// use shift_payroll::config::PayrollRules;
/// use shift_payroll::models::{PayPeriod, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
/// let rate = Decimal::new(15, 0);
/// let shifts = vec![Shift::new("shift_001", "emp_001", date, "08:00", "18:00", rate)];
/// let period = PayPeriod::new(date, date);
///
/// let record =
///     calculate_from_shifts("emp_001", rate, &shifts, &period, &PayrollRules::default()).unwrap();
///
/// assert_eq!(record.regular_hours, Decimal::from(8));
/// assert_eq!(record.overtime_hours, Decimal::from(2));
/// assert_eq!(record.regular_pay, Decimal::from(120));
/// assert_eq!(record.overtime_pay, Decimal::from(45));
/// assert_eq!(record.total_pay, Decimal::from(165));
/// assert_eq!(record.taxes, Decimal::from_str("24.75").unwrap());
/// assert_eq!(record.net_pay, Decimal::from_str("140.25").unwrap());
/// ```
pub fn calculate_from_shifts<'a, I>(
    employee_id: &str,
    hourly_rate: Decimal,
    shifts: I,
    pay_period: &PayPeriod,
    rules: &PayrollRules,
) -> PayrollResult<PayrollRecord>
where
    I: IntoIterator<Item = &'a Shift>,
{
    if employee_id.trim().is_empty() {
        return Err(PayrollError::missing_field(
            "employee_id",
            "employee id must not be empty",
        ));
    }
    if hourly_rate < Decimal::ZERO {
        return Err(PayrollError::missing_field(
            "hourly_rate",
            "hourly rate must not be negative",
        ));
    }
    pay_period.validate()?;

    let mut shift_count = 0;
    let mut regular_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;

    for shift in shifts {
        let worked_hours = compute_duration(shift).map_err(|source| {
            debug!(shift_id = %shift.id, error = %source, "Aborting payroll batch");
            PayrollError::ShiftCalculation {
                shift_id: shift.id.clone(),
                source: Box::new(source),
            }
        })?;

        // Threshold is applied per shift, never per calendar day.
        let split = split_overtime(worked_hours, rules.overtime_threshold_hours);
        shift_count += 1;
        regular_hours = regular_hours
            .checked_add(split.regular_hours)
            .ok_or_else(|| hours_overflow(&shift.id))?;
        overtime_hours = overtime_hours
            .checked_add(split.overtime_hours)
            .ok_or_else(|| hours_overflow(&shift.id))?;
    }

    // Summed from the parts so the partition holds exactly.
    let total_hours = regular_hours
        .checked_add(overtime_hours)
        .ok_or_else(pay_overflow)?;
    let regular_pay = regular_hours
        .checked_mul(hourly_rate)
        .ok_or_else(pay_overflow)?;
    let overtime_rate = hourly_rate
        .checked_mul(rules.overtime_multiplier)
        .ok_or_else(pay_overflow)?;
    let overtime_pay = overtime_hours
        .checked_mul(overtime_rate)
        .ok_or_else(pay_overflow)?;
    let total_pay = regular_pay
        .checked_add(overtime_pay)
        .ok_or_else(pay_overflow)?;
    let taxes = total_pay.checked_mul(rules.tax_rate).ok_or_else(pay_overflow)?;
    let deductions = Decimal::ZERO;
    let net_pay = total_pay.checked_sub(taxes).ok_or_else(pay_overflow)?;

    Ok(PayrollRecord {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        employee_name: None,
        pay_period_start: pay_period.start_date,
        pay_period_end: pay_period.end_date,
        hourly_rate,
        shift_count,
        total_hours,
        regular_hours,
        overtime_hours,
        regular_pay,
        overtime_rate,
        overtime_pay,
        total_pay,
        taxes,
        deductions,
        net_pay,
        status: PayrollStatus::Pending,
        created_at: Utc::now(),
        processed_at: None,
        paid_at: None,
        cancelled_at: None,
    })
}

/// Builds the payroll record for an employee from an unfiltered shift list.
///
/// Combines [`select_payable_shifts`] and [`calculate_from_shifts`], using the
/// employee's current rate and stamping the employee's name on the record.
/// Employees no longer on the roster are refused.
pub fn calculate_for_period(
    employee: &Employee,
    shifts: &[Shift],
    pay_period: &PayPeriod,
    rules: &PayrollRules,
) -> PayrollResult<PayrollRecord> {
    employee.validate()?;
    if !employee.active {
        return Err(PayrollError::missing_field(
            "active",
            format!("employee '{}' is inactive", employee.id),
        ));
    }

    let payable = select_payable_shifts(shifts, &employee.id, pay_period);
    let mut record = calculate_from_shifts(
        &employee.id,
        employee.hourly_rate,
        payable,
        pay_period,
        rules,
    )?;
    record.employee_name = employee.name.clone();
    Ok(record)
}
