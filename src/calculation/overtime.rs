//! Per-shift overtime detection.
//!
//! This module splits a shift's hours into a regular portion (up to the
//! overtime threshold) and an overtime portion (anything beyond it).
//!
//! The threshold applies to each shift on its own. Two shifts on the same day
//! are never combined, so two 5-hour shifts produce no overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::Shift;

use super::duration::compute_duration;

/// Default overtime threshold in hours per shift.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The split between regular and overtime hours for one shift.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::OvertimeSplit;
/// use rust_decimal::Decimal;
///
/// let split = OvertimeSplit {
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::new(2, 0),
/// };
/// assert_eq!(split.total_hours(), Decimal::new(10, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours exceeding the threshold (can be zero).
    pub overtime_hours: Decimal,
}

impl OvertimeSplit {
    /// Returns the hours the split was derived from.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Splits worked hours into regular and overtime portions.
///
/// # Examples
///
/// ## Shift exceeding threshold
///
/// ```
/// use shift_payroll::calculation::{split_overtime, DEFAULT_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worked = Decimal::from_str("10.0").unwrap();
/// let split = split_overtime(worked, DEFAULT_OVERTIME_THRESHOLD);
///
/// assert_eq!(split.regular_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::from_str("2.0").unwrap());
/// ```
///
/// ## Short shift (under threshold)
///
/// ```
/// use shift_payroll::calculation::{split_overtime, DEFAULT_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worked = Decimal::from_str("6.0").unwrap();
/// let split = split_overtime(worked, DEFAULT_OVERTIME_THRESHOLD);
///
/// assert_eq!(split.regular_hours, Decimal::from_str("6.0").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_overtime(worked_hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    if worked_hours > threshold {
        OvertimeSplit {
            regular_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    } else {
        OvertimeSplit {
            regular_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    }
}

/// Returns true if the shift runs longer than `threshold` hours.
///
/// Uses [`compute_duration`], so recorded attendance times take precedence.
pub fn has_overtime(shift: &Shift, threshold: Decimal) -> PayrollResult<bool> {
    Ok(compute_duration(shift)? > threshold)
}

/// Returns the hours the shift runs beyond `threshold`, or zero.
pub fn overtime_hours(shift: &Shift, threshold: Decimal) -> PayrollResult<Decimal> {
    Ok(split_overtime(compute_duration(shift)?, threshold).overtime_hours)
}
