//! Pay period model and period slicing.
//!
//! This module contains the [`PayPeriod`] type used as the inclusive date
//! window for payroll aggregation, and [`PayFrequency`] for deriving the
//! period a given date belongs to.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// How often pay periods repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// Seven-day periods aligned on an anchor date.
    Weekly,
    /// Fourteen-day periods aligned on an anchor date.
    Biweekly,
    /// Calendar months.
    Monthly,
}

/// An inclusive date range over which shifts are aggregated.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2025, 1, 13).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 26).unwrap(),
/// );
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 13).unwrap())); // start date
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 26).unwrap())); // end date
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period from its inclusive bounds.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns the pay period of the given frequency that contains `date`.
    ///
    /// Weekly and biweekly periods start on `anchor` and repeat every 7 or 14
    /// days in both directions. Monthly periods ignore the anchor and span the
    /// calendar month.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_payroll::models::{PayFrequency, PayPeriod};
    /// use chrono::NaiveDate;
    ///
    /// let anchor = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
    ///
    /// let period = PayPeriod::containing(date, PayFrequency::Biweekly, anchor).unwrap();
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
    /// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 2, 2).unwrap());
    /// ```
    pub fn containing(
        date: NaiveDate,
        frequency: PayFrequency,
        anchor: NaiveDate,
    ) -> PayrollResult<Self> {
        let out_of_range = || {
            PayrollError::missing_field(
                "pay_period",
                format!("no {:?} period can be derived for {}", frequency, date),
            )
        };

        match frequency {
            PayFrequency::Weekly | PayFrequency::Biweekly => {
                let length: i64 = if frequency == PayFrequency::Weekly { 7 } else { 14 };
                let offset = (date - anchor).num_days();
                let index = offset.div_euclid(length);
                let start_date = anchor
                    .checked_add_signed(chrono::Duration::days(index * length))
                    .ok_or_else(out_of_range)?;
                let end_date = start_date
                    .checked_add_days(Days::new((length - 1) as u64))
                    .ok_or_else(out_of_range)?;
                Ok(Self::new(start_date, end_date))
            }
            PayFrequency::Monthly => {
                let start_date = date
                    .checked_sub_days(Days::new(date.day0() as u64))
                    .ok_or_else(out_of_range)?;
                let end_date = start_date
                    .checked_add_months(Months::new(1))
                    .and_then(|next| next.pred_opt())
                    .ok_or_else(out_of_range)?;
                Ok(Self::new(start_date, end_date))
            }
        }
    }

    /// Checks that the period does not end before it starts.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.end_date < self.start_date {
            return Err(PayrollError::missing_field(
                "pay_period",
                format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days covered, counting both bounds.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
