//! Shift model and its attendance lifecycle.
//!
//! This module defines the [`Shift`] record and the [`ShiftStatus`] state
//! machine driven by attendance marking.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Format used when recording actual attendance times.
const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// The attendance status of a shift.
///
/// `Scheduled` is the initial state. `Completed`, `Cancelled` and `NoShow`
/// are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftStatus {
    /// Planned but not yet started.
    #[default]
    Scheduled,
    /// The employee has clocked in.
    InProgress,
    /// The employee has clocked out.
    Completed,
    /// The shift was called off.
    Cancelled,
    /// The employee never arrived.
    NoShow,
}

impl ShiftStatus {
    /// Returns true if no further transition can leave this status.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ShiftStatus::Completed | ShiftStatus::Cancelled | ShiftStatus::NoShow
        )
    }

    /// Returns true if a shift in this status still occupies the employee's time.
    pub fn occupies_schedule(self) -> bool {
        !matches!(self, ShiftStatus::Cancelled | ShiftStatus::NoShow)
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShiftStatus::Scheduled => "scheduled",
            ShiftStatus::InProgress => "in-progress",
            ShiftStatus::Completed => "completed",
            ShiftStatus::Cancelled => "cancelled",
            ShiftStatus::NoShow => "no-show",
        };
        f.write_str(name)
    }
}

/// A scheduled block of work for one employee on one date.
///
/// Times are kept as the `"HH:MM"` strings the scheduler supplies; they are
/// parsed when durations or overlaps are calculated, so a malformed value
/// surfaces as a [`PayrollError::InvalidTimeFormat`] at that point.
///
/// # Examples
///
/// ```
/// use shift_payroll::models::{Shift, ShiftStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(
///     "shift_001",
///     "emp_001",
///     NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     "09:00",
///     "17:00",
///     Decimal::new(15, 0),
/// );
/// assert_eq!(shift.status, ShiftStatus::Scheduled);
/// assert!(shift.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// Display name of the employee, resolved by the caller when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Scheduled start, `"HH:MM"`.
    pub start_time: String,
    /// Scheduled end, `"HH:MM"`, on the same day as the start.
    pub end_time: String,
    /// Recorded clock-in time, set once attendance is marked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_time: Option<String>,
    /// Recorded clock-out time, set once attendance is marked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_time: Option<String>,
    /// Hourly rate for the shift.
    pub hourly_rate: Decimal,
    /// Attendance status.
    #[serde(default)]
    pub status: ShiftStatus,
}

impl Shift {
    /// Creates a scheduled shift with no recorded attendance.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            employee_name: None,
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            actual_start_time: None,
            actual_end_time: None,
            hourly_rate,
            status: ShiftStatus::Scheduled,
        }
    }

    /// Checks that the fields needed for any calculation are present.
    ///
    /// This does not parse the time strings; see
    /// [`crate::calculation::parse_time_of_day`] for that.
    pub fn validate(&self) -> PayrollResult<()> {
        self.validate_schedule()?;
        if self.hourly_rate < Decimal::ZERO {
            return Err(PayrollError::missing_field(
                "hourly_rate",
                format!("shift '{}' has a negative hourly rate", self.id),
            ));
        }
        Ok(())
    }

    /// Checks only the fields that place the shift on the schedule: the
    /// employee and both scheduled times.
    pub fn validate_schedule(&self) -> PayrollResult<()> {
        if self.employee_id.trim().is_empty() {
            return Err(PayrollError::missing_field(
                "employee_id",
                format!("shift '{}' has no employee", self.id),
            ));
        }
        if self.start_time.trim().is_empty() {
            return Err(PayrollError::missing_field(
                "start_time",
                format!("shift '{}' has no start time", self.id),
            ));
        }
        if self.end_time.trim().is_empty() {
            return Err(PayrollError::missing_field(
                "end_time",
                format!("shift '{}' has no end time", self.id),
            ));
        }
        Ok(())
    }

    /// Returns true if the shift passes [`Shift::validate`].
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the recorded attendance times when both are present.
    ///
    /// Blank strings count as absent.
    pub fn actual_times(&self) -> Option<(&str, &str)> {
        let start = self.actual_start_time.as_deref().filter(|t| !t.trim().is_empty())?;
        let end = self.actual_end_time.as_deref().filter(|t| !t.trim().is_empty())?;
        Some((start, end))
    }

    /// Clocks the employee in at the current local time.
    pub fn start(&mut self) -> PayrollResult<()> {
        self.start_at(Local::now().time())
    }

    /// Clocks the employee in at `at`.
    ///
    /// Only a scheduled shift can be started.
    pub fn start_at(&mut self, at: NaiveTime) -> PayrollResult<()> {
        if self.status != ShiftStatus::Scheduled {
            return Err(self.transition_error("start"));
        }
        self.status = ShiftStatus::InProgress;
        self.actual_start_time = Some(at.format(TIME_OF_DAY_FORMAT).to_string());
        Ok(())
    }

    /// Clocks the employee out at the current local time.
    pub fn end(&mut self) -> PayrollResult<()> {
        self.end_at(Local::now().time())
    }

    /// Clocks the employee out at `at`.
    ///
    /// Only an in-progress shift can be ended.
    pub fn end_at(&mut self, at: NaiveTime) -> PayrollResult<()> {
        if self.status != ShiftStatus::InProgress {
            return Err(self.transition_error("end"));
        }
        self.status = ShiftStatus::Completed;
        self.actual_end_time = Some(at.format(TIME_OF_DAY_FORMAT).to_string());
        Ok(())
    }

    /// Cancels the shift. Allowed from every status.
    pub fn cancel(&mut self) {
        self.status = ShiftStatus::Cancelled;
    }

    /// Records that the employee never arrived for a scheduled shift.
    pub fn mark_no_show(&mut self) -> PayrollResult<()> {
        if self.status != ShiftStatus::Scheduled {
            return Err(self.transition_error("mark as no-show"));
        }
        self.status = ShiftStatus::NoShow;
        Ok(())
    }

    fn transition_error(&self, action: &str) -> PayrollError {
        PayrollError::InvalidShiftState {
            shift_id: self.id.clone(),
            action: action.to_string(),
            status: self.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn create_test_shift() -> Shift {
        Shift::new(
            "shift_001",
            "emp_001",
            make_date("2025-01-20"),
            "09:00",
            "17:00",
            Decimal::new(15, 0),
        )
    }

    #[test]
    fn test_new_shift_is_scheduled() {
        let shift = create_test_shift();
        assert_eq!(shift.status, ShiftStatus::Scheduled);
        assert!(shift.actual_start_time.is_none());
        assert!(shift.actual_end_time.is_none());
        assert!(shift.employee_name.is_none());
    }

    #[test]
    fn test_validate_rejects_missing_employee() {
        let mut shift = create_test_shift();
        shift.employee_id = " ".to_string();
        let err = shift.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("employee_id"));
        assert!(!shift.is_valid());
    }

    #[test]
    fn test_validate_rejects_missing_times() {
        let mut shift = create_test_shift();
        shift.start_time = String::new();
        assert!(shift.validate().unwrap_err().to_string().contains("start_time"));

        let mut shift = create_test_shift();
        shift.end_time = String::new();
        assert!(shift.validate().unwrap_err().to_string().contains("end_time"));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut shift = create_test_shift();
        shift.hourly_rate = Decimal::new(-1, 0);
        assert!(shift.validate().unwrap_err().to_string().contains("hourly_rate"));
    }

    #[test]
    fn test_validate_schedule_ignores_rate() {
        let mut shift = create_test_shift();
        shift.hourly_rate = Decimal::new(-1, 0);
        assert!(shift.validate_schedule().is_ok());
        assert!(!shift.is_valid());
    }

    #[test]
    fn test_actual_times_require_both_values() {
        let mut shift = create_test_shift();
        shift.actual_start_time = Some("09:05".to_string());
        assert_eq!(shift.actual_times(), None);

        shift.actual_end_time = Some(String::new());
        assert_eq!(shift.actual_times(), None);

        shift.actual_end_time = Some("17:10".to_string());
        assert_eq!(shift.actual_times(), Some(("09:05", "17:10")));
    }

    #[test]
    fn test_full_attendance_lifecycle() {
        let mut shift = create_test_shift();

        shift.start_at(make_time("09:02")).unwrap();
        assert_eq!(shift.status, ShiftStatus::InProgress);
        assert_eq!(shift.actual_start_time.as_deref(), Some("09:02"));

        shift.end_at(make_time("17:31")).unwrap();
        assert_eq!(shift.status, ShiftStatus::Completed);
        assert_eq!(shift.actual_end_time.as_deref(), Some("17:31"));
    }

    #[test]
    fn test_start_on_completed_shift_fails() {
        let mut shift = create_test_shift();
        shift.status = ShiftStatus::Completed;

        let err = shift.start_at(make_time("09:00")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err.to_string(),
            "Cannot start shift 'shift_001' while it is completed"
        );
        assert_eq!(shift.status, ShiftStatus::Completed);
        assert!(shift.actual_start_time.is_none());
    }

    #[test]
    fn test_start_twice_fails() {
        let mut shift = create_test_shift();
        shift.start().unwrap();
        assert!(shift.start().is_err());
    }

    #[test]
    fn test_end_requires_in_progress() {
        let mut shift = create_test_shift();
        let err = shift.end_at(make_time("17:00")).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidShiftState { .. }));
        assert_eq!(shift.status, ShiftStatus::Scheduled);
    }

    #[test]
    fn test_cancel_succeeds_from_every_status() {
        for status in [
            ShiftStatus::Scheduled,
            ShiftStatus::InProgress,
            ShiftStatus::Completed,
            ShiftStatus::Cancelled,
            ShiftStatus::NoShow,
        ] {
            let mut shift = create_test_shift();
            shift.status = status;
            shift.cancel();
            assert_eq!(shift.status, ShiftStatus::Cancelled);
        }
    }

    #[test]
    fn test_no_transition_leaves_cancelled() {
        let mut shift = create_test_shift();
        shift.cancel();
        assert!(shift.start_at(make_time("09:00")).is_err());
        assert!(shift.end_at(make_time("17:00")).is_err());
        assert!(shift.mark_no_show().is_err());
    }

    #[test]
    fn test_mark_no_show_only_from_scheduled() {
        let mut shift = create_test_shift();
        shift.mark_no_show().unwrap();
        assert_eq!(shift.status, ShiftStatus::NoShow);
        assert!(shift.status.is_terminal());
        assert!(!shift.status.occupies_schedule());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&ShiftStatus::NoShow).unwrap(),
            "\"no-show\""
        );
        assert_eq!(ShiftStatus::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn test_shift_deserialization_defaults() {
        let json = r#"{
            "id": "shift_001",
            "employee_id": "emp_001",
            "date": "2025-01-20",
            "start_time": "09:00",
            "end_time": "17:00",
            "hourly_rate": "15.00"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.status, ShiftStatus::Scheduled);
        assert_eq!(shift.hourly_rate, Decimal::new(1500, 2));
        assert!(shift.employee_name.is_none());
        assert!(shift.actual_times().is_none());
    }

    #[test]
    fn test_shift_serialization_skips_absent_optionals() {
        let shift = create_test_shift();
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"status\":\"scheduled\""));
        assert!(!json.contains("actual_start_time"));
        assert!(!json.contains("employee_name"));
    }
}
