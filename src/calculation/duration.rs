//! Shift duration calculation.
//!
//! This module parses `"HH:MM"` time-of-day strings and derives a shift's
//! duration in hours, preferring recorded attendance times over the schedule.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Shift;

const MINUTES_PER_HOUR: u32 = 60;

/// Parses a 24-hour `"HH:MM"` string into minutes since midnight.
///
/// The hour may be one or two digits; the minute must be exactly two.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::parse_time_of_day;
///
/// assert_eq!(parse_time_of_day("09:30").unwrap(), 570);
/// assert_eq!(parse_time_of_day("7:05").unwrap(), 425);
/// assert!(parse_time_of_day("0930").is_err());
/// assert!(parse_time_of_day("24:00").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> PayrollResult<u32> {
    let invalid = |message: &str| PayrollError::InvalidTimeFormat {
        value: value.to_string(),
        message: message.to_string(),
    };

    let (hours, minutes) = value
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("expected HH:MM, missing ':' separator"))?;

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(hours) || hours.len() > 2 {
        return Err(invalid("hour must be one or two digits"));
    }
    if !is_digits(minutes) || minutes.len() != 2 {
        return Err(invalid("minute must be two digits"));
    }

    let hours: u32 = hours.parse().map_err(|_| invalid("hour is not a number"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| invalid("minute is not a number"))?;

    if hours > 23 {
        return Err(invalid("hour must be between 0 and 23"));
    }
    if minutes > 59 {
        return Err(invalid("minute must be between 0 and 59"));
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Returns the scheduled `[start, end)` interval of a shift in minutes since midnight.
///
/// Fails if the employee or a scheduled time is missing, a time is malformed,
/// or the end is before the start (overnight shifts are not supported). The
/// hourly rate plays no part in placing a shift, so it is not checked.
pub fn scheduled_interval(shift: &Shift) -> PayrollResult<(u32, u32)> {
    shift.validate_schedule()?;
    interval(shift, &shift.start_time, &shift.end_time)
}

fn interval(shift: &Shift, start: &str, end: &str) -> PayrollResult<(u32, u32)> {
    let start_minutes = parse_time_of_day(start)?;
    let end_minutes = parse_time_of_day(end)?;

    if end_minutes < start_minutes {
        return Err(PayrollError::InvalidShift {
            shift_id: shift.id.clone(),
            message: format!("ends at {} before it starts at {}", end.trim(), start.trim()),
        });
    }

    Ok((start_minutes, end_minutes))
}

/// Calculates the duration of a shift in hours.
///
/// When both actual attendance times are recorded they take precedence over
/// the scheduled times. The result is never negative.
///
/// # Errors
///
/// - [`PayrollError::MissingField`] if the shift fails [`Shift::validate`]
/// - [`PayrollError::InvalidTimeFormat`] if a time string cannot be parsed
/// - [`PayrollError::InvalidShift`] if the end precedes the start
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::compute_duration;
/// use shift_payroll::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut shift = Shift::new(
///     "shift_001",
///     "emp_001",
///     NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
///     "09:00",
///     "19:30",
///     Decimal::new(15, 0),
/// );
/// assert_eq!(compute_duration(&shift).unwrap(), Decimal::new(105, 1)); // 10.5 hours
///
/// shift.actual_start_time = Some("09:00".to_string());
/// shift.actual_end_time = Some("17:00".to_string());
/// assert_eq!(compute_duration(&shift).unwrap(), Decimal::new(8, 0));
/// ```
pub fn compute_duration(shift: &Shift) -> PayrollResult<Decimal> {
    shift.validate()?;

    let (start, end) = shift
        .actual_times()
        .unwrap_or((shift.start_time.as_str(), shift.end_time.as_str()));
    let (start_minutes, end_minutes) = interval(shift, start, end)?;

    Ok(Decimal::from(end_minutes - start_minutes) / Decimal::from(MINUTES_PER_HOUR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(start: &str, end: &str) -> Shift {
        Shift::new(
            "shift_001",
            "emp_001",
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            start,
            end,
            dec("15"),
        )
    }

    #[test]
    fn test_parse_time_of_day_bounds() {
        assert_eq!(parse_time_of_day("00:00").unwrap(), 0);
        assert_eq!(parse_time_of_day("23:59").unwrap(), 1439);
        assert_eq!(parse_time_of_day(" 17:00 ").unwrap(), 1020);
    }

    #[test]
    fn test_parse_time_of_day_rejects_malformed() {
        for value in ["", "0900", "9am", "ab:cd", "09:5", "09:000", "123:00", "-1:00", "09:00:00"] {
            let err = parse_time_of_day(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "value {:?}", value);
        }
    }

    #[test]
    fn test_parse_time_of_day_rejects_out_of_range() {
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("12:60").is_err());
    }

    #[test]
    fn test_8_hour_shift() {
        let shift = make_shift("09:00", "17:00");
        assert_eq!(compute_duration(&shift).unwrap(), dec("8"));
    }

    #[test]
    fn test_10_5_hour_shift() {
        let shift = make_shift("09:00", "19:30");
        assert_eq!(compute_duration(&shift).unwrap(), dec("10.5"));
    }

    #[test]
    fn test_zero_duration_shift() {
        let shift = make_shift("09:00", "09:00");
        assert_eq!(compute_duration(&shift).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_quarter_hour_shift() {
        let shift = make_shift("08:45", "12:00");
        assert_eq!(compute_duration(&shift).unwrap(), dec("3.25"));
    }

    #[test]
    fn test_actual_times_take_precedence() {
        let mut shift = make_shift("09:00", "17:00");
        shift.actual_start_time = Some("08:30".to_string());
        shift.actual_end_time = Some("18:00".to_string());
        assert_eq!(compute_duration(&shift).unwrap(), dec("9.5"));
    }

    #[test]
    fn test_single_actual_time_is_ignored() {
        let mut shift = make_shift("09:00", "17:00");
        shift.actual_start_time = Some("06:00".to_string());
        assert_eq!(compute_duration(&shift).unwrap(), dec("8"));
    }

    #[test]
    fn test_malformed_time_is_format_error() {
        let shift = make_shift("nine", "17:00");
        let err = compute_duration(&shift).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_malformed_actual_time_is_format_error() {
        let mut shift = make_shift("09:00", "17:00");
        shift.actual_start_time = Some("09:00".to_string());
        shift.actual_end_time = Some("5pm".to_string());
        assert_eq!(compute_duration(&shift).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_missing_time_is_validation_error() {
        let shift = make_shift("", "17:00");
        let err = compute_duration(&shift).unwrap_err();
        assert!(matches!(err, PayrollError::MissingField { .. }));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let shift = make_shift("22:00", "06:00");
        let err = compute_duration(&shift).unwrap_err();
        assert!(matches!(err, PayrollError::InvalidShift { .. }));
        assert!(err.to_string().contains("shift_001"));
    }

    #[test]
    fn test_scheduled_interval_ignores_actual_times() {
        let mut shift = make_shift("09:00", "17:00");
        shift.actual_start_time = Some("10:00".to_string());
        shift.actual_end_time = Some("11:00".to_string());
        assert_eq!(scheduled_interval(&shift).unwrap(), (540, 1020));
    }
}
