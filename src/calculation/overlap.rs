//! Shift overlap and conflict detection.
//!
//! Two shifts overlap only when they belong to the same employee, fall on the
//! same date, and their scheduled `[start, end)` intervals intersect. A shift
//! that ends exactly when another begins does not overlap it. Shifts for
//! different employees never conflict, even at the same time.

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Shift, ShiftConflict};

use super::duration::scheduled_interval;

/// Length of the intersection of two half-open intervals, if any.
fn intersection((a_start, a_end): (u32, u32), (b_start, b_end): (u32, u32)) -> Option<u32> {
    if a_start < b_end && a_end > b_start {
        Some(a_end.min(b_end) - a_start.max(b_start))
    } else {
        None
    }
}

fn same_slot(a: &Shift, b: &Shift) -> bool {
    a.date == b.date && a.employee_id == b.employee_id
}

/// Returns how many minutes two shifts overlap, or `None` if they do not.
///
/// Returns `None` without parsing any times when the shifts are for different
/// employees or dates.
pub fn overlap_minutes(a: &Shift, b: &Shift) -> PayrollResult<Option<u32>> {
    if !same_slot(a, b) {
        return Ok(None);
    }
    Ok(intersection(scheduled_interval(a)?, scheduled_interval(b)?))
}

/// Returns true if two shifts overlap.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::overlaps_with;
/// use shift_payroll::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 20).unwrap();
/// let a = Shift::new("a", "1", date, "09:00", "17:00", Decimal::new(15, 0));
/// let b = Shift::new("b", "1", date, "16:00", "20:00", Decimal::new(15, 0));
/// let c = Shift::new("c", "1", date, "17:00", "20:00", Decimal::new(15, 0));
///
/// assert!(overlaps_with(&a, &b).unwrap());
/// assert!(!overlaps_with(&a, &c).unwrap()); // back-to-back
/// ```
pub fn overlaps_with(a: &Shift, b: &Shift) -> PayrollResult<bool> {
    Ok(overlap_minutes(a, b)?.is_some())
}

fn conflict(
    a: &Shift,
    b: &Shift,
    a_interval: (u32, u32),
    b_interval: (u32, u32),
) -> ShiftConflict {
    let minutes = a_interval.1.min(b_interval.1) - a_interval.0.max(b_interval.0);
    let a_span = format!("{}-{}", a.start_time.trim(), a.end_time.trim());
    let b_span = format!("{}-{}", b.start_time.trim(), b.end_time.trim());

    // A zero-length shift strictly inside another still overlaps it under
    // half-open intervals, but shares no minutes with it.
    let reason = if minutes > 0 {
        format!("{} overlaps {} by {} minutes", a_span, b_span, minutes)
    } else if a_interval.0 == a_interval.1 {
        format!("zero-length shift at {} falls within {}", a.start_time.trim(), b_span)
    } else {
        format!("zero-length shift at {} falls within {}", b.start_time.trim(), a_span)
    };

    ShiftConflict {
        shift_id_a: a.id.clone(),
        shift_id_b: b.id.clone(),
        employee_id: a.employee_id.clone(),
        date: a.date,
        overlap_minutes: minutes,
        reason,
    }
}

fn parse_active(shifts: &[Shift]) -> PayrollResult<Vec<(&Shift, (u32, u32))>> {
    shifts
        .iter()
        .filter(|shift| shift.status.occupies_schedule())
        .map(|shift| {
            scheduled_interval(shift)
                .map(|interval| (shift, interval))
                .map_err(|source| PayrollError::ShiftCalculation {
                    shift_id: shift.id.clone(),
                    source: Box::new(source),
                })
        })
        .collect()
}

/// Finds every pair of conflicting shifts in a list.
///
/// Cancelled and no-show shifts are ignored. Pairs are reported in input
/// order (`shift_id_a` precedes `shift_id_b`). A malformed shift aborts the
/// whole check with an error naming that shift.
pub fn find_conflicts(shifts: &[Shift]) -> PayrollResult<Vec<ShiftConflict>> {
    let active = parse_active(shifts)?;
    let mut conflicts = Vec::new();

    for (i, (a, a_interval)) in active.iter().enumerate() {
        for (b, b_interval) in &active[i + 1..] {
            if !same_slot(a, b) {
                continue;
            }
            if intersection(*a_interval, *b_interval).is_some() {
                conflicts.push(conflict(a, b, *a_interval, *b_interval));
            }
        }
    }

    debug!(
        shifts_count = shifts.len(),
        conflicts_count = conflicts.len(),
        "Conflict check completed"
    );
    Ok(conflicts)
}

/// Finds the existing shifts a candidate shift would clash with.
///
/// An existing shift with the candidate's id is treated as the candidate's
/// previous version and skipped. A cancelled candidate never conflicts.
pub fn check_new_shift(candidate: &Shift, existing: &[Shift]) -> PayrollResult<Vec<ShiftConflict>> {
    if !candidate.status.occupies_schedule() {
        return Ok(Vec::new());
    }

    let candidate_interval =
        scheduled_interval(candidate).map_err(|source| PayrollError::ShiftCalculation {
            shift_id: candidate.id.clone(),
            source: Box::new(source),
        })?;

    let mut conflicts = Vec::new();
    for (other, other_interval) in parse_active(existing)? {
        if other.id == candidate.id || !same_slot(candidate, other) {
            continue;
        }
        if intersection(candidate_interval, other_interval).is_some() {
            conflicts.push(conflict(candidate, other, candidate_interval, other_interval));
        }
    }
    Ok(conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_shift(id: &str, employee_id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift::new(
            id,
            employee_id,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start,
            end,
            Decimal::new(15, 0),
        )
    }

    #[test]
    fn test_partial_overlap() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "1", "2025-01-20", "16:00", "20:00");
        assert!(overlaps_with(&a, &b).unwrap());
        assert!(overlaps_with(&b, &a).unwrap());
        assert_eq!(overlap_minutes(&a, &b).unwrap(), Some(60));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let c = make_shift("c", "1", "2025-01-20", "17:00", "20:00");
        assert!(!overlaps_with(&a, &c).unwrap());
        assert!(!overlaps_with(&c, &a).unwrap());
    }

    #[test]
    fn test_contained_shift_overlaps() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "1", "2025-01-20", "12:00", "13:00");
        assert_eq!(overlap_minutes(&a, &b).unwrap(), Some(60));
    }

    #[test]
    fn test_different_employee_never_overlaps() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "2", "2025-01-20", "09:00", "17:00");
        assert!(!overlaps_with(&a, &b).unwrap());
    }

    #[test]
    fn test_different_date_never_overlaps() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "1", "2025-01-21", "09:00", "17:00");
        assert!(!overlaps_with(&a, &b).unwrap());
    }

    #[test]
    fn test_different_slot_skips_parsing() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "2", "2025-01-20", "bad", "17:00");
        assert!(!overlaps_with(&a, &b).unwrap());
    }

    #[test]
    fn test_overlap_uses_scheduled_times() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let mut b = make_shift("b", "1", "2025-01-20", "17:00", "20:00");
        b.actual_start_time = Some("16:30".to_string());
        b.actual_end_time = Some("20:00".to_string());
        assert!(!overlaps_with(&a, &b).unwrap());
    }

    #[test]
    fn test_overlap_ignores_hourly_rate() {
        let mut a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        a.hourly_rate = Decimal::new(-1, 0);
        let b = make_shift("b", "1", "2025-01-20", "10:00", "12:00");
        assert!(overlaps_with(&a, &b).unwrap());
        assert_eq!(find_conflicts(&[a, b]).unwrap().len(), 1);
    }

    #[test]
    fn test_zero_length_shift_inside_another() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "1", "2025-01-20", "12:00", "12:00");
        assert_eq!(overlap_minutes(&a, &b).unwrap(), Some(0));

        let conflicts = find_conflicts(&[a, b]).unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].overlap_minutes, 0);
        assert_eq!(
            conflicts[0].reason,
            "zero-length shift at 12:00 falls within 09:00-17:00"
        );
    }

    #[test]
    fn test_malformed_time_is_reported() {
        let a = make_shift("a", "1", "2025-01-20", "09:00", "17:00");
        let b = make_shift("b", "1", "2025-01-20", "4pm", "20:00");
        assert_eq!(overlaps_with(&a, &b).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_find_conflicts_reports_pairs_in_order() {
        let shifts = vec![
            make_shift("a", "1", "2025-01-20", "09:00", "17:00"),
            make_shift("b", "2", "2025-01-20", "09:00", "17:00"),
            make_shift("c", "1", "2025-01-20", "16:00", "20:00"),
            make_shift("d", "1", "2025-01-20", "17:00", "21:00"),
        ];

        let conflicts = find_conflicts(&shifts).unwrap();
        assert_eq!(conflicts.len(), 2);

        assert_eq!(conflicts[0].shift_id_a, "a");
        assert_eq!(conflicts[0].shift_id_b, "c");
        assert_eq!(conflicts[0].overlap_minutes, 60);
        assert_eq!(conflicts[0].employee_id, "1");
        assert!(conflicts[0].reason.contains("by 60 minutes"));

        assert_eq!(conflicts[1].shift_id_a, "c");
        assert_eq!(conflicts[1].shift_id_b, "d");
        assert_eq!(conflicts[1].overlap_minutes, 180);
    }

    #[test]
    fn test_find_conflicts_ignores_cancelled_shifts() {
        let mut cancelled = make_shift("b", "1", "2025-01-20", "10:00", "12:00");
        cancelled.cancel();
        let shifts = vec![make_shift("a", "1", "2025-01-20", "09:00", "17:00"), cancelled];
        assert!(find_conflicts(&shifts).unwrap().is_empty());
    }

    #[test]
    fn test_find_conflicts_empty_input() {
        assert!(find_conflicts(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_find_conflicts_aborts_on_malformed_shift() {
        let shifts = vec![
            make_shift("a", "1", "2025-01-20", "09:00", "17:00"),
            make_shift("b", "3", "2025-01-22", "09:00", "x"),
        ];
        let err = find_conflicts(&shifts).unwrap_err();
        match err {
            PayrollError::ShiftCalculation { shift_id, .. } => assert_eq!(shift_id, "b"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_check_new_shift_against_roster() {
        let existing = vec![
            make_shift("a", "1", "2025-01-20", "09:00", "13:00"),
            make_shift("b", "1", "2025-01-20", "14:00", "18:00"),
            make_shift("c", "1", "2025-01-21", "09:00", "17:00"),
        ];
        let candidate = make_shift("new", "1", "2025-01-20", "12:00", "15:00");

        let conflicts = check_new_shift(&candidate, &existing).unwrap();
        let ids: Vec<&str> = conflicts.iter().map(|c| c.shift_id_b.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(conflicts.iter().all(|c| c.shift_id_a == "new"));
    }

    #[test]
    fn test_check_new_shift_skips_its_previous_version() {
        let existing = vec![make_shift("a", "1", "2025-01-20", "09:00", "13:00")];
        let edited = make_shift("a", "1", "2025-01-20", "10:00", "14:00");
        assert!(check_new_shift(&edited, &existing).unwrap().is_empty());
    }

    #[test]
    fn test_check_new_shift_rejects_malformed_candidate() {
        let candidate = make_shift("new", "1", "2025-01-20", "12:00", "noon");
        let err = check_new_shift(&candidate, &[]).unwrap_err();
        assert!(err.to_string().contains("'new'"));
    }
}
