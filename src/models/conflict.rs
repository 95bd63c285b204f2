//! Shift conflict model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Two shifts for the same employee on the same date whose times intersect.
///
/// Conflicts are computed on demand by
/// [`crate::calculation::find_conflicts`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConflict {
    /// The earlier shift in input order.
    pub shift_id_a: String,
    /// The later shift in input order.
    pub shift_id_b: String,
    /// The employee double-booked.
    pub employee_id: String,
    /// The date both shifts fall on.
    pub date: NaiveDate,
    /// Length of the intersection.
    pub overlap_minutes: u32,
    /// Human-readable description of the clash.
    pub reason: String,
}
