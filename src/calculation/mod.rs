//! Calculation logic for the shift payroll engine.
//!
//! This module contains the shift duration engine (time parsing, duration,
//! per-shift overtime), overlap and conflict detection between shifts, and
//! the payroll aggregator that turns shifts into a payroll record.

mod duration;
mod overlap;
mod overtime;
mod payroll;

pub use duration::{compute_duration, parse_time_of_day, scheduled_interval};
pub use overlap::{check_new_shift, find_conflicts, overlap_minutes, overlaps_with};
pub use overtime::{
    DEFAULT_OVERTIME_THRESHOLD, OvertimeSplit, has_overtime, overtime_hours, split_overtime,
};
pub use payroll::{
    DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_TAX_RATE, calculate_for_period, calculate_from_shifts,
    select_payable_shifts,
};
