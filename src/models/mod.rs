//! Core data models for the shift payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod conflict;
mod employee;
mod pay_period;
mod payroll_record;
mod shift;

pub use conflict::ShiftConflict;
pub use employee::Employee;
pub use pay_period::{PayFrequency, PayPeriod};
pub use payroll_record::{PayrollRecord, PayrollStatus};
pub use shift::{Shift, ShiftStatus};
