//! Shift payroll engine for staff scheduling.
//!
//! This crate computes shift durations from `HH:MM` times, apportions each
//! shift's hours into regular and overtime portions, detects overlapping
//! shifts for the same employee, and aggregates shifts into payroll records.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
