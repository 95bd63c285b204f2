//! HTTP API module for the shift payroll engine.
//!
//! This module provides the REST endpoints for payroll calculation, shift
//! conflict checks and shift duration queries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ConflictRequest, DurationRequest, EmployeeRequest, PayPeriodRequest, PayrollRequest,
    ShiftRequest,
};
pub use response::{ApiError, ConflictResponse, DurationResponse};
pub use state::AppState;
