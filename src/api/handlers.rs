//! HTTP request handlers for the shift payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_for_period, check_new_shift, compute_duration, find_conflicts, split_overtime,
};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayPeriod, PayrollRecord, Shift};

use super::request::{ConflictRequest, DurationRequest, PayrollRequest};
use super::response::{ApiError, ApiErrorResponse, ConflictResponse, DurationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/payroll/calculate", post(payroll_handler))
        .route("/shifts/conflicts", post(conflicts_handler))
        .route("/shifts/duration", post(duration_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Handler for POST /payroll/calculate endpoint.
///
/// Accepts an employee, a pay period and candidate shifts and returns the
/// pending payroll record for that period.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_payroll(request, &state) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                shifts_count = record.shift_count,
                total_pay = %record.total_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll calculated"
            );
            json_response(StatusCode::OK, &record)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /shifts/conflicts endpoint.
///
/// With a `candidate`, returns only the candidate's conflicts against the
/// given shifts; otherwise every conflicting pair among the shifts.
async fn conflicts_handler(payload: Result<Json<ConflictRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing conflict check");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shifts: Vec<Shift> = request.shifts.into_iter().map(Into::into).collect();
    let result = match request.candidate {
        Some(candidate) => check_new_shift(&candidate.into(), &shifts),
        None => find_conflicts(&shifts),
    };

    match result {
        Ok(conflicts) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = shifts.len(),
                conflicts_count = conflicts.len(),
                "Conflict check completed"
            );
            json_response(StatusCode::OK, &ConflictResponse { conflicts })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /shifts/duration endpoint.
async fn duration_handler(
    State(state): State<AppState>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let shift: Shift = match payload {
        Ok(Json(req)) => req.shift.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match compute_duration(&shift) {
        Ok(hours) => {
            let split = split_overtime(hours, state.rules().overtime_threshold_hours);
            info!(
                correlation_id = %correlation_id,
                shift_id = %shift.id,
                hours = %hours,
                "Shift duration computed"
            );
            let response = DurationResponse {
                shift_id: shift.id,
                hours,
                regular_hours: split.regular_hours,
                overtime_hours: split.overtime_hours,
                has_overtime: split.overtime_hours > Decimal::ZERO,
            };
            json_response(StatusCode::OK, &response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Resolves the pay period and builds the payroll record for a request.
fn perform_payroll(request: PayrollRequest, state: &AppState) -> PayrollResult<PayrollRecord> {
    let pay_period =
        state.pay_period(request.pay_period.map(PayPeriod::from), request.period_date)?;
    let employee: Employee = request.employee.into();
    let shifts: Vec<Shift> = request.shifts.into_iter().map(Into::into).collect();

    let mut record = calculate_for_period(&employee, &shifts, &pay_period, state.rules())?;
    if let Some(deductions) = request.deductions {
        record.set_deductions(deductions)?;
    }
    Ok(record)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: PayrollError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        kind = ?err.kind(),
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, &api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including the field path
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
