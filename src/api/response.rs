//! Response types for the shift payroll API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::ShiftConflict;

/// Response body for the `/shifts/conflicts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictResponse {
    /// Every conflicting pair found.
    pub conflicts: Vec<ShiftConflict>,
}

/// Response body for the `/shifts/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationResponse {
    /// The measured shift.
    pub shift_id: String,
    /// Duration in hours, from actual times when both are recorded.
    pub hours: Decimal,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours beyond the overtime threshold.
    pub overtime_hours: Decimal,
    /// Whether the shift exceeds the overtime threshold.
    pub has_overtime: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        match error {
            PayrollError::InvalidTimeFormat { value, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    message,
                    format!("'{}' is not a 24-hour HH:MM time", value),
                ),
            },
            PayrollError::MissingField { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Field '{}' is missing or invalid", field),
                ),
            },
            PayrollError::InvalidShift { shift_id, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    format!("Shift '{}' contains inconsistent times", shift_id),
                ),
            },
            PayrollError::InvalidShiftState { .. } | PayrollError::InvalidPayrollState { .. } => {
                ApiErrorResponse {
                    status: StatusCode::CONFLICT,
                    error: ApiError::new("INVALID_STATE", message),
                }
            }
            PayrollError::ShiftCalculation { shift_id, source } => {
                let inner: ApiErrorResponse = (*source).into();
                ApiErrorResponse {
                    status: inner.status,
                    error: ApiError::with_details(
                        inner.error.code,
                        message,
                        format!("Shift '{}' was rejected; no totals were produced", shift_id),
                    ),
                }
            }
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_time_format_error_is_bad_request() {
        let api_error: ApiErrorResponse = PayrollError::InvalidTimeFormat {
            value: "9am".to_string(),
            message: "expected HH:MM".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TIME_FORMAT");
    }

    #[test]
    fn test_state_errors_are_conflicts() {
        let api_error: ApiErrorResponse = PayrollError::InvalidPayrollState {
            record_id: "rec".to_string(),
            action: "process".to_string(),
            status: "paid".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "INVALID_STATE");
    }

    #[test]
    fn test_shift_calculation_keeps_inner_code() {
        let api_error: ApiErrorResponse = PayrollError::ShiftCalculation {
            shift_id: "shift_007".to_string(),
            source: Box::new(PayrollError::InvalidTimeFormat {
                value: "noon".to_string(),
                message: "expected HH:MM".to_string(),
            }),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TIME_FORMAT");
        assert!(api_error.error.message.contains("shift_007"));
        assert!(api_error.error.details.unwrap().contains("shift_007"));
    }

    #[test]
    fn test_config_error_is_server_error() {
        let api_error: ApiErrorResponse = PayrollError::ConfigNotFound {
            path: "/etc/payroll.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
