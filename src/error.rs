//! Error types for the shift payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing shift durations,
//! detecting conflicts and aggregating payroll.

use thiserror::Error;

/// The broad class an error belongs to.
///
/// Callers that only care whether input was malformed, incomplete or used in
/// the wrong lifecycle state can match on this instead of every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value could not be parsed (e.g. a time string).
    Format,
    /// A required field was missing or out of range.
    Validation,
    /// A status transition was not permitted.
    InvalidState,
    /// Configuration could not be loaded.
    Config,
}

/// The main error type for the shift payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_payroll::error::PayrollError;
///
/// let error = PayrollError::InvalidTimeFormat {
///     value: "9am".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '9am': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A time-of-day string could not be parsed.
    #[error("Invalid time '{value}': {message}")]
    InvalidTimeFormat {
        /// The offending input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A required field was missing or had an unusable value.
    #[error("Invalid field '{field}': {message}")]
    MissingField {
        /// The field that was missing or invalid.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A shift contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A shift status transition was attempted from the wrong state.
    #[error("Cannot {action} shift '{shift_id}' while it is {status}")]
    InvalidShiftState {
        /// The ID of the shift.
        shift_id: String,
        /// The transition that was attempted.
        action: String,
        /// The status the shift was in.
        status: String,
    },

    /// A payroll record status transition was attempted from the wrong state.
    #[error("Cannot {action} payroll record '{record_id}' while it is {status}")]
    InvalidPayrollState {
        /// The ID of the payroll record.
        record_id: String,
        /// The transition that was attempted.
        action: String,
        /// The status the record was in.
        status: String,
    },

    /// A shift failed during a batch calculation; the whole batch is aborted.
    #[error("Shift '{shift_id}' could not be calculated: {source}")]
    ShiftCalculation {
        /// The ID of the shift that failed.
        shift_id: String,
        /// The underlying failure.
        #[source]
        source: Box<PayrollError>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Returns the class of this error.
    ///
    /// Batch failures report the class of the error that aborted the batch.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PayrollError::InvalidTimeFormat { .. } => ErrorKind::Format,
            PayrollError::MissingField { .. } | PayrollError::InvalidShift { .. } => {
                ErrorKind::Validation
            }
            PayrollError::InvalidShiftState { .. } | PayrollError::InvalidPayrollState { .. } => {
                ErrorKind::InvalidState
            }
            PayrollError::ShiftCalculation { source, .. } => source.kind(),
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// Shorthand for a [`PayrollError::MissingField`].
    pub(crate) fn missing_field(field: &str, message: impl Into<String>) -> Self {
        PayrollError::MissingField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
