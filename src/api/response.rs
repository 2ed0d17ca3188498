//! Response types for the attendance API.
//!
//! This module defines the success bodies that are not plain domain records,
//! the error response structure, and the mapping from engine errors to HTTP
//! status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{CalendarEntry, DayClassification, WorkSchedule};
use crate::reconciliation::{ExpectedWindow, ScheduleSource};

/// Body returned by `/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// The employee the day was classified for.
    pub employee_id: String,
    /// The classified day.
    pub date: NaiveDate,
    /// `None` when the day precedes the hire date and has no record.
    pub classification: Option<DayClassification>,
}

/// Body returned by `/working-day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDayResponse {
    /// The queried date.
    pub date: NaiveDate,
    /// Whether the calendar allows work on the date.
    pub is_working_date: bool,
    /// The calendar entry governing the date, if any.
    pub calendar_entry: Option<CalendarEntry>,
    /// Employee the query was narrowed to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Whether the employee is expected to work, when an employee was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_working_for_employee: Option<bool>,
    /// The employee's expected hours, when an employee was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_hours: Option<Decimal>,
}

/// Body returned by `/schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The employee the schedule was resolved for.
    pub employee_id: String,
    /// The effective schedule, if any.
    pub schedule: Option<WorkSchedule>,
    /// Which rule produced the schedule.
    pub source: Option<ScheduleSource>,
    /// The expected window on the requested date, if one was given and is scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<ExpectedWindow>,
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::Storage { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            },
            EngineError::Conflict { entity, message } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "CONFLICT",
                    format!("Conflicting {}", entity),
                    message,
                ),
            },
            EngineError::InvalidDateRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!("Invalid date range: {} is after {}", start, end),
                    "start_date must be on or before end_date",
                ),
            },
        }
    }
}
