//! HTTP request handlers for the attendance API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler parses its JSON body, runs one engine operation against the shared
//! store and serializes the result.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::reconciliation::{
    aggregate_statistics, classify_day, company_report, department_report,
    department_statistics, employee_report, expected_window, expected_work_hours_for_employee, find_calendar_entry, is_working_date,
    is_working_date_for_employee, resolve_schedule_with_source,
};
use crate::store::EngineStore;

use super::request::{
    ClassifyRequest, CompanyRangeRequest, DateRangeRequest, DepartmentRangeRequest,
    EmployeeRangeRequest, ScheduleRequest, WorkingDayRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, ClassifyResponse, ScheduleResponse, WorkingDayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/statistics", post(statistics_handler))
        .route("/report", post(report_handler))
        .route("/department-statistics", post(department_statistics_handler))
        .route("/department-report", post(department_report_handler))
        .route("/company-report", post(company_report_handler))
        .route("/working-day", post(working_day_handler))
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

/// Handler for POST /classify.
///
/// Classifies one day using the stored attendance record for it, if any.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match perform_classify(state.store(), &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                date = %request.date,
                status = ?result.classification.as_ref().map(|c| c.status),
                duration_us = start_time.elapsed().as_micros(),
                "Classification completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn perform_classify(
    store: &dyn EngineStore,
    request: &ClassifyRequest,
) -> EngineResult<ClassifyResponse> {
    let record = store.find_by_employee_and_date(&request.employee_id, request.date)?;
    let classification = classify_day(
        store,
        &request.employee_id,
        request.date,
        record.as_ref(),
        resolve_today(request.as_of),
    )?;
    Ok(ClassifyResponse {
        employee_id: request.employee_id.clone(),
        date: request.date,
        classification,
    })
}

/// Handler for POST /statistics.
async fn statistics_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statistics request");

    let request = match parse_range_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match aggregate_statistics(
        state.store(),
        &request.employee_id,
        request.start_date,
        request.end_date,
        resolve_today(request.as_of),
    ) {
        Ok(statistics) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                working_days = statistics.total_working_days,
                attendance_percentage = %statistics.attendance_percentage,
                duration_us = start_time.elapsed().as_micros(),
                "Statistics completed"
            );
            json_response(StatusCode::OK, statistics)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match parse_range_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match employee_report(
        state.store(),
        &request.employee_id,
        request.start_date,
        request.end_date,
        resolve_today(request.as_of),
    ) {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                rows = rows.len(),
                "Report completed"
            );
            json_response(StatusCode::OK, rows)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /department-statistics.
async fn department_statistics_handler(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing department statistics request");

    let request = match parse_range_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match department_statistics(
        state.store(),
        &request.department_id,
        request.start_date,
        request.end_date,
        resolve_today(request.as_of),
    ) {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                department_id = %request.department_id,
                employees = results.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Department statistics completed"
            );
            json_response(StatusCode::OK, results)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /department-report.
async fn department_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<DepartmentRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing department report request");

    let request = match parse_range_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match department_report(
        state.store(),
        &request.department_id,
        request.start_date,
        request.end_date,
        resolve_today(request.as_of),
    ) {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                department_id = %request.department_id,
                rows = rows.len(),
                "Department report completed"
            );
            json_response(StatusCode::OK, rows)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /company-report.
///
/// Lists every recorded day in the range, across all employees.
async fn company_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<CompanyRangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing company report request");

    let request = match parse_range_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    match company_report(
        state.store(),
        request.start_date,
        request.end_date,
        resolve_today(request.as_of),
    ) {
        Ok(rows) => {
            info!(
                correlation_id = %correlation_id,
                rows = rows.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Company report completed"
            );
            json_response(StatusCode::OK, rows)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /working-day.
async fn working_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingDayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working day request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_working_day(state.store(), request) {
        Ok(result) => json_response(StatusCode::OK, result),
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn perform_working_day(
    store: &dyn EngineStore,
    request: WorkingDayRequest,
) -> EngineResult<WorkingDayResponse> {
    let calendar_entry = find_calendar_entry(store, request.date)?;
    let is_working_date = is_working_date(store, request.date)?;

    let (is_working_for_employee, expected_hours) = match &request.employee_id {
        Some(employee_id) => (
            Some(is_working_date_for_employee(store, employee_id, request.date)?),
            Some(expected_work_hours_for_employee(store, employee_id, request.date)?),
        ),
        None => (None, None),
    };

    Ok(WorkingDayResponse {
        date: request.date,
        is_working_date,
        calendar_entry,
        employee_id: request.employee_id,
        is_working_for_employee,
        expected_hours,
    })
}

/// Handler for POST /schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match parse_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match resolve_schedule_with_source(state.store(), &request.employee_id) {
        Ok(resolved) => {
            let window = match (&resolved, request.date) {
                (Some(resolved), Some(date)) => expected_window(&resolved.schedule, date),
                _ => None,
            };
            let (schedule, source) = match resolved {
                Some(resolved) => (Some(resolved.schedule), Some(resolved.source)),
                None => (None, None),
            };
            json_response(
                StatusCode::OK,
                ScheduleResponse {
                    employee_id: request.employee_id,
                    schedule,
                    source,
                    window,
                },
            )
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// The request's `as_of` date, or the local date.
fn resolve_today(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

/// Unwraps a JSON body or builds the 400 response describing why it was rejected.
fn parse_request<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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

    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Like [`parse_request`], also rejecting ranges longer than the allowed span.
fn parse_range_request<T: DateRangeRequest>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let request = parse_request(payload, correlation_id)?;
    if let Err(error) = request.check_span() {
        warn!(
            correlation_id = %correlation_id,
            details = ?error.details,
            "Date range too long"
        );
        return Err(json_response(StatusCode::BAD_REQUEST, error));
    }
    Ok(request)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}
