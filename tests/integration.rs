//! End-to-end tests for the attendance engine API.
//!
//! Drives the router against the `config/sample` data directory:
//! - Schedule resolution (override, department, system default)
//! - Calendar policy (recurring holidays, one-off closures)
//! - Day classification (late, early, incomplete, scheduled, absent)
//! - Range statistics and reports, including hire-date exclusion
//! - Department statistics, department and company day reports
//! - Error cases
//!
//! The sample week starts on Monday 2026-01-05.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/sample").expect("Failed to load data");
    create_router(AppState::new(config))
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal serialized as string")).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn classify(employee_id: &str, date: &str, as_of: &str) -> Value {
    let (status, body) = post(
        create_router_for_test(),
        "/classify",
        json!({ "employee_id": employee_id, "date": date, "as_of": as_of }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);
    body["classification"].clone()
}

// =============================================================================
// Schedule resolution
// =============================================================================

#[tokio::test]
async fn test_schedule_system_default_for_employee_without_department_schedule() {
    let (status, body) = post(
        create_router_for_test(),
        "/schedule",
        json!({ "employee_id": "emp_001" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schedule"]["id"], "sched_default");
    assert_eq!(body["source"], "system_default");
    assert!(body.get("window").is_none());
}

#[tokio::test]
async fn test_schedule_department_schedule() {
    let (_, body) = post(
        create_router_for_test(),
        "/schedule",
        json!({ "employee_id": "emp_002" }),
    )
    .await;

    assert_eq!(body["schedule"]["id"], "sched_support");
    assert_eq!(body["source"], "department");
}

#[tokio::test]
async fn test_schedule_override_with_window() {
    let (_, body) = post(
        create_router_for_test(),
        "/schedule",
        json!({ "employee_id": "emp_003", "date": "2026-01-05" }),
    )
    .await;

    assert_eq!(body["schedule"]["id"], "sched_early");
    assert_eq!(body["source"], "employee_override");
    // No grace period: the deadline is the scheduled start
    assert_eq!(body["window"]["scheduled_start"], "2026-01-05T06:00:00");
    assert_eq!(body["window"]["check_in_deadline"], "2026-01-05T06:00:00");
    assert_eq!(body["window"]["check_out_floor"], "2026-01-05T14:00:00");
}

#[tokio::test]
async fn test_schedule_window_absent_on_unscheduled_weekday() {
    // emp_003 does not work Fridays
    let (_, body) = post(
        create_router_for_test(),
        "/schedule",
        json!({ "employee_id": "emp_003", "date": "2026-01-09" }),
    )
    .await;

    assert_eq!(body["schedule"]["id"], "sched_early");
    assert!(body.get("window").is_none());
}

#[tokio::test]
async fn test_schedule_unknown_employee_is_null() {
    let (status, body) = post(
        create_router_for_test(),
        "/schedule",
        json!({ "employee_id": "emp_404" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["schedule"].is_null());
    assert!(body["source"].is_null());
}

// =============================================================================
// Calendar policy
// =============================================================================

#[tokio::test]
async fn test_working_day_recurring_holiday_in_later_year() {
    let (_, body) = post(
        create_router_for_test(),
        "/working-day",
        json!({ "date": "2030-01-01" }),
    )
    .await;

    assert_eq!(body["is_working_date"], false);
    assert_eq!(body["calendar_entry"]["name"], "New Year's Day");
}

#[tokio::test]
async fn test_working_day_one_off_closure() {
    let (_, body) = post(
        create_router_for_test(),
        "/working-day",
        json!({ "date": "2026-01-23", "employee_id": "emp_002" }),
    )
    .await;

    assert_eq!(body["is_working_date"], false);
    assert_eq!(body["calendar_entry"]["entry_type"], "non_working_day");
    assert_eq!(body["is_working_for_employee"], false);
}

#[tokio::test]
async fn test_working_day_short_day_is_working() {
    let (_, body) = post(
        create_router_for_test(),
        "/working-day",
        json!({ "date": "2026-12-24", "employee_id": "emp_001" }),
    )
    .await;

    assert_eq!(body["is_working_date"], true);
    assert_eq!(body["calendar_entry"]["entry_type"], "short_day");
    assert_eq!(body["is_working_for_employee"], true);
    assert_eq!(decimal(&body["expected_hours"]), Decimal::from(8));
}

#[tokio::test]
async fn test_working_day_saturday_depends_on_schedule() {
    let router = create_router_for_test();
    let (_, support) = post(
        router.clone(),
        "/working-day",
        json!({ "date": "2026-01-10", "employee_id": "emp_002" }),
    )
    .await;
    let (_, office) = post(
        router,
        "/working-day",
        json!({ "date": "2026-01-10", "employee_id": "emp_001" }),
    )
    .await;

    assert_eq!(support["is_working_date"], true);
    assert_eq!(support["is_working_for_employee"], true);
    assert_eq!(office["is_working_for_employee"], false);
    assert_eq!(decimal(&office["expected_hours"]), Decimal::ZERO);
}

// =============================================================================
// Day classification
// =============================================================================

#[tokio::test]
async fn test_classify_on_time_day() {
    let day = classify("emp_001", "2026-01-05", "2026-02-01").await;

    assert_eq!(day["status"], "present");
    assert_eq!(day["is_late"], false);
    assert_eq!(day["is_early_departure"], false);
    assert_eq!(decimal(&day["worked_hours"]), Decimal::from(8));
    assert_eq!(decimal(&day["expected_hours"]), Decimal::from(8));
}

#[tokio::test]
async fn test_classify_late_arrival_past_grace() {
    let day = classify("emp_001", "2026-01-06", "2026-02-01").await;
    assert_eq!(day["status"], "late_arrival");
    assert_eq!(day["is_late"], true);
}

#[tokio::test]
async fn test_classify_overtime_day() {
    let day = classify("emp_001", "2026-01-07", "2026-02-01").await;
    assert_eq!(day["status"], "present");
    assert_eq!(day["is_overtime"], true);
}

#[tokio::test]
async fn test_classify_missing_check_out_is_incomplete() {
    let day = classify("emp_001", "2026-01-09", "2026-02-01").await;
    assert_eq!(day["status"], "incomplete");
    assert!(day["worked_hours"].is_null());
}

#[tokio::test]
async fn test_classify_early_departure_without_grace() {
    // 16:30 check-out against a 17:00 end; grace never applies to check-out
    let day = classify("emp_001", "2026-01-12", "2026-02-01").await;
    assert_eq!(day["status"], "early_departure");
    assert_eq!(day["is_early_departure"], true);
}

#[tokio::test]
async fn test_classify_department_grace_period() {
    // sched_support starts 08:00 with 10 minutes grace
    let late = classify("emp_002", "2026-01-05", "2026-02-01").await;
    let saturday = classify("emp_002", "2026-01-10", "2026-02-01").await;

    assert_eq!(late["status"], "late_arrival");
    assert_eq!(saturday["status"], "present");
    assert_eq!(saturday["is_non_working_day"], false);
}

#[tokio::test]
async fn test_classify_work_on_unscheduled_weekday() {
    // emp_003 worked a Friday outside their four-day week
    let day = classify("emp_003", "2026-01-09", "2026-02-01").await;

    assert_eq!(day["status"], "present");
    assert_eq!(day["is_non_working_day"], true);
    assert_eq!(day["is_late"], false);
    assert_eq!(day["is_early_departure"], false);
    assert_eq!(day["is_overtime"], false);
}

#[tokio::test]
async fn test_classify_absent_versus_scheduled() {
    let absent = classify("emp_001", "2026-01-08", "2026-02-01").await;
    let scheduled = classify("emp_001", "2026-01-20", "2026-01-19").await;

    assert_eq!(absent["status"], "absent");
    assert_eq!(scheduled["status"], "scheduled");
}

#[tokio::test]
async fn test_classify_holiday_and_weekend() {
    let holiday = classify("emp_001", "2026-01-01", "2026-02-01").await;
    let sunday = classify("emp_001", "2026-01-04", "2026-02-01").await;

    assert_eq!(holiday["status"], "holiday");
    assert_eq!(holiday["is_holiday"], true);
    assert_eq!(holiday["is_non_working_day"], true);
    assert_eq!(sunday["status"], "non_working_day");
    assert_eq!(sunday["is_holiday"], false);
}

#[tokio::test]
async fn test_classify_before_hire_is_excluded() {
    let day = classify("emp_004", "2026-01-06", "2026-02-01").await;
    assert!(day.is_null());
}

#[tokio::test]
async fn test_classify_unknown_employee_is_non_working() {
    let day = classify("emp_404", "2026-01-06", "2026-02-01").await;
    assert_eq!(day["status"], "non_working_day");
    assert_eq!(decimal(&day["expected_hours"]), Decimal::ZERO);
}

#[tokio::test]
async fn test_classify_is_idempotent() {
    let first = classify("emp_001", "2026-01-06", "2026-02-01").await;
    let second = classify("emp_001", "2026-01-06", "2026-02-01").await;
    assert_eq!(first, second);
}

// =============================================================================
// Statistics and reports
// =============================================================================

#[tokio::test]
async fn test_statistics_for_sample_week() {
    let (status, body) = post(
        create_router_for_test(),
        "/statistics",
        json!({
            "employee_id": "emp_001",
            "start_date": "2026-01-05",
            "end_date": "2026-01-11",
            "as_of": "2026-02-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_working_days"], 5);
    assert_eq!(body["days_present"], 4);
    assert_eq!(body["days_absent"], 1);
    assert_eq!(body["late_arrivals"], 1);
    assert_eq!(body["early_departures"], 0);
    assert_eq!(body["incomplete_days"], 1);
    assert_eq!(body["overtime_days"], 1);
    assert_eq!(body["non_working_days"], 2);
    assert_eq!(decimal(&body["attendance_percentage"]), Decimal::from(80));
    assert_eq!(decimal(&body["punctuality_percentage"]), Decimal::from(75));
}

#[tokio::test]
async fn test_statistics_exclude_days_before_hire() {
    // emp_004 started on Wednesday 2026-01-07 and attended that day only
    let (_, body) = post(
        create_router_for_test(),
        "/statistics",
        json!({
            "employee_id": "emp_004",
            "start_date": "2026-01-05",
            "end_date": "2026-01-09",
            "as_of": "2026-02-01"
        }),
    )
    .await;

    assert_eq!(body["total_working_days"], 3);
    assert_eq!(body["days_present"], 1);
    assert_eq!(body["days_absent"], 2);
    assert_eq!(decimal(&body["attendance_percentage"]), Decimal::from_str("33.33").unwrap());
}

#[tokio::test]
async fn test_statistics_future_days_are_scheduled() {
    let (_, body) = post(
        create_router_for_test(),
        "/statistics",
        json!({
            "employee_id": "emp_001",
            "start_date": "2026-01-19",
            "end_date": "2026-01-23",
            "as_of": "2026-01-20"
        }),
    )
    .await;

    // Friday the 23rd is the stocktake closure
    assert_eq!(body["total_working_days"], 4);
    assert_eq!(body["days_absent"], 2);
    assert_eq!(body["days_scheduled"], 2);
    assert_eq!(body["holidays"], 1);
}

#[tokio::test]
async fn test_report_fills_every_day() {
    let (status, body) = post(
        create_router_for_test(),
        "/report",
        json!({
            "employee_id": "emp_001",
            "start_date": "2026-01-01",
            "end_date": "2026-01-07",
            "as_of": "2026-02-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 7);

    let statuses: Vec<&str> = rows
        .iter()
        .map(|row| row["classification"]["status"].as_str().unwrap())
        .collect();
    assert_eq!(
        statuses,
        vec![
            "holiday",
            "absent",
            "non_working_day",
            "non_working_day",
            "present",
            "late_arrival",
            "present"
        ]
    );
    assert_eq!(rows[5]["notes"], "Train delays");
    assert_eq!(rows[5]["check_in"], "2026-01-06T09:20:00");
    assert!(rows[1]["check_in"].is_null());
}

#[tokio::test]
async fn test_department_statistics_ordered_by_employee() {
    let (status, body) = post(
        create_router_for_test(),
        "/department-statistics",
        json!({
            "department_id": "dept_eng",
            "start_date": "2026-01-05",
            "end_date": "2026-01-09",
            "as_of": "2026-02-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    let ids: Vec<&str> = results
        .iter()
        .map(|s| s["employee_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["emp_001", "emp_003", "emp_004"]);

    // Friday work outside the schedule does not count as presence
    assert_eq!(results[1]["total_working_days"], 4);
    assert_eq!(results[1]["days_present"], 1);
    assert_eq!(results[1]["days_absent"], 3);
}

#[tokio::test]
async fn test_department_report_ordered_by_date_then_employee() {
    let (status, body) = post(
        create_router_for_test(),
        "/department-report",
        json!({
            "department_id": "dept_eng",
            "start_date": "2026-01-05",
            "end_date": "2026-01-09",
            "as_of": "2026-02-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    // emp_004 joins on the 7th
    assert_eq!(rows.len(), 13);

    let keys: Vec<(&str, &str)> = rows
        .iter()
        .take(7)
        .map(|row| (row["date"].as_str().unwrap(), row["employee_id"].as_str().unwrap()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("2026-01-05", "emp_001"),
            ("2026-01-05", "emp_003"),
            ("2026-01-06", "emp_001"),
            ("2026-01-06", "emp_003"),
            ("2026-01-07", "emp_001"),
            ("2026-01-07", "emp_003"),
            ("2026-01-07", "emp_004"),
        ]
    );
    assert_eq!(rows[3]["classification"]["status"], "absent");
    assert!(rows.iter().all(|row| row["department_id"] == "dept_eng"));
}

#[tokio::test]
async fn test_company_report_lists_recorded_days() {
    let (status, body) = post(
        create_router_for_test(),
        "/company-report",
        json!({
            "start_date": "2026-01-05",
            "end_date": "2026-01-11",
            "as_of": "2026-02-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    let keys: Vec<(&str, &str)> = rows
        .iter()
        .map(|row| (row["date"].as_str().unwrap(), row["employee_id"].as_str().unwrap()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("2026-01-05", "emp_001"),
            ("2026-01-05", "emp_002"),
            ("2026-01-05", "emp_003"),
            ("2026-01-06", "emp_001"),
            ("2026-01-07", "emp_001"),
            ("2026-01-07", "emp_004"),
            ("2026-01-09", "emp_001"),
            ("2026-01-09", "emp_003"),
            ("2026-01-10", "emp_002"),
        ]
    );
    assert_eq!(rows[1]["department_id"], "dept_support");
    assert_eq!(rows[6]["classification"]["status"], "incomplete");
    assert_eq!(rows[0]["classification"]["status"], "present");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_oversized_range_returns_validation_error() {
    let (status, body) = post(
        create_router_for_test(),
        "/company-report",
        json!({ "start_date": "0001-01-01", "end_date": "9999-12-31" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_reversed_range_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/report",
        json!({
            "employee_id": "emp_001",
            "start_date": "2026-01-31",
            "end_date": "2026-01-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_invalid_date_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/classify",
        json!({ "employee_id": "emp_001", "date": "2026-02-30" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_department_id_returns_validation_error() {
    let (status, body) = post(
        create_router_for_test(),
        "/department-statistics",
        json!({ "start_date": "2026-01-05", "end_date": "2026-01-09" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/schedule")
                .body(Body::from(r#"{"employee_id": "emp_001"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}
