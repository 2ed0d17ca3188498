//! Request types for the attendance API.
//!
//! Every request may carry an `as_of` date that stands in for "today" when
//! deciding whether an unattended working day is absent or still scheduled.
//! Without it the server's local date is used.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::response::ApiError;

/// Longest inclusive range, in days, a single request may cover (about ten years).
pub const MAX_RANGE_DAYS: i64 = 3_660;

/// Requests that cover an inclusive date range.
pub trait DateRangeRequest {
    /// First and last day of the range.
    fn date_range(&self) -> (NaiveDate, NaiveDate);

    /// Rejects ranges spanning more than [`MAX_RANGE_DAYS`] days.
    ///
    /// A reversed range passes here and is rejected by the engine.
    fn check_span(&self) -> Result<(), ApiError> {
        let (start_date, end_date) = self.date_range();
        let days = (end_date - start_date).num_days() + 1;
        if days > MAX_RANGE_DAYS {
            return Err(ApiError::with_details(
                "VALIDATION_ERROR",
                format!("Date range may cover at most {} days", MAX_RANGE_DAYS),
                format!("{} to {} covers {} days", start_date, end_date, days),
            ));
        }
        Ok(())
    }
}

/// Request body for `/classify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The employee to classify.
    pub employee_id: String,
    /// The day to classify. The stored record for that day is used, if any.
    pub date: NaiveDate,
    /// Reference date for "today".
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for `/statistics` and `/report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRangeRequest {
    /// The employee to report on.
    pub employee_id: String,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Reference date for "today".
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for `/department-statistics` and `/department-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRangeRequest {
    /// The department to report on.
    pub department_id: String,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Reference date for "today".
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for `/company-report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRangeRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Reference date for "today".
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl DateRangeRequest for EmployeeRangeRequest {
    fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }
}

impl DateRangeRequest for DepartmentRangeRequest {
    fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }
}

impl DateRangeRequest for CompanyRangeRequest {
    fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.start_date, self.end_date)
    }
}

/// Request body for `/working-day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDayRequest {
    /// The date to check.
    pub date: NaiveDate,
    /// Narrows the answer to one employee's schedule.
    #[serde(default)]
    pub employee_id: Option<String>,
}

/// Request body for `/schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The employee whose schedule to resolve.
    pub employee_id: String,
    /// When given, the expected window on this date is included.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
