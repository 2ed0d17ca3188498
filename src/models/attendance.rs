//! Attendance record model.
//!
//! At most one record exists per (employee, date). It is created by the first
//! check-in of the day and later completed by a check-out or a manual edit.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A day's check-in/check-out pair for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The calendar day the record is for.
    pub date: NaiveDate,
    /// When the employee checked in.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// When the employee checked out.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl Attendance {
    /// Returns true when both check-in and check-out are recorded.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Check-out minus check-in, when both are present.
    pub fn work_duration(&self) -> Option<Duration> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some(check_out - check_in),
            _ => None,
        }
    }

    /// The worked duration expressed in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Attendance;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = Attendance {
    ///     id: "att_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
    ///     check_in: Some(NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     check_out: Some(NaiveDateTime::parse_from_str("2026-01-14 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     notes: String::new(),
    /// };
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(85, 1))); // 8.5 hours
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        self.work_duration()
            .map(|duration| Decimal::new(duration.num_seconds(), 0) / Decimal::new(3600, 0))
    }
}
