//! Per-day classification results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The attendance status of one employee on one day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::LateArrival.to_string(), "Late arrival");
/// assert!(DayStatus::LateArrival.is_attended());
/// assert!(!DayStatus::Absent.is_attended());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Checked in and out within the expected window.
    Present,
    /// Complete record with a check-in after the grace deadline.
    LateArrival,
    /// Complete record with a check-out before the scheduled end.
    EarlyDeparture,
    /// Check-in or check-out missing.
    Incomplete,
    /// Working day in the past (or today) with no record.
    Absent,
    /// Calendar holiday or non-working day with no record.
    Holiday,
    /// Not a scheduled weekday for the employee, with no record.
    NonWorkingDay,
    /// Working day that has not happened yet.
    Scheduled,
}

impl DayStatus {
    /// Returns true for statuses backed by a complete attendance record.
    pub fn is_attended(&self) -> bool {
        matches!(
            self,
            DayStatus::Present | DayStatus::LateArrival | DayStatus::EarlyDeparture
        )
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Present => write!(f, "Present"),
            DayStatus::LateArrival => write!(f, "Late arrival"),
            DayStatus::EarlyDeparture => write!(f, "Early departure"),
            DayStatus::Incomplete => write!(f, "Incomplete"),
            DayStatus::Absent => write!(f, "Absent"),
            DayStatus::Holiday => write!(f, "Holiday"),
            DayStatus::NonWorkingDay => write!(f, "Non-working day"),
            DayStatus::Scheduled => write!(f, "Scheduled"),
        }
    }
}

/// The outcome of classifying one (employee, date) pair.
///
/// The flags are computed independently of `status`: a day can be both a
/// calendar holiday and an unscheduled weekday, and a late arrival can also
/// be an early departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The day that was classified.
    pub date: NaiveDate,
    /// The overall status for the day.
    pub status: DayStatus,
    /// Check-in was after the grace deadline.
    pub is_late: bool,
    /// Check-out was before the scheduled end.
    pub is_early_departure: bool,
    /// The calendar marks the date as a holiday or non-working day.
    pub is_holiday: bool,
    /// The employee is not expected to work on this date.
    pub is_non_working_day: bool,
    /// Worked hours exceeded the expected hours.
    pub is_overtime: bool,
    /// Hours between check-in and check-out, when both are present.
    pub worked_hours: Option<Decimal>,
    /// Hours the employee's schedule expects on this date.
    pub expected_hours: Decimal,
}

impl DayClassification {
    /// A working day for the employee (neither a holiday nor unscheduled).
    pub fn is_working_day(&self) -> bool {
        !self.is_holiday && !self.is_non_working_day
    }
}
