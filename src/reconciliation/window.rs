//! Expected working window for a schedule on a date.
//!
//! The grace period only moves the check-in deadline; the check-out floor is
//! always the scheduled end.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::WorkSchedule;
use crate::store::{EmployeeLookup, ScheduleStore};

use super::schedule_resolver::resolve_schedule;

/// The instants a day's attendance is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedWindow {
    /// The scheduled start of the day.
    pub scheduled_start: NaiveDateTime,
    /// Latest check-in that is not late (start plus grace period).
    pub check_in_deadline: NaiveDateTime,
    /// Earliest check-out that is not an early departure.
    pub check_out_floor: NaiveDateTime,
}

/// Computes the expected window for `date`.
///
/// Returns `None` when the schedule's weekday pattern does not cover the date.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{WorkSchedule, WorkingDays};
/// use attendance_engine::reconciliation::expected_window;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let schedule = WorkSchedule {
///     id: "sched_std".into(),
///     name: "Standard".into(),
///     description: String::new(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     working_days: WorkingDays::default(),
///     flex_allowance_minutes: 15,
///     department_id: None,
///     is_system_default: true,
/// };
///
/// // Wednesday
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let window = expected_window(&schedule, date).unwrap();
/// assert_eq!(window.check_in_deadline, date.and_hms_opt(9, 15, 0).unwrap());
/// assert_eq!(window.check_out_floor, date.and_hms_opt(17, 0, 0).unwrap());
///
/// // Saturday
/// assert!(expected_window(&schedule, NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()).is_none());
/// ```
pub fn expected_window(schedule: &WorkSchedule, date: NaiveDate) -> Option<ExpectedWindow> {
    if !schedule.is_working_day(date) {
        return None;
    }

    let scheduled_start = date.and_time(schedule.start_time);
    Some(ExpectedWindow {
        scheduled_start,
        check_in_deadline: scheduled_start
            + Duration::minutes(i64::from(schedule.flex_allowance_minutes)),
        check_out_floor: date.and_time(schedule.end_time),
    })
}

/// Hours between the schedule's start and end on a working day, 0 otherwise.
///
/// A schedule whose end is not after its start yields zero or negative hours.
pub fn expected_work_hours(schedule: &WorkSchedule, date: NaiveDate) -> Decimal {
    if !schedule.is_working_day(date) {
        return Decimal::ZERO;
    }
    let seconds = (schedule.end_time - schedule.start_time).num_seconds();
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

/// Expected hours for an employee's effective schedule on `date`.
///
/// Uses the weekday pattern only; 0 when no schedule can be resolved.
pub fn expected_work_hours_for_employee<S>(
    store: &S,
    employee_id: &str,
    date: NaiveDate,
) -> EngineResult<Decimal>
where
    S: EmployeeLookup + ScheduleStore + ?Sized,
{
    Ok(resolve_schedule(store, employee_id)?
        .map_or(Decimal::ZERO, |schedule| expected_work_hours(&schedule, date)))
}
