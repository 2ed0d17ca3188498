//! Calendar policy: which dates are working dates.
//!
//! An exact-date calendar entry always takes priority over a recurring one.
//! Among recurring entries on the same month and day, the lowest id wins.
//! Dates without any entry are working dates.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::CalendarEntry;
use crate::store::{CalendarStore, EmployeeLookup, ScheduleStore};

use super::schedule_resolver::resolve_schedule;

/// Returns the calendar entry governing `date`, if any.
pub fn find_calendar_entry<C>(calendar: &C, date: NaiveDate) -> EngineResult<Option<CalendarEntry>>
where
    C: CalendarStore + ?Sized,
{
    if let Some(entry) = calendar.find_exact(date)? {
        debug!(date = %date, entry_id = %entry.id, "Exact calendar entry matched");
        return Ok(Some(entry));
    }

    let recurring = calendar
        .find_recurring(date.month(), date.day())?
        .into_iter()
        .min_by(|a, b| a.id.cmp(&b.id));
    if let Some(entry) = &recurring {
        debug!(date = %date, entry_id = %entry.id, "Recurring calendar entry matched");
    }
    Ok(recurring)
}

/// Returns true unless the calendar marks `date` as a holiday or non-working day.
///
/// Short days count as working dates.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{CalendarEntry, CalendarEntryType};
/// use attendance_engine::reconciliation::is_working_date;
/// use attendance_engine::store::InMemoryStore;
/// use chrono::NaiveDate;
///
/// let mut store = InMemoryStore::new();
/// store.insert_calendar_entry(CalendarEntry {
///     id: "cal_xmas".into(),
///     date: NaiveDate::from_ymd_opt(2000, 12, 25).unwrap(),
///     name: "Christmas Day".into(),
///     description: String::new(),
///     entry_type: CalendarEntryType::Holiday,
///     is_recurring_annually: true,
/// })?;
///
/// assert!(!is_working_date(&store, NaiveDate::from_ymd_opt(2026, 12, 25).unwrap())?);
/// assert!(is_working_date(&store, NaiveDate::from_ymd_opt(2026, 12, 28).unwrap())?);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn is_working_date<C>(calendar: &C, date: NaiveDate) -> EngineResult<bool>
where
    C: CalendarStore + ?Sized,
{
    Ok(find_calendar_entry(calendar, date)?.is_none_or(|entry| !entry.is_non_working()))
}

/// Returns true if the employee is expected to work on `date`.
///
/// False when the calendar says the date is non-working, when the employee's
/// effective schedule does not cover the weekday, or when no schedule can be
/// resolved.
pub fn is_working_date_for_employee<S>(
    store: &S,
    employee_id: &str,
    date: NaiveDate,
) -> EngineResult<bool>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + ?Sized,
{
    if !is_working_date(store, date)? {
        return Ok(false);
    }
    Ok(resolve_schedule(store, employee_id)?.is_some_and(|schedule| schedule.is_working_day(date)))
}
