//! Per-day attendance classification.
//!
//! Classification is a pure function of the source data and the supplied
//! "today": the same inputs always produce the same result. Missing schedule
//! or calendar data never fails; it degrades to conservative defaults. Only
//! store failures propagate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Attendance, DayClassification, DayStatus, Employee, WorkSchedule};
use crate::store::{CalendarStore, EmployeeLookup, ScheduleStore};

use super::calendar_oracle::is_working_date;
use super::schedule_resolver::resolve_for_employee;
use super::window::{expected_window, expected_work_hours};

/// An employee and their effective schedule, loaded once per classification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeContext {
    /// The employee id the context was requested for.
    pub employee_id: String,
    /// The employee record, if the id is known.
    pub employee: Option<Employee>,
    /// The effective schedule, if one could be resolved.
    pub schedule: Option<WorkSchedule>,
}

impl EmployeeContext {
    /// Loads the employee and resolves their schedule.
    pub fn load<S>(store: &S, employee_id: &str) -> EngineResult<Self>
    where
        S: EmployeeLookup + ScheduleStore + ?Sized,
    {
        let employee = store.get_employee(employee_id)?;
        let schedule = match &employee {
            Some(employee) => resolve_for_employee(store, employee)?.map(|r| r.schedule),
            None => None,
        };
        Ok(Self {
            employee_id: employee_id.to_string(),
            employee,
            schedule,
        })
    }

    /// Returns true if `date` is before the employee's hire date.
    ///
    /// Unknown employees have no hire date, so no date is excluded.
    pub fn is_before_hire(&self, date: NaiveDate) -> bool {
        self.employee
            .as_ref()
            .is_some_and(|employee| employee.is_before_hire(date))
    }
}

/// Classifies one employee's day.
///
/// `record` is the attendance record for that (employee, date), if any, and
/// `today` decides whether an unattended working day is `Absent` or still
/// `Scheduled`. Returns `Ok(None)` when there is no record and the date is
/// before the employee's hire date; such days are excluded from reporting.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Department, DayStatus, Employee, WorkSchedule, WorkingDays};
/// use attendance_engine::reconciliation::classify_day;
/// use attendance_engine::store::InMemoryStore;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let mut store = InMemoryStore::new();
/// store.insert_department(Department { id: "dept_eng".into(), name: "Engineering".into() })?;
/// store.insert_schedule(WorkSchedule {
///     id: "sched_default".into(),
///     name: "Default".into(),
///     description: String::new(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     working_days: WorkingDays::default(),
///     flex_allowance_minutes: 15,
///     department_id: None,
///     is_system_default: true,
/// })?;
/// store.insert_employee(Employee {
///     id: "emp_001".into(),
///     full_name: String::new(),
///     department_id: "dept_eng".into(),
///     work_schedule_id: None,
///     hire_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
/// })?;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let day = classify_day(&store, "emp_001", wednesday, None, today)?.unwrap();
/// assert_eq!(day.status, DayStatus::Absent);
///
/// // Before the hire date nothing is reported
/// let before_hire = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
/// assert!(classify_day(&store, "emp_001", before_hire, None, today)?.is_none());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn classify_day<S>(
    store: &S,
    employee_id: &str,
    date: NaiveDate,
    record: Option<&Attendance>,
    today: NaiveDate,
) -> EngineResult<Option<DayClassification>>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + ?Sized,
{
    let context = EmployeeContext::load(store, employee_id)?;
    classify_with_context(store, &context, date, record, today)
}

/// Classifies one day against a preloaded [`EmployeeContext`].
pub fn classify_with_context<C>(
    calendar: &C,
    context: &EmployeeContext,
    date: NaiveDate,
    record: Option<&Attendance>,
    today: NaiveDate,
) -> EngineResult<Option<DayClassification>>
where
    C: CalendarStore + ?Sized,
{
    let is_holiday = !is_working_date(calendar, date)?;
    let schedule = context.schedule.as_ref();
    let is_working = !is_holiday && schedule.is_some_and(|s| s.is_working_day(date));
    let expected_hours = schedule.map_or(Decimal::ZERO, |s| expected_work_hours(s, date));

    let classification = match record {
        None => {
            if context.is_before_hire(date) {
                debug!(
                    employee_id = %context.employee_id,
                    date = %date,
                    "Date precedes hire date, excluded"
                );
                return Ok(None);
            }

            let status = if is_holiday {
                DayStatus::Holiday
            } else if !is_working {
                DayStatus::NonWorkingDay
            } else if date > today {
                DayStatus::Scheduled
            } else {
                DayStatus::Absent
            };

            DayClassification {
                date,
                status,
                is_late: false,
                is_early_departure: false,
                is_holiday,
                is_non_working_day: !is_working,
                is_overtime: false,
                worked_hours: None,
                expected_hours,
            }
        }
        Some(record) => {
            let window = if is_working {
                schedule.and_then(|s| expected_window(s, date))
            } else {
                None
            };

            let is_late = match (window, record.check_in) {
                (Some(window), Some(check_in)) => check_in > window.check_in_deadline,
                _ => false,
            };
            let is_early_departure = match (window, record.check_out) {
                (Some(window), Some(check_out)) => check_out < window.check_out_floor,
                _ => false,
            };

            let worked_hours = record.worked_hours();
            let is_overtime = is_working && worked_hours.is_some_and(|h| h > expected_hours);

            let status = if !record.is_complete() {
                DayStatus::Incomplete
            } else if is_early_departure {
                DayStatus::EarlyDeparture
            } else if is_late {
                DayStatus::LateArrival
            } else {
                DayStatus::Present
            };

            DayClassification {
                date,
                status,
                is_late,
                is_early_departure,
                is_holiday,
                is_non_working_day: !is_working,
                is_overtime,
                worked_hours,
                expected_hours,
            }
        }
    };

    debug!(
        employee_id = %context.employee_id,
        date = %date,
        status = %classification.status,
        "Classified day"
    );

    Ok(Some(classification))
}
