//! Range aggregation of day classifications into statistics.
//!
//! Each day in the inclusive range is classified independently; days before
//! the employee's hire date are skipped rather than counted.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, AttendanceStatistics, DayClassification};
use crate::store::{AttendanceStore, CalendarStore, EmployeeLookup, ScheduleStore};

use super::day_classifier::{EmployeeContext, classify_with_context};

/// A classified day together with the record it was classified from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifiedDay {
    pub classification: DayClassification,
    pub record: Option<Attendance>,
}

impl ClassifiedDay {
    fn has_check_in(&self) -> bool {
        self.record.as_ref().is_some_and(|r| r.check_in.is_some())
    }
}

/// Rejects ranges whose start is after their end.
pub(crate) fn validate_range(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<()> {
    if start_date > end_date {
        return Err(EngineError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }
    Ok(())
}

/// Classifies every reportable day in `[start_date, end_date]`, in date order.
pub(crate) fn classify_range<S>(
    store: &S,
    context: &EmployeeContext,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<Vec<ClassifiedDay>>
where
    S: CalendarStore + AttendanceStore + ?Sized,
{
    validate_range(start_date, end_date)?;

    let mut days = Vec::new();
    for date in start_date.iter_days().take_while(|d| *d <= end_date) {
        if context.is_before_hire(date) {
            continue;
        }

        let record = store.find_by_employee_and_date(&context.employee_id, date)?;
        if let Some(classification) =
            classify_with_context(store, context, date, record.as_ref(), today)?
        {
            days.push(ClassifiedDay {
                classification,
                record,
            });
        }
    }
    Ok(days)
}

/// Aggregates attendance statistics for an employee over an inclusive range.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] when `start_date > end_date`,
/// and propagates store failures.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Department, Employee, WorkSchedule, WorkingDays};
/// use attendance_engine::reconciliation::aggregate_statistics;
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
///     hire_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
/// })?;
///
/// // Monday 2026-01-12 to Sunday 2026-01-18, nobody showed up
/// let stats = aggregate_statistics(
///     &store,
///     "emp_001",
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
/// )?;
/// assert_eq!(stats.total_working_days, 5);
/// assert_eq!(stats.days_absent, 5);
/// assert_eq!(stats.days_present, 0);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn aggregate_statistics<S>(
    store: &S,
    employee_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<AttendanceStatistics>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + ?Sized,
{
    validate_range(start_date, end_date)?;
    let context = EmployeeContext::load(store, employee_id)?;
    aggregate_with_context(store, &context, start_date, end_date, today)
}

fn aggregate_with_context<S>(
    store: &S,
    context: &EmployeeContext,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<AttendanceStatistics>
where
    S: CalendarStore + AttendanceStore + ?Sized,
{
    let days = classify_range(store, context, start_date, end_date, today)?;

    let mut statistics = AttendanceStatistics::new(&context.employee_id, start_date, end_date);
    for day in &days {
        statistics.record(&day.classification, day.has_check_in());
    }

    debug!(
        employee_id = %context.employee_id,
        start_date = %start_date,
        end_date = %end_date,
        classified_days = days.len(),
        working_days = statistics.total_working_days,
        "Aggregated attendance statistics"
    );

    Ok(statistics)
}

/// Aggregates statistics for every employee of a department, ordered by employee id.
pub fn department_statistics<S>(
    store: &S,
    department_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<Vec<AttendanceStatistics>>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + ?Sized,
{
    validate_range(start_date, end_date)?;

    let mut employees = store.find_employees_by_department(department_id)?;
    employees.sort_by(|a, b| a.id.cmp(&b.id));

    let mut results = Vec::with_capacity(employees.len());
    for employee in employees {
        let context = EmployeeContext::load(store, &employee.id)?;
        results.push(aggregate_with_context(
            store, &context, start_date, end_date, today,
        )?);
    }

    info!(
        department_id = %department_id,
        employees = results.len(),
        "Aggregated department statistics"
    );

    Ok(results)
}
