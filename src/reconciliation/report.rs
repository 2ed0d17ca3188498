//! Day-by-day attendance reports.
//!
//! All reports are built from the same classified days as the statistics, so
//! pre-hire days never appear and a row's status always agrees with
//! `/classify` for the same day.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::EngineResult;
use crate::models::DayReport;
use crate::store::{AttendanceStore, CalendarStore, EmployeeLookup, ScheduleStore};

use super::day_classifier::EmployeeContext;
use super::range_aggregator::{ClassifiedDay, classify_range, validate_range};

fn to_row(context: &EmployeeContext, day: ClassifiedDay) -> DayReport {
    let (check_in, check_out, notes) = match day.record {
        Some(record) => (record.check_in, record.check_out, record.notes),
        None => (None, None, String::new()),
    };
    DayReport {
        employee_id: context.employee_id.clone(),
        department_id: context.employee.as_ref().map(|e| e.department_id.clone()),
        date: day.classification.date,
        check_in,
        check_out,
        notes,
        classification: day.classification,
    }
}

fn sort_by_date_then_employee(rows: &mut [DayReport]) {
    rows.sort_by(|a, b| (a.date, &a.employee_id).cmp(&(b.date, &b.employee_id)));
}

/// Builds one report row per day in `[start_date, end_date]`.
///
/// Days without a record are filled in with their classification, so working
/// days with no attendance show up as absent. Days before the hire date are
/// left out.
pub fn employee_report<S>(
    store: &S,
    employee_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<Vec<DayReport>>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + ?Sized,
{
    validate_range(start_date, end_date)?;
    let context = EmployeeContext::load(store, employee_id)?;

    let rows: Vec<DayReport> = classify_range(store, &context, start_date, end_date, today)?
        .into_iter()
        .map(|day| to_row(&context, day))
        .collect();

    debug!(employee_id = %employee_id, rows = rows.len(), "Built attendance report");
    Ok(rows)
}

/// Builds the employee report of every member of a department, merged and
/// ordered by date and then employee id.
///
/// An unknown or empty department yields no rows.
pub fn department_report<S>(
    store: &S,
    department_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<Vec<DayReport>>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + ?Sized,
{
    validate_range(start_date, end_date)?;

    let employees = store.find_employees_by_department(department_id)?;
    let mut rows = Vec::new();
    for employee in &employees {
        let context = EmployeeContext::load(store, &employee.id)?;
        rows.extend(
            classify_range(store, &context, start_date, end_date, today)?
                .into_iter()
                .map(|day| to_row(&context, day)),
        );
    }
    sort_by_date_then_employee(&mut rows);

    info!(
        department_id = %department_id,
        employees = employees.len(),
        rows = rows.len(),
        "Built department report"
    );
    Ok(rows)
}

/// Lists every stored attendance record in `[start_date, end_date]` across
/// all employees, ordered by date and then employee id.
///
/// Unlike the employee report, days without a record are left out. Each row
/// carries the employee's department, and its classification reports
/// `Incomplete` for a record missing a check-in or check-out.
pub fn company_report<S>(
    store: &S,
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
) -> EngineResult<Vec<DayReport>>
where
    S: EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + ?Sized,
{
    validate_range(start_date, end_date)?;

    let employees = store.list_employees()?;
    let mut rows = Vec::new();
    for employee in &employees {
        let context = EmployeeContext::load(store, &employee.id)?;
        rows.extend(
            classify_range(store, &context, start_date, end_date, today)?
                .into_iter()
                .filter(|day| day.record.is_some())
                .map(|day| to_row(&context, day)),
        );
    }
    sort_by_date_then_employee(&mut rows);

    info!(
        start_date = %start_date,
        end_date = %end_date,
        employees = employees.len(),
        rows = rows.len(),
        "Built company report"
    );
    Ok(rows)
}
