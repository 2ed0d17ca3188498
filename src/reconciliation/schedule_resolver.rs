//! Effective schedule resolution.
//!
//! An employee's effective schedule is, in order: their explicit override,
//! their department's schedule, or the system default. When a department
//! owns several schedules the one with the lowest id is used.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{Employee, WorkSchedule};
use crate::store::{EmployeeLookup, ScheduleStore};

/// Where an effective schedule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSource {
    /// Assigned directly to the employee.
    EmployeeOverride,
    /// Owned by the employee's department.
    Department,
    /// The system-wide fallback.
    SystemDefault,
}

impl std::fmt::Display for ScheduleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleSource::EmployeeOverride => write!(f, "Employee override"),
            ScheduleSource::Department => write!(f, "Department"),
            ScheduleSource::SystemDefault => write!(f, "System default"),
        }
    }
}

/// A schedule together with the rule that selected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSchedule {
    /// The effective schedule.
    pub schedule: WorkSchedule,
    /// Which resolution step produced it.
    pub source: ScheduleSource,
}

/// Resolves the effective schedule for an employee id.
///
/// Returns `Ok(None)` for an unknown employee, or when no override,
/// department schedule or system default exists. Callers treat `None` as
/// "no schedule known", which makes every date a non-working day.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Department, Employee, WorkSchedule, WorkingDays};
/// use attendance_engine::reconciliation::resolve_schedule;
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
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
/// })?;
///
/// let schedule = resolve_schedule(&store, "emp_001")?.unwrap();
/// assert_eq!(schedule.id, "sched_default");
/// assert!(resolve_schedule(&store, "emp_404")?.is_none());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
pub fn resolve_schedule<S>(store: &S, employee_id: &str) -> EngineResult<Option<WorkSchedule>>
where
    S: EmployeeLookup + ScheduleStore + ?Sized,
{
    Ok(resolve_schedule_with_source(store, employee_id)?.map(|resolved| resolved.schedule))
}

/// Resolves the effective schedule for an employee id, reporting its source.
pub fn resolve_schedule_with_source<S>(
    store: &S,
    employee_id: &str,
) -> EngineResult<Option<ResolvedSchedule>>
where
    S: EmployeeLookup + ScheduleStore + ?Sized,
{
    match store.get_employee(employee_id)? {
        Some(employee) => resolve_for_employee(store, &employee),
        None => {
            debug!(employee_id = %employee_id, "Unknown employee, no schedule resolved");
            Ok(None)
        }
    }
}

/// Resolves the effective schedule for an already loaded employee.
pub fn resolve_for_employee<S>(
    store: &S,
    employee: &Employee,
) -> EngineResult<Option<ResolvedSchedule>>
where
    S: ScheduleStore + ?Sized,
{
    let resolved = if let Some(schedule) = store.find_employee_override(&employee.id)? {
        Some(ResolvedSchedule {
            schedule,
            source: ScheduleSource::EmployeeOverride,
        })
    } else if let Some(schedule) = store
        .find_schedules_by_department(&employee.department_id)?
        .into_iter()
        .min_by(|a, b| a.id.cmp(&b.id))
    {
        Some(ResolvedSchedule {
            schedule,
            source: ScheduleSource::Department,
        })
    } else {
        store
            .find_system_default()?
            .map(|schedule| ResolvedSchedule {
                schedule,
                source: ScheduleSource::SystemDefault,
            })
    };

    match &resolved {
        Some(r) => {
            debug!(
                employee_id = %employee.id,
                schedule_id = %r.schedule.id,
                source = %r.source,
                "Resolved work schedule"
            );
            if r.schedule.end_time <= r.schedule.start_time {
                warn!(
                    schedule_id = %r.schedule.id,
                    start_time = %r.schedule.start_time,
                    end_time = %r.schedule.end_time,
                    "Schedule ends at or before it starts"
                );
            }
        }
        None => debug!(employee_id = %employee.id, "No schedule available"),
    }

    Ok(resolved)
}
