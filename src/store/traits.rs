//! Store traits.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{Attendance, CalendarEntry, Employee, WorkSchedule};

/// Employee records.
pub trait EmployeeLookup {
    /// Returns the employee with the given id.
    fn get_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// Returns every employee of a department.
    fn find_employees_by_department(&self, department_id: &str) -> EngineResult<Vec<Employee>>;

    /// Returns every employee, in no particular order.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;
}

/// Work schedules.
pub trait ScheduleStore {
    /// Returns the schedule with the given id.
    fn find_schedule_by_id(&self, schedule_id: &str) -> EngineResult<Option<WorkSchedule>>;

    /// Returns every schedule owned by a department, in no particular order.
    fn find_schedules_by_department(&self, department_id: &str)
    -> EngineResult<Vec<WorkSchedule>>;

    /// Returns the schedule explicitly assigned to an employee.
    fn find_employee_override(&self, employee_id: &str) -> EngineResult<Option<WorkSchedule>>;

    /// Returns the schedule flagged as the system default.
    fn find_system_default(&self) -> EngineResult<Option<WorkSchedule>>;
}

/// Work calendar entries.
pub trait CalendarStore {
    /// Returns the entry dated exactly `date`, recurring or not.
    fn find_exact(&self, date: NaiveDate) -> EngineResult<Option<CalendarEntry>>;

    /// Returns every recurring entry on the given month and day, in no particular order.
    fn find_recurring(&self, month: u32, day: u32) -> EngineResult<Vec<CalendarEntry>>;
}

/// Attendance records.
pub trait AttendanceStore {
    /// Returns the record for an employee on a day.
    fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<Attendance>>;
}

/// Every store the engine reads from, shareable across threads.
///
/// Implemented automatically for any type providing all four traits.
pub trait EngineStore:
    EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + Send + Sync
{
}

impl<T> EngineStore for T where
    T: EmployeeLookup + ScheduleStore + CalendarStore + AttendanceStore + Send + Sync
{
}
