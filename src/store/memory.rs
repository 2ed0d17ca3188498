//! In-memory store.
//!
//! Backs the engine for loaded data directories, tests and benchmarks. Writes
//! are explicit inserts that check store invariants up front and reject
//! conflicting records with [`EngineError::Conflict`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, CalendarEntry, Department, Employee, WorkSchedule};

use super::traits::{AttendanceStore, CalendarStore, EmployeeLookup, ScheduleStore};

/// An in-memory implementation of every engine store.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Department, Employee};
/// use attendance_engine::store::{EmployeeLookup, InMemoryStore};
/// use chrono::NaiveDate;
///
/// let mut store = InMemoryStore::new();
/// store.insert_department(Department {
///     id: "dept_eng".to_string(),
///     name: "Engineering".to_string(),
/// })?;
/// store.insert_employee(Employee {
///     id: "emp_001".to_string(),
///     full_name: "Ada Lovelace".to_string(),
///     department_id: "dept_eng".to_string(),
///     work_schedule_id: None,
///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
/// })?;
///
/// assert!(store.get_employee("emp_001")?.is_some());
/// assert!(store.get_employee("emp_404")?.is_none());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    departments: BTreeMap<String, Department>,
    employees: BTreeMap<String, Employee>,
    schedules: BTreeMap<String, WorkSchedule>,
    calendar: BTreeMap<String, CalendarEntry>,
    attendance: BTreeMap<(String, NaiveDate), Attendance>,
}

fn conflict(entity: &str, message: String) -> EngineError {
    EngineError::Conflict {
        entity: entity.to_string(),
        message,
    }
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a department.
    pub fn insert_department(&mut self, department: Department) -> EngineResult<()> {
        if self.departments.contains_key(&department.id) {
            return Err(conflict(
                "department",
                format!("id '{}' already exists", department.id),
            ));
        }
        self.departments.insert(department.id.clone(), department);
        Ok(())
    }

    /// Adds a schedule.
    ///
    /// Rejects a second system default and references to unknown departments.
    pub fn insert_schedule(&mut self, schedule: WorkSchedule) -> EngineResult<()> {
        if self.schedules.contains_key(&schedule.id) {
            return Err(conflict(
                "schedule",
                format!("id '{}' already exists", schedule.id),
            ));
        }
        if schedule.is_system_default {
            if let Some(existing) = self.schedules.values().find(|s| s.is_system_default) {
                return Err(conflict(
                    "schedule",
                    format!(
                        "'{}' cannot be the system default, '{}' already is",
                        schedule.id, existing.id
                    ),
                ));
            }
        }
        if let Some(department_id) = &schedule.department_id {
            if !self.departments.contains_key(department_id) {
                return Err(conflict(
                    "schedule",
                    format!(
                        "'{}' references unknown department '{}'",
                        schedule.id, department_id
                    ),
                ));
            }
        }
        self.schedules.insert(schedule.id.clone(), schedule);
        Ok(())
    }

    /// Adds a calendar entry.
    ///
    /// Recurring entries must be unique per (month, day).
    pub fn insert_calendar_entry(&mut self, entry: CalendarEntry) -> EngineResult<()> {
        if self.calendar.contains_key(&entry.id) {
            return Err(conflict(
                "calendar entry",
                format!("id '{}' already exists", entry.id),
            ));
        }
        if entry.is_recurring_annually {
            let month_day = entry.month_day();
            if let Some(existing) = self
                .calendar
                .values()
                .find(|e| e.matches_recurring(entry.date))
            {
                return Err(conflict(
                    "calendar entry",
                    format!(
                        "'{}' recurs on {:02}-{:02} like '{}'",
                        entry.id, month_day.0, month_day.1, existing.id
                    ),
                ));
            }
        }
        self.calendar.insert(entry.id.clone(), entry);
        Ok(())
    }

    /// Adds an employee, who must belong to a known department.
    pub fn insert_employee(&mut self, employee: Employee) -> EngineResult<()> {
        if self.employees.contains_key(&employee.id) {
            return Err(conflict(
                "employee",
                format!("id '{}' already exists", employee.id),
            ));
        }
        if !self.departments.contains_key(&employee.department_id) {
            return Err(conflict(
                "employee",
                format!(
                    "'{}' references unknown department '{}'",
                    employee.id, employee.department_id
                ),
            ));
        }
        self.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    /// Adds an attendance record.
    ///
    /// Looks up the (employee, date) pair first; a second record for the same
    /// pair is rejected.
    pub fn insert_attendance(&mut self, record: Attendance) -> EngineResult<()> {
        let key = (record.employee_id.clone(), record.date);
        if let Some(existing) = self.attendance.get(&key) {
            return Err(conflict(
                "attendance",
                format!(
                    "'{}' duplicates '{}' for employee '{}' on {}",
                    record.id, existing.id, record.employee_id, record.date
                ),
            ));
        }
        self.attendance.insert(key, record);
        Ok(())
    }

    /// Number of employees in the store.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Number of attendance records in the store.
    pub fn attendance_count(&self) -> usize {
        self.attendance.len()
    }
}

impl EmployeeLookup for InMemoryStore {
    fn get_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(employee_id).cloned())
    }

    fn find_employees_by_department(&self, department_id: &str) -> EngineResult<Vec<Employee>> {
        Ok(self
            .employees
            .values()
            .filter(|e| e.department_id == department_id)
            .cloned()
            .collect())
    }

    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.values().cloned().collect())
    }
}

impl ScheduleStore for InMemoryStore {
    fn find_schedule_by_id(&self, schedule_id: &str) -> EngineResult<Option<WorkSchedule>> {
        Ok(self.schedules.get(schedule_id).cloned())
    }

    fn find_schedules_by_department(
        &self,
        department_id: &str,
    ) -> EngineResult<Vec<WorkSchedule>> {
        Ok(self
            .schedules
            .values()
            .filter(|s| s.department_id.as_deref() == Some(department_id))
            .cloned()
            .collect())
    }

    fn find_employee_override(&self, employee_id: &str) -> EngineResult<Option<WorkSchedule>> {
        Ok(self
            .employees
            .get(employee_id)
            .and_then(|e| e.work_schedule_id.as_ref())
            .and_then(|schedule_id| self.schedules.get(schedule_id))
            .cloned())
    }

    fn find_system_default(&self) -> EngineResult<Option<WorkSchedule>> {
        Ok(self
            .schedules
            .values()
            .find(|s| s.is_system_default)
            .cloned())
    }
}

impl CalendarStore for InMemoryStore {
    fn find_exact(&self, date: NaiveDate) -> EngineResult<Option<CalendarEntry>> {
        let mut on_date = self.calendar.values().filter(|e| e.date == date);
        let first = on_date.next();
        Ok(first
            .filter(|e| e.is_recurring_annually)
            .and_then(|_| on_date.find(|e| !e.is_recurring_annually))
            .or(first)
            .cloned())
    }

    fn find_recurring(&self, month: u32, day: u32) -> EngineResult<Vec<CalendarEntry>> {
        // 2000 is a leap year, so every valid (month, day) has a date in it
        let Some(reference) = NaiveDate::from_ymd_opt(2000, month, day) else {
            return Ok(Vec::new());
        };
        Ok(self
            .calendar
            .values()
            .filter(|e| e.matches_recurring(reference))
            .cloned()
            .collect())
    }
}

impl AttendanceStore for InMemoryStore {
    fn find_by_employee_and_date(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<Attendance>> {
        Ok(self
            .attendance
            .get(&(employee_id.to_string(), date))
            .cloned())
    }
}
