//! File layouts for the YAML data directory.
//!
//! Each file wraps its list under a single top-level key so that files stay
//! self-describing and can grow extra metadata later.

use serde::Deserialize;

use crate::models::{Attendance, CalendarEntry, Department, Employee, WorkSchedule};

/// `departments.yaml`
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsFile {
    /// All departments.
    pub departments: Vec<Department>,
}

/// `schedules.yaml`
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulesFile {
    /// All work schedules, including the system default.
    pub schedules: Vec<WorkSchedule>,
}

/// `calendar.yaml`
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarFile {
    /// Holidays, closures and short days.
    #[serde(default)]
    pub entries: Vec<CalendarEntry>,
}

/// `employees.yaml`
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// All employees.
    pub employees: Vec<Employee>,
}

/// One file under `attendance/`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// Check-in/check-out records.
    #[serde(default)]
    pub records: Vec<Attendance>,
}
