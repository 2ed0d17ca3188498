//! Employee model.
//!
//! Employees are owned by the external HR records layer; the engine only
//! reads the fields that affect schedule resolution and reporting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee whose attendance is being reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    #[serde(default)]
    pub full_name: String,
    /// The department the employee belongs to.
    pub department_id: String,
    /// Explicit schedule assignment, overriding the department default.
    #[serde(default)]
    pub work_schedule_id: Option<String>,
    /// The first day the employee is expected to attend.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Returns true if `date` falls before the employee's hire date.
    ///
    /// Such dates are excluded from reporting rather than counted as absences.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     full_name: "Ada Lovelace".to_string(),
    ///     department_id: "dept_eng".to_string(),
    ///     work_schedule_id: None,
    ///     hire_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    /// };
    /// assert!(employee.is_before_hire(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()));
    /// assert!(!employee.is_before_hire(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()));
    /// ```
    pub fn is_before_hire(&self, date: NaiveDate) -> bool {
        date < self.hire_date
    }
}
