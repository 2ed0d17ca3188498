//! Core data models for the Attendance Reconciliation Engine.
//!
//! This module contains the source records the engine reads (employees,
//! departments, schedules, calendar entries, attendance) and the derived
//! results it produces (classifications, statistics, report rows).

mod attendance;
mod calendar_entry;
mod classification;
mod department;
mod employee;
mod statistics;
mod work_schedule;

pub use attendance::Attendance;
pub use calendar_entry::{CalendarEntry, CalendarEntryType};
pub use classification::{DayClassification, DayStatus};
pub use department::Department;
pub use employee::Employee;
pub use statistics::{AttendanceStatistics, DayReport};
pub use work_schedule::{DEFAULT_FLEX_ALLOWANCE_MINUTES, WorkSchedule, WorkingDays};
