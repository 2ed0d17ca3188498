//! Work schedule model.
//!
//! A [`WorkSchedule`] describes a single daily working window, the weekdays
//! it applies to and the grace period allowed on check-in.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Grace period applied to check-ins when a schedule does not specify one.
pub const DEFAULT_FLEX_ALLOWANCE_MINUTES: u32 = 15;

fn default_flex_allowance() -> u32 {
    DEFAULT_FLEX_ALLOWANCE_MINUTES
}

/// One working-day flag per weekday.
///
/// Defaults to Monday through Friday.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkingDays;
/// use chrono::Weekday;
///
/// let days = WorkingDays::default();
/// assert!(days.is_working_day(Weekday::Mon));
/// assert!(!days.is_working_day(Weekday::Sat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingDays {
    /// Sunday is a working day.
    pub sunday: bool,
    /// Monday is a working day.
    pub monday: bool,
    /// Tuesday is a working day.
    pub tuesday: bool,
    /// Wednesday is a working day.
    pub wednesday: bool,
    /// Thursday is a working day.
    pub thursday: bool,
    /// Friday is a working day.
    pub friday: bool,
    /// Saturday is a working day.
    pub saturday: bool,
}

impl Default for WorkingDays {
    fn default() -> Self {
        Self {
            sunday: false,
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
        }
    }
}

impl WorkingDays {
    /// Every day of the week off.
    pub const NONE: WorkingDays = WorkingDays {
        sunday: false,
        monday: false,
        tuesday: false,
        wednesday: false,
        thursday: false,
        friday: false,
        saturday: false,
    };

    /// Returns the flag for the given weekday.
    pub fn is_working_day(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
        }
    }

    /// Number of working days in a week.
    pub fn count(&self) -> usize {
        [
            self.sunday,
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
        ]
        .iter()
        .filter(|flag| **flag)
        .count()
    }
}

/// A weekly work pattern with a single daily window.
///
/// Start and end are naive local times on the same day; overnight windows
/// are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Unique identifier for the schedule.
    pub id: String,
    /// The display name of the schedule.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Scheduled start of the working day.
    pub start_time: NaiveTime,
    /// Scheduled end of the working day.
    pub end_time: NaiveTime,
    /// Which weekdays the schedule applies to.
    #[serde(default)]
    pub working_days: WorkingDays,
    /// Minutes after `start_time` during which a check-in is not late.
    ///
    /// Never applied to check-out.
    #[serde(default = "default_flex_allowance")]
    pub flex_allowance_minutes: u32,
    /// The department this schedule is the default for, if any.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Marks the single schedule used when nothing more specific applies.
    #[serde(default)]
    pub is_system_default: bool,
}

impl WorkSchedule {
    /// Returns true if the schedule's weekday pattern covers `date`.
    ///
    /// Calendar overrides are not considered here.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{WorkSchedule, WorkingDays};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let schedule = WorkSchedule {
    ///     id: "sched_std".to_string(),
    ///     name: "Standard".to_string(),
    ///     description: String::new(),
    ///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    ///     working_days: WorkingDays::default(),
    ///     flex_allowance_minutes: 15,
    ///     department_id: None,
    ///     is_system_default: true,
    /// };
    ///
    /// // 2026-01-14 is a Wednesday, 2026-01-17 a Saturday
    /// assert!(schedule.is_working_day(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()));
    /// assert!(!schedule.is_working_day(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
    /// ```
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_days.is_working_day(date.weekday())
    }
}
