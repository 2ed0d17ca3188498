//! Work calendar entries.
//!
//! Calendar entries are global overrides on specific dates (holidays, company
//! closures, short days). A recurring entry reapplies every year on the same
//! month and day.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The kind of override a calendar entry applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEntryType {
    /// Official holiday.
    Holiday,
    /// Other non-working day (company event, maintenance).
    NonWorkingDay,
    /// Working day with reduced hours.
    ///
    /// Treated as a full working day; no hour reduction is applied.
    ShortDay,
}

impl std::fmt::Display for CalendarEntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarEntryType::Holiday => write!(f, "Holiday"),
            CalendarEntryType::NonWorkingDay => write!(f, "Non-working day"),
            CalendarEntryType::ShortDay => write!(f, "Short day"),
        }
    }
}

/// A dated override in the work calendar.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{CalendarEntry, CalendarEntryType};
/// use chrono::NaiveDate;
///
/// let new_year = CalendarEntry {
///     id: "cal_new_year".to_string(),
///     date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     name: "New Year's Day".to_string(),
///     description: String::new(),
///     entry_type: CalendarEntryType::Holiday,
///     is_recurring_annually: true,
/// };
///
/// assert!(new_year.matches_recurring(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
/// assert!(new_year.is_non_working());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Unique identifier for the entry.
    pub id: String,
    /// The date the entry applies to (only month and day matter when recurring).
    pub date: NaiveDate,
    /// The display name (e.g. "New Year's Day").
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// The kind of override.
    pub entry_type: CalendarEntryType,
    /// Reapply every year on the same month and day.
    #[serde(default)]
    pub is_recurring_annually: bool,
}

impl CalendarEntry {
    /// Returns true if this entry removes the date from the working calendar.
    pub fn is_non_working(&self) -> bool {
        matches!(
            self.entry_type,
            CalendarEntryType::Holiday | CalendarEntryType::NonWorkingDay
        )
    }

    /// Returns true if the entry is recurring and falls on the same month and day as `date`.
    pub fn matches_recurring(&self, date: NaiveDate) -> bool {
        self.is_recurring_annually && self.month_day() == (date.month(), date.day())
    }

    /// The (month, day) pair of the entry's date.
    pub fn month_day(&self) -> (u32, u32) {
        (self.date.month(), self.date.day())
    }
}
