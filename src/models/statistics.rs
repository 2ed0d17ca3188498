//! Range statistics and report rows.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayClassification, DayStatus};

/// Summary of an employee's attendance over an inclusive date range.
///
/// `days_present`, `days_absent` and `days_scheduled` partition
/// `total_working_days`: present when a check-in exists, scheduled when the
/// day has not happened yet, absent otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStatistics {
    /// The employee the statistics are for.
    pub employee_id: String,
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Days the employee was expected to work.
    pub total_working_days: u32,
    /// Working days with a check-in.
    pub days_present: u32,
    /// Past working days without a check-in.
    pub days_absent: u32,
    /// Future working days without a check-in.
    pub days_scheduled: u32,
    /// Days with a late check-in.
    pub late_arrivals: u32,
    /// Days with an early check-out.
    pub early_departures: u32,
    /// Calendar holidays and non-working days.
    pub holidays: u32,
    /// Days outside the employee's weekly pattern (excluding holidays).
    pub non_working_days: u32,
    /// Days whose record is missing a check-in or check-out.
    pub incomplete_days: u32,
    /// Days where worked hours exceeded expected hours.
    pub overtime_days: u32,
    /// Sum of worked hours over complete records.
    pub total_worked_hours: Decimal,
    /// `days_present / total_working_days * 100`, 0 when there are no working days.
    pub attendance_percentage: Decimal,
    /// `(days_present - late_arrivals) / days_present * 100`, 0 when nobody was present.
    pub punctuality_percentage: Decimal,
}

impl AttendanceStatistics {
    /// Creates empty statistics for a range.
    pub fn new(employee_id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.into(),
            start_date,
            end_date,
            total_working_days: 0,
            days_present: 0,
            days_absent: 0,
            days_scheduled: 0,
            late_arrivals: 0,
            early_departures: 0,
            holidays: 0,
            non_working_days: 0,
            incomplete_days: 0,
            overtime_days: 0,
            total_worked_hours: Decimal::ZERO,
            attendance_percentage: Decimal::ZERO,
            punctuality_percentage: Decimal::ZERO,
        }
    }

    /// Folds one classified day into the counters.
    ///
    /// `has_check_in` reports whether the day's attendance record carries a
    /// check-in. Derived rates are refreshed after every call.
    pub fn record(&mut self, day: &DayClassification, has_check_in: bool) {
        if day.is_holiday {
            self.holidays += 1;
        } else if day.is_non_working_day {
            self.non_working_days += 1;
        }

        if day.is_working_day() {
            self.total_working_days += 1;
            if has_check_in {
                self.days_present += 1;
            } else if day.status == DayStatus::Scheduled {
                self.days_scheduled += 1;
            } else {
                self.days_absent += 1;
            }
        }

        if day.is_late {
            self.late_arrivals += 1;
        }
        if day.is_early_departure {
            self.early_departures += 1;
        }
        if day.is_overtime {
            self.overtime_days += 1;
        }
        if day.status == DayStatus::Incomplete {
            self.incomplete_days += 1;
        }
        if let Some(hours) = day.worked_hours {
            self.total_worked_hours += hours;
        }

        self.attendance_percentage = percentage(self.days_present, self.total_working_days);
        self.punctuality_percentage = percentage(
            self.days_present.saturating_sub(self.late_arrivals),
            self.days_present,
        );
    }
}

/// Returns `numerator / denominator * 100` rounded to two places, or 0 for an empty denominator.
fn percentage(numerator: u32, denominator: u32) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(numerator) * Decimal::ONE_HUNDRED / Decimal::from(denominator)).round_dp(2)
}

/// One row of an attendance report: an employee's classified day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// The employee the row belongs to.
    pub employee_id: String,
    /// The employee's department, `None` for an unknown employee.
    pub department_id: Option<String>,
    /// The reported day.
    pub date: NaiveDate,
    /// Recorded check-in, if any.
    pub check_in: Option<NaiveDateTime>,
    /// Recorded check-out, if any.
    pub check_out: Option<NaiveDateTime>,
    /// Notes attached to the record.
    pub notes: String,
    /// How the day was classified.
    pub classification: DayClassification,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_day(status: DayStatus) -> DayClassification {
        DayClassification {
            date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            status,
            is_late: status == DayStatus::LateArrival,
            is_early_departure: status == DayStatus::EarlyDeparture,
            is_holiday: status == DayStatus::Holiday,
            is_non_working_day: matches!(status, DayStatus::Holiday | DayStatus::NonWorkingDay),
            is_overtime: false,
            worked_hours: if status.is_attended() {
                Some(dec("8"))
            } else {
                None
            },
            expected_hours: dec("8"),
        }
    }

    fn empty_stats() -> AttendanceStatistics {
        AttendanceStatistics::new(
            "emp_001",
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
        )
    }

    #[test]
    fn test_percentage_with_zero_denominator_is_zero() {
        assert_eq!(percentage(0, 0), Decimal::ZERO);
        assert_eq!(percentage(3, 0), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_rounds_to_two_places() {
        assert_eq!(percentage(1, 3), dec("33.33"));
        assert_eq!(percentage(2, 3), dec("66.67"));
        assert_eq!(percentage(5, 5), dec("100"));
    }

    #[test]
    fn test_holiday_counts_once_and_is_not_a_working_day() {
        let mut stats = empty_stats();
        stats.record(&make_day(DayStatus::Holiday), false);

        assert_eq!(stats.holidays, 1);
        assert_eq!(stats.non_working_days, 0);
        assert_eq!(stats.total_working_days, 0);
        assert_eq!(stats.days_absent, 0);
    }

    #[test]
    fn test_present_late_and_absent_partition_working_days() {
        let mut stats = empty_stats();
        stats.record(&make_day(DayStatus::Present), true);
        stats.record(&make_day(DayStatus::LateArrival), true);
        stats.record(&make_day(DayStatus::Absent), false);
        stats.record(&make_day(DayStatus::Scheduled), false);

        assert_eq!(stats.total_working_days, 4);
        assert_eq!(stats.days_present, 2);
        assert_eq!(stats.days_absent, 1);
        assert_eq!(stats.days_scheduled, 1);
        assert_eq!(stats.late_arrivals, 1);
        assert_eq!(stats.attendance_percentage, dec("50"));
        assert_eq!(stats.punctuality_percentage, dec("50"));
        assert_eq!(stats.total_worked_hours, dec("16"));
    }

    #[test]
    fn test_incomplete_with_check_in_counts_as_present() {
        let mut stats = empty_stats();
        stats.record(&make_day(DayStatus::Incomplete), true);

        assert_eq!(stats.days_present, 1);
        assert_eq!(stats.incomplete_days, 1);
        assert_eq!(stats.total_worked_hours, Decimal::ZERO);
    }
}
