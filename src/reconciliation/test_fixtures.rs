//! Shared builders for reconciliation unit tests.
//!
//! January 2026: the 12th is a Monday, the 17th and 18th are the weekend.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{
    Attendance, CalendarEntry, CalendarEntryType, Department, Employee, WorkSchedule, WorkingDays,
};
use crate::store::InMemoryStore;

pub(crate) fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub(crate) fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
        .unwrap()
}

pub(crate) fn make_time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 09:00-17:00, Monday to Friday, 15 minutes grace.
pub(crate) fn standard_schedule(id: &str) -> WorkSchedule {
    WorkSchedule {
        id: id.to_string(),
        name: "Standard office hours".to_string(),
        description: String::new(),
        start_time: make_time(9, 0),
        end_time: make_time(17, 0),
        working_days: WorkingDays::default(),
        flex_allowance_minutes: 15,
        department_id: None,
        is_system_default: false,
    }
}

pub(crate) fn make_record(
    employee_id: &str,
    date: &str,
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> Attendance {
    Attendance {
        id: format!("att_{}_{}", employee_id, date),
        employee_id: employee_id.to_string(),
        date: make_date(date),
        check_in: check_in.map(|t| make_datetime(date, t)),
        check_out: check_out.map(|t| make_datetime(date, t)),
        notes: String::new(),
    }
}

fn department(id: &str, name: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn employee(id: &str, department_id: &str, schedule_id: Option<&str>, hire: &str) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: id.to_string(),
        department_id: department_id.to_string(),
        work_schedule_id: schedule_id.map(str::to_string),
        hire_date: make_date(hire),
    }
}

fn calendar_entry(
    id: &str,
    date: &str,
    entry_type: CalendarEntryType,
    recurring: bool,
) -> CalendarEntry {
    CalendarEntry {
        id: id.to_string(),
        date: make_date(date),
        name: id.to_string(),
        description: String::new(),
        entry_type,
        is_recurring_annually: recurring,
    }
}

/// A small organisation:
///
/// - `emp_eng` (Engineering, no department schedule) falls back to `sched_default`
/// - `emp_ops` (Operations) gets `sched_ops`, the lower id of two department schedules
/// - `emp_early` (Engineering) has the `sched_early` override (06:00-14:00 Mon-Thu, no grace)
/// - `emp_new` (Engineering) was hired on 2026-01-14
///
/// Calendar: New Year's Day recurs, 2026-01-16 is a one-off closure and
/// 2026-01-15 is a short day.
pub(crate) fn sample_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();

    store
        .insert_department(department("dept_eng", "Engineering"))
        .unwrap();
    store
        .insert_department(department("dept_ops", "Operations"))
        .unwrap();

    let mut default = standard_schedule("sched_default");
    default.is_system_default = true;
    store.insert_schedule(default).unwrap();

    let mut ops = standard_schedule("sched_ops");
    ops.name = "Operations floor".to_string();
    ops.start_time = make_time(7, 0);
    ops.end_time = make_time(15, 0);
    ops.flex_allowance_minutes = 10;
    ops.working_days.saturday = true;
    ops.department_id = Some("dept_ops".to_string());
    store.insert_schedule(ops).unwrap();

    let mut ops_late = standard_schedule("sched_ops_late");
    ops_late.start_time = make_time(10, 0);
    ops_late.end_time = make_time(18, 0);
    ops_late.department_id = Some("dept_ops".to_string());
    store.insert_schedule(ops_late).unwrap();

    let mut early = standard_schedule("sched_early");
    early.start_time = make_time(6, 0);
    early.end_time = make_time(14, 0);
    early.flex_allowance_minutes = 0;
    early.working_days.friday = false;
    store.insert_schedule(early).unwrap();

    store
        .insert_calendar_entry(calendar_entry(
            "cal_new_year",
            "2000-01-01",
            CalendarEntryType::Holiday,
            true,
        ))
        .unwrap();
    store
        .insert_calendar_entry(calendar_entry(
            "cal_closure",
            "2026-01-16",
            CalendarEntryType::NonWorkingDay,
            false,
        ))
        .unwrap();
    store
        .insert_calendar_entry(calendar_entry(
            "cal_short",
            "2026-01-15",
            CalendarEntryType::ShortDay,
            false,
        ))
        .unwrap();

    store
        .insert_employee(employee("emp_eng", "dept_eng", None, "2025-01-01"))
        .unwrap();
    store
        .insert_employee(employee("emp_ops", "dept_ops", None, "2025-01-01"))
        .unwrap();
    store
        .insert_employee(employee(
            "emp_early",
            "dept_eng",
            Some("sched_early"),
            "2025-01-01",
        ))
        .unwrap();
    store
        .insert_employee(employee("emp_new", "dept_eng", None, "2026-01-14"))
        .unwrap();

    store
}
