//! Schedule resolution, calendar policy and attendance classification.
//!
//! Every operation here is a free function over the store traits in
//! [`crate::store`]. Nothing reads the clock: operations that care whether a
//! day is in the future take `today` as an argument.

mod calendar_oracle;
mod day_classifier;
mod range_aggregator;
mod report;
mod schedule_resolver;
mod window;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use calendar_oracle::{find_calendar_entry, is_working_date, is_working_date_for_employee};
pub use day_classifier::{EmployeeContext, classify_day, classify_with_context};
pub use range_aggregator::{aggregate_statistics, department_statistics};
pub use report::{company_report, department_report, employee_report};
pub use schedule_resolver::{
    ResolvedSchedule, ScheduleSource, resolve_for_employee, resolve_schedule,
    resolve_schedule_with_source,
};
pub use window::{
    ExpectedWindow, expected_window, expected_work_hours, expected_work_hours_for_employee,
};
