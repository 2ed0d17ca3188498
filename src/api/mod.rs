//! HTTP API for the attendance engine.
//!
//! A thin JSON surface over [`crate::reconciliation`]: every endpoint is a
//! `POST` whose body names the employee, department or dates to query.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClassifyRequest, CompanyRangeRequest, DateRangeRequest, DepartmentRangeRequest,
    EmployeeRangeRequest, MAX_RANGE_DAYS, ScheduleRequest, WorkingDayRequest,
};
pub use response::{ApiError, ClassifyResponse, ScheduleResponse, WorkingDayResponse};
pub use state::AppState;
