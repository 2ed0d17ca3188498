//! Loading bootstrap data for the attendance engine.
//!
//! A data directory of YAML files is read into an
//! [`InMemoryStore`](crate::store::InMemoryStore) that the engine and the HTTP
//! API run against.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded {} employees", config.store().employee_count());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceFile, CalendarFile, DepartmentsFile, EmployeesFile, SchedulesFile};
