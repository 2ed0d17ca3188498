//! Read interfaces the engine consumes, and an in-memory implementation.
//!
//! Persistent storage lives outside the engine. These traits are the narrow
//! query surface it calls through; every method returns [`EngineResult`] so
//! infrastructure failures propagate to the caller unchanged. Not-found is
//! expressed as `None` or an empty list, never as an error.
//!
//! [`EngineResult`]: crate::error::EngineResult

mod memory;
mod traits;

pub use memory::InMemoryStore;
pub use traits::{AttendanceStore, CalendarStore, EmployeeLookup, EngineStore, ScheduleStore};
