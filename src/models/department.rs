//! Department model.

use serde::{Deserialize, Serialize};

/// An organisational unit every employee belongs to.
///
/// Schedules may name a department as their owner, which makes them a
/// candidate default for that department's employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// The display name of the department.
    pub name: String,
}
