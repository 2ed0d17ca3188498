//! Data directory loading.
//!
//! This module provides the [`ConfigLoader`] type for reading departments,
//! schedules, calendar entries, employees and attendance records from YAML
//! files into an in-memory store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::store::InMemoryStore;

use super::types::{AttendanceFile, CalendarFile, DepartmentsFile, EmployeesFile, SchedulesFile};

/// Loads a data directory and owns the resulting store.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── departments.yaml   # departments: [...]
/// ├── schedules.yaml     # schedules: [...]
/// ├── calendar.yaml      # entries: [...]
/// ├── employees.yaml     # employees: [...]
/// └── attendance/        # optional, every *.yaml holds records: [...]
///     └── 2026-01.yaml
/// ```
///
/// Files are applied in that order, so schedules and employees can refer to
/// departments loaded before them.
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::reconciliation::resolve_schedule;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let schedule = resolve_schedule(loader.store(), "emp_001")?;
/// println!("Effective schedule: {:?}", schedule.map(|s| s.name));
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    store: InMemoryStore,
}

impl ConfigLoader {
    /// Loads every data file from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - A required file is missing (`ConfigNotFound`)
    /// - A file contains invalid YAML or unknown values (`ConfigParseError`)
    /// - The data breaks a store invariant, such as two system default
    ///   schedules (`Conflict`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let mut store = InMemoryStore::new();

        let departments = Self::load_yaml::<DepartmentsFile>(&path.join("departments.yaml"))?;
        for department in departments.departments {
            store.insert_department(department)?;
        }

        let schedules = Self::load_yaml::<SchedulesFile>(&path.join("schedules.yaml"))?;
        for schedule in schedules.schedules {
            store.insert_schedule(schedule)?;
        }

        let calendar = Self::load_yaml::<CalendarFile>(&path.join("calendar.yaml"))?;
        for entry in calendar.entries {
            store.insert_calendar_entry(entry)?;
        }

        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;
        for employee in employees.employees {
            store.insert_employee(employee)?;
        }

        for file in Self::attendance_files(&path.join("attendance"))? {
            let attendance = Self::load_yaml::<AttendanceFile>(&file)?;
            debug!(
                file = %file.display(),
                records = attendance.records.len(),
                "Loaded attendance file"
            );
            for record in attendance.records {
                store.insert_attendance(record)?;
            }
        }

        info!(
            path = %path.display(),
            employees = store.employee_count(),
            attendance_records = store.attendance_count(),
            "Loaded attendance data"
        );

        Ok(Self { store })
    }

    /// Wraps an already populated store.
    pub fn from_store(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Lists the attendance files in name order. A missing directory means no records.
    fn attendance_files(dir: &Path) -> EngineResult<Vec<PathBuf>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let dir_str = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Returns the loaded store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Consumes the loader, returning the store.
    pub fn into_store(self) -> InMemoryStore {
        self.store
    }
}
