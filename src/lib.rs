//! Attendance Reconciliation Engine
//!
//! This crate resolves employee work schedules, decides which dates are working
//! days, and classifies recorded check-in/check-out pairs (or their absence) into
//! attendance statuses and range statistics.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconciliation;
pub mod store;
