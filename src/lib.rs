//! Pay Cycle Engine for HR Attendance Dashboards
//!
//! This crate provides functionality for resolving pay cycle calendars and
//! per-day employee statuses from attendance, holiday, and leave records.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
