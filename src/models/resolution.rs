//! Resolution result models for the Pay Cycle Engine.
//!
//! This module defines the output structures of a full resolution run:
//! per-employee status rows, their totals, and the envelope that wraps
//! the whole response.

use crate::models::{CalendarDay, DayStatus, PayCycleWindow, WeekRow};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregated counts for one employee over one pay cycle.
///
/// The five day counters always sum to the number of days in the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotals {
    /// Days resolved to [`DayStatus::Present`].
    pub present_days: u32,
    /// Days resolved to [`DayStatus::Absent`].
    pub absent_days: u32,
    /// Days resolved to [`DayStatus::Offday`].
    pub offdays: u32,
    /// Days resolved to [`DayStatus::PaidLeave`].
    pub paid_leave_days: u32,
    /// Days resolved to [`DayStatus::OffdayAttendance`].
    pub offday_attendance_days: u32,
    /// Sum of positive overtime hours across the employee's attendance.
    pub total_overtime: Decimal,
}

impl StatusTotals {
    /// Tallies a sequence of resolved day statuses.
    ///
    /// # Arguments
    ///
    /// * `statuses` - One status per day of the cycle, in order
    /// * `total_overtime` - Pre-summed overtime hours for the same employee
    pub fn tally(statuses: &[DayStatus], total_overtime: Decimal) -> Self {
        let mut totals = StatusTotals {
            present_days: 0,
            absent_days: 0,
            offdays: 0,
            paid_leave_days: 0,
            offday_attendance_days: 0,
            total_overtime,
        };

        for status in statuses {
            match status {
                DayStatus::Present => totals.present_days += 1,
                DayStatus::Absent => totals.absent_days += 1,
                DayStatus::Offday => totals.offdays += 1,
                DayStatus::PaidLeave => totals.paid_leave_days += 1,
                DayStatus::OffdayAttendance => totals.offday_attendance_days += 1,
            }
        }

        totals
    }
}

/// One employee's resolved statuses for one pay cycle.
///
/// The `statuses` vector runs in window order and has exactly one entry
/// per day of the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeStatusRow {
    /// The ID of the employee.
    pub employee_id: String,
    /// The display name of the employee.
    pub employee_name: String,
    /// One resolved status per day of the cycle, in window order.
    pub statuses: Vec<DayStatus>,
    /// Aggregated counts over the cycle.
    pub totals: StatusTotals,
}

/// The complete result of resolving a roster over one pay cycle.
///
/// Carries the window, its calendar layout, and one status row per
/// requested employee, together with audit metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Unique identifier for this resolution run.
    pub resolution_id: Uuid,
    /// When the resolution was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The resolved pay cycle window.
    pub window: PayCycleWindow,
    /// Every day of the window, in order.
    pub days: Vec<CalendarDay>,
    /// The window laid out as week-aligned rows.
    pub weeks: Vec<WeekRow>,
    /// One status row per requested employee, in request order.
    pub rows: Vec<EmployeeStatusRow>,
}
