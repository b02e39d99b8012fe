//! Day status model for the Pay Cycle Engine.
//!
//! This module defines the [`DayStatus`] enum, the per-day outcome of
//! status resolution, together with its short display codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The resolved status of one employee on one day.
///
/// Every day of a pay cycle resolves to exactly one status. Unpaid leave
/// has no status of its own; days covered only by unpaid leave resolve to
/// [`DayStatus::Absent`].
///
/// # Example
///
/// ```
/// use paycycle_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::Present.code(), "P");
/// assert_eq!(DayStatus::OffdayAttendance.code(), "OA");
/// assert_eq!(DayStatus::PaidLeave.to_string(), "L");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Attendance recorded on a working day.
    Present,
    /// No attendance, holiday, or covering paid leave.
    Absent,
    /// Holiday without attendance.
    Offday,
    /// Covered by paid leave without attendance or holiday.
    PaidLeave,
    /// Attendance recorded on a holiday.
    OffdayAttendance,
}

impl DayStatus {
    /// Returns the short display code used in status grids.
    pub fn code(&self) -> &'static str {
        match self {
            DayStatus::Present => "P",
            DayStatus::Absent => "A",
            DayStatus::Offday => "O",
            DayStatus::PaidLeave => "L",
            DayStatus::OffdayAttendance => "OA",
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
