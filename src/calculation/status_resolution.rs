//! Day status resolution.
//!
//! This module gathers the facts known about an employee's day and
//! resolves them into a single [`DayStatus`] through a fixed priority
//! order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, DayStatus, HolidayCalendar, LeaveRecord};

/// The facts that determine one day's status.
///
/// Exactly these three facts feed resolution; anything else about the day
/// (overtime hours, leave duration, approval status) does not change the
/// full-day outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFacts {
    /// An attendance record exists for this day.
    pub has_attendance: bool,
    /// The day is a listed holiday.
    pub is_holiday: bool,
    /// A paid leave record covers this day.
    pub has_paid_leave: bool,
}

/// Gathers the day facts for one employee on one date.
///
/// # Arguments
///
/// * `day` - The date being resolved
/// * `holidays` - The holiday calendar in effect
/// * `attendance` - The employee's attendance record for the day, if any
/// * `leaves` - All of the employee's leave records
///
/// # Behavior
///
/// An attendance record only counts when its date matches `day`; a
/// mismatched record is ignored rather than trusted. Only paid leave
/// records that cover `day` set `has_paid_leave`; unpaid leave leaves the
/// facts unchanged, so covered days fall through to absence.
pub fn collect_day_facts(
    day: NaiveDate,
    holidays: &HolidayCalendar,
    attendance: Option<&AttendanceRecord>,
    leaves: &[LeaveRecord],
) -> DayFacts {
    DayFacts {
        has_attendance: attendance.is_some_and(|record| record.date == day),
        is_holiday: holidays.contains(day),
        has_paid_leave: leaves
            .iter()
            .any(|leave| leave.is_paid() && leave.covers(day)),
    }
}

/// Resolves one employee's status for one date.
///
/// The priority order is fixed: attendance on a holiday wins over plain
/// attendance, attendance wins over the holiday alone, the holiday wins
/// over paid leave, and paid leave wins over absence. Every combination of
/// facts resolves; there is no error case.
///
/// # Example
///
/// ```
/// use paycycle_engine::calculation::resolve_day_status;
/// use paycycle_engine::models::{DayStatus, Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let holidays = HolidayCalendar::from_holidays(&[Holiday {
///     date: day,
///     name: "Founding Day".to_string(),
/// }]);
///
/// let status = resolve_day_status(day, &holidays, None, &[]);
/// assert_eq!(status, DayStatus::Offday);
/// ```
pub fn resolve_day_status(
    day: NaiveDate,
    holidays: &HolidayCalendar,
    attendance: Option<&AttendanceRecord>,
    leaves: &[LeaveRecord],
) -> DayStatus {
    let facts = collect_day_facts(day, holidays, attendance, leaves);

    match (facts.has_attendance, facts.is_holiday, facts.has_paid_leave) {
        (true, true, _) => DayStatus::OffdayAttendance,
        (true, false, _) => DayStatus::Present,
        (false, true, _) => DayStatus::Offday,
        (false, false, true) => DayStatus::PaidLeave,
        (false, false, false) => DayStatus::Absent,
    }
}
