//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct representing one
//! employee's presence on one day, together with any recorded overtime.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an attendance record for one employee on one day.
///
/// The record's existence is what marks the employee present on `date`.
/// `overtime` holds the recorded overtime for that day; values of zero or
/// below mean no overtime was recorded (upstream systems use negative
/// markers for "present, nothing recorded") and are never summed.
///
/// # Example
///
/// ```
/// use paycycle_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
///     overtime: Decimal::new(2, 0),
/// };
/// assert!(record.has_overtime());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The ID of the employee this record belongs to.
    pub employee_id: String,
    /// The day the employee attended.
    pub date: NaiveDate,
    /// Recorded overtime for the day; `<= 0` means none recorded.
    #[serde(default)]
    pub overtime: Decimal,
}

impl AttendanceRecord {
    /// Returns true if the record carries actual overtime (`overtime > 0`).
    pub fn has_overtime(&self) -> bool {
        self.overtime > Decimal::ZERO
    }
}
