//! Leave record model and related types.
//!
//! This module defines the [`LeaveRecord`] struct and its enums for
//! representing leave intervals with half-day granularity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How much of each covered day a leave record occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveDuration {
    /// The whole day is on leave.
    #[serde(rename = "fullday")]
    FullDay,
    /// Only the morning half of each covered day.
    FirstHalfday,
    /// Only the afternoon half of each covered day.
    SecondHalfday,
}

/// Whether a leave record is paid or unpaid.
///
/// Unpaid leave resolves to the same full-day status as plain absence;
/// the distinction only changes how leave cells are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Paid leave.
    Paid,
    /// Unpaid leave.
    Unpaid,
}

/// Approval state of a leave record.
///
/// Carried through from the source entity for display; resolution does not
/// filter by status, since callers pass exactly the records they want
/// considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved leave.
    Approved,
    /// Rejected leave.
    Rejected,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        LeaveStatus::Approved
    }
}

/// Represents a leave interval for one employee.
///
/// The interval is inclusive of both `from` and `to`. Records for the same
/// employee may overlap; the engine does not validate overlaps.
///
/// # Example
///
/// ```
/// use paycycle_engine::models::{LeaveDuration, LeaveKind, LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveRecord {
///     employee_id: "emp_001".to_string(),
///     from: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     to: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     duration: LeaveDuration::FullDay,
///     kind: LeaveKind::Paid,
///     status: LeaveStatus::Approved,
/// };
///
/// assert!(leave.covers(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()));
/// assert!(leave.is_paid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The ID of the employee this record belongs to.
    pub employee_id: String,
    /// The first day of the leave (inclusive).
    pub from: NaiveDate,
    /// The last day of the leave (inclusive).
    pub to: NaiveDate,
    /// How much of each covered day the leave occupies.
    pub duration: LeaveDuration,
    /// Whether the leave is paid or unpaid.
    #[serde(rename = "type")]
    pub kind: LeaveKind,
    /// Approval state of the record.
    #[serde(default)]
    pub status: LeaveStatus,
}

impl LeaveRecord {
    /// Checks if a given date falls within this leave interval.
    ///
    /// The check is inclusive of both `from` and `to`.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns true if this is paid leave.
    pub fn is_paid(&self) -> bool {
        self.kind == LeaveKind::Paid
    }

    /// Returns true if the record covers only half of each day.
    pub fn is_half_day(&self) -> bool {
        self.duration != LeaveDuration::FullDay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_leave(duration: LeaveDuration, kind: LeaveKind) -> LeaveRecord {
        LeaveRecord {
            employee_id: "emp_001".to_string(),
            from: make_date("2024-03-01"),
            to: make_date("2024-03-10"),
            duration,
            kind,
            status: LeaveStatus::Approved,
        }
    }

    #[test]
    fn test_covers_date_inside_interval() {
        let leave = create_leave(LeaveDuration::FullDay, LeaveKind::Paid);
        assert!(leave.covers(make_date("2024-03-06")));
    }

    #[test]
    fn test_covers_interval_boundaries() {
        let leave = create_leave(LeaveDuration::FullDay, LeaveKind::Paid);
        assert!(leave.covers(make_date("2024-03-01")));
        assert!(leave.covers(make_date("2024-03-10")));
    }

    #[test]
    fn test_covers_rejects_dates_outside_interval() {
        let leave = create_leave(LeaveDuration::FullDay, LeaveKind::Paid);
        assert!(!leave.covers(make_date("2024-02-29")));
        assert!(!leave.covers(make_date("2024-03-11")));
    }

    #[test]
    fn test_is_paid() {
        assert!(create_leave(LeaveDuration::FullDay, LeaveKind::Paid).is_paid());
        assert!(!create_leave(LeaveDuration::FullDay, LeaveKind::Unpaid).is_paid());
    }

    #[test]
    fn test_is_half_day() {
        assert!(!create_leave(LeaveDuration::FullDay, LeaveKind::Paid).is_half_day());
        assert!(create_leave(LeaveDuration::FirstHalfday, LeaveKind::Paid).is_half_day());
        assert!(create_leave(LeaveDuration::SecondHalfday, LeaveKind::Paid).is_half_day());
    }

    #[test]
    fn test_leave_duration_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveDuration::FullDay).unwrap(),
            "\"fullday\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveDuration::FirstHalfday).unwrap(),
            "\"first_halfday\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveDuration::SecondHalfday).unwrap(),
            "\"second_halfday\""
        );
    }

    #[test]
    fn test_leave_kind_serialization() {
        assert_eq!(serde_json::to_string(&LeaveKind::Paid).unwrap(), "\"paid\"");
        assert_eq!(
            serde_json::to_string(&LeaveKind::Unpaid).unwrap(),
            "\"unpaid\""
        );
    }

    #[test]
    fn test_deserialize_leave_record() {
        let json = r#"{
            "employee_id": "emp_001",
            "from": "2024-03-01",
            "to": "2024-03-10",
            "duration": "first_halfday",
            "type": "unpaid",
            "status": "pending"
        }"#;

        let leave: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(leave.employee_id, "emp_001");
        assert_eq!(leave.duration, LeaveDuration::FirstHalfday);
        assert_eq!(leave.kind, LeaveKind::Unpaid);
        assert_eq!(leave.status, LeaveStatus::Pending);
    }

    #[test]
    fn test_deserialize_without_status_defaults_to_approved() {
        let json = r#"{
            "employee_id": "emp_001",
            "from": "2024-03-01",
            "to": "2024-03-10",
            "duration": "fullday",
            "type": "paid"
        }"#;

        let leave: LeaveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(leave.status, LeaveStatus::Approved);
    }

    #[test]
    fn test_kind_serializes_as_type_field() {
        let leave = create_leave(LeaveDuration::FullDay, LeaveKind::Paid);
        let json = serde_json::to_string(&leave).unwrap();
        assert!(json.contains("\"type\":\"paid\""));
        assert!(!json.contains("\"kind\""));
    }

    #[test]
    fn test_leave_record_round_trip() {
        let leave = create_leave(LeaveDuration::SecondHalfday, LeaveKind::Unpaid);
        let json = serde_json::to_string(&leave).unwrap();
        let deserialized: LeaveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(leave, deserialized);
    }

    #[test]
    fn test_single_day_leave_covers_only_that_day() {
        let leave = LeaveRecord {
            employee_id: "emp_001".to_string(),
            from: make_date("2024-03-05"),
            to: make_date("2024-03-05"),
            duration: LeaveDuration::FullDay,
            kind: LeaveKind::Paid,
            status: LeaveStatus::Approved,
        };
        assert!(leave.covers(make_date("2024-03-05")));
        assert!(!leave.covers(make_date("2024-03-04")));
        assert!(!leave.covers(make_date("2024-03-06")));
    }
}
