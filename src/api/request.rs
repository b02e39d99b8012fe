//! Request types for the Pay Cycle Engine API.
//!
//! This module defines the JSON request structures for the `/resolve` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, Employee, Holiday, LeaveDuration, LeaveKind, LeaveRecord, LeaveStatus,
};

/// Request body for the `/resolve` endpoint.
///
/// Contains the anchor date, the roster, and all records needed to resolve
/// one pay cycle. The cycle start day is optional; when omitted, the
/// configured value applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// Any date inside the desired pay cycle, typically today.
    pub anchor_date: NaiveDate,
    /// Override for the configured cycle start day.
    #[serde(default)]
    pub cycle_start_day: Option<u32>,
    /// The employees to resolve, in the order rows should come back.
    pub employees: Vec<EmployeeRequest>,
    /// Holidays in effect during the cycle.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// Attendance records for the cycle.
    #[serde(default)]
    pub attendance: Vec<AttendanceRequest>,
    /// Leave records overlapping the cycle.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
}

/// Employee information in a resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The display name of the employee.
    pub name: String,
}

/// Holiday information in a resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    #[serde(default = "default_holiday_name")]
    pub name: String,
}

fn default_holiday_name() -> String {
    "Holiday".to_string()
}

/// Attendance information in a resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The ID of the employee who attended.
    pub employee_id: String,
    /// The date attended.
    pub date: NaiveDate,
    /// Overtime hours recorded for the day.
    #[serde(default)]
    pub overtime: Decimal,
}

/// Leave information in a resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The ID of the employee on leave.
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

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
        }
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
        }
    }
}

impl From<AttendanceRequest> for AttendanceRecord {
    fn from(req: AttendanceRequest) -> Self {
        AttendanceRecord {
            employee_id: req.employee_id,
            date: req.date,
            overtime: req.overtime,
        }
    }
}

impl From<LeaveRequest> for LeaveRecord {
    fn from(req: LeaveRequest) -> Self {
        LeaveRecord {
            employee_id: req.employee_id,
            from: req.from,
            to: req.to,
            duration: req.duration,
            kind: req.kind,
            status: req.status,
        }
    }
}
