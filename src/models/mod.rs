//! Core data models for the Pay Cycle Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar_day;
mod day_status;
mod employee;
mod holiday;
mod leave;
mod pay_cycle;
mod resolution;

pub use attendance::AttendanceRecord;
pub use calendar_day::{BLANK_CELL_LABEL, CalendarDay, GridCell, WeekRow};
pub use day_status::DayStatus;
pub use employee::Employee;
pub use holiday::{Holiday, HolidayCalendar};
pub use leave::{LeaveDuration, LeaveKind, LeaveRecord, LeaveStatus};
pub use pay_cycle::PayCycleWindow;
pub use resolution::{EmployeeStatusRow, ResolutionResult, StatusTotals};
