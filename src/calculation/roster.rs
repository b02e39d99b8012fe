//! Roster resolution.
//!
//! This module resolves a whole roster of employees over one pay cycle,
//! producing a status row per employee. Records are grouped by employee
//! first so that one employee's attendance or leave never bleeds into
//! another's row.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::calculation::day_sequence::build_date_sequence;
use crate::calculation::overtime::total_overtime;
use crate::calculation::status_resolution::resolve_day_status;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, Employee, EmployeeStatusRow, Holiday, HolidayCalendar, LeaveRecord,
    PayCycleWindow, StatusTotals,
};

/// Resolves the day statuses of every employee over one pay cycle.
///
/// # Arguments
///
/// * `employees` - The roster, in the order rows should come back
/// * `window` - The pay cycle window to resolve over
/// * `holidays` - Holidays in effect during the window
/// * `attendance` - Attendance records for any subset of the roster
/// * `leaves` - Leave records for any subset of the roster
///
/// # Returns
///
/// Returns one row per employee in roster order. Employees without any
/// records still get a full row; their working days resolve to absent and
/// holidays to offday. Fails only when the window itself cannot be
/// expanded into days.
pub fn resolve_roster(
    employees: &[Employee],
    window: &PayCycleWindow,
    holidays: &[Holiday],
    attendance: &[AttendanceRecord],
    leaves: &[LeaveRecord],
) -> EngineResult<Vec<EmployeeStatusRow>> {
    let dates = build_date_sequence(window.from, window.to)?;
    let calendar = HolidayCalendar::from_holidays(holidays);

    let mut attendance_by_employee: HashMap<&str, Vec<AttendanceRecord>> = HashMap::new();
    for record in attendance {
        attendance_by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record.clone());
    }

    let mut leaves_by_employee: HashMap<&str, Vec<LeaveRecord>> = HashMap::new();
    for record in leaves {
        leaves_by_employee
            .entry(record.employee_id.as_str())
            .or_default()
            .push(record.clone());
    }

    let rows = employees
        .iter()
        .map(|employee| {
            let employee_attendance = attendance_by_employee
                .get(employee.id.as_str())
                .map(|records| records.as_slice())
                .unwrap_or_default();
            let employee_leaves = leaves_by_employee
                .get(employee.id.as_str())
                .map(|records| records.as_slice())
                .unwrap_or_default();

            let attendance_by_date: HashMap<NaiveDate, &AttendanceRecord> = employee_attendance
                .iter()
                .map(|record| (record.date, record))
                .collect();

            let statuses: Vec<_> = dates
                .iter()
                .map(|&day| {
                    resolve_day_status(
                        day,
                        &calendar,
                        attendance_by_date.get(&day).copied(),
                        employee_leaves,
                    )
                })
                .collect();

            let totals = StatusTotals::tally(&statuses, total_overtime(employee_attendance));

            EmployeeStatusRow {
                employee_id: employee.id.clone(),
                employee_name: employee.name.clone(),
                statuses,
                totals,
            }
        })
        .collect();

    Ok(rows)
}
