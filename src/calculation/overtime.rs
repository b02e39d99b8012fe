//! Overtime extraction.
//!
//! This module reads overtime hours out of attendance records. Records
//! carry zero or a negative marker when no overtime was logged, so both
//! lookups clamp to zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::AttendanceRecord;

/// Returns the overtime hours recorded for one date.
///
/// # Arguments
///
/// * `attendance` - One employee's attendance records
/// * `day` - The date to look up
///
/// # Returns
///
/// Returns the record's overtime when positive, otherwise zero. A missing
/// record and a record with a non-positive marker both yield zero.
pub fn overtime_for_day(attendance: &[AttendanceRecord], day: NaiveDate) -> Decimal {
    attendance
        .iter()
        .find(|record| record.date == day)
        .filter(|record| record.has_overtime())
        .map(|record| record.overtime)
        .unwrap_or(Decimal::ZERO)
}

/// Sums the positive overtime hours across attendance records.
///
/// Non-positive values are markers for "no overtime logged" and never
/// reduce the total. The records are summed as given; callers restrict
/// the slice to the window they care about.
pub fn total_overtime(attendance: &[AttendanceRecord]) -> Decimal {
    attendance
        .iter()
        .filter(|record| record.has_overtime())
        .map(|record| record.overtime)
        .sum()
}
