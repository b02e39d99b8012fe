//! Week grid layout.
//!
//! This module arranges the days of a pay cycle into rows of seven cells
//! aligned to a configurable week start, padding the first and last rows
//! with blank cells.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{CalendarDay, GridCell, WeekRow};

/// Arranges a run of calendar days into week-aligned rows.
///
/// Column 0 of every row corresponds to `week_start`. The first row is
/// padded with leading blanks so the first day lands in its weekday's
/// column, and the last row is padded with trailing blanks to a full
/// seven cells.
///
/// # Arguments
///
/// * `from` - The date of the first entry in `days`
/// * `days` - Consecutive calendar days starting at `from`
/// * `week_start` - The weekday shown in column 0
///
/// # Returns
///
/// Returns the rows in order; every row holds exactly seven cells, and the
/// non-blank cells across all rows equal `days` in order. An empty `days`
/// slice yields no rows.
///
/// # Example
///
/// ```
/// use paycycle_engine::calculation::build_week_grid;
/// use paycycle_engine::models::CalendarDay;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2024-05-01 is a Wednesday, so a Sunday-start grid leads with 3 blanks.
/// let from = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let days: Vec<CalendarDay> = (0..4)
///     .map(|offset| CalendarDay::from_date(from + chrono::Duration::days(offset)))
///     .collect();
///
/// let weeks = build_week_grid(from, &days, Weekday::Sun);
/// assert_eq!(weeks.len(), 1);
/// assert_eq!(weeks[0].cells.len(), 7);
/// assert!(weeks[0].cells[2].is_blank());
/// assert_eq!(weeks[0].cells[3].label(), "01");
/// ```
pub fn build_week_grid(from: NaiveDate, days: &[CalendarDay], week_start: Weekday) -> Vec<WeekRow> {
    if days.is_empty() {
        return Vec::new();
    }

    let lead = column_index(from.weekday(), week_start);
    let mut weeks = Vec::new();
    let mut cells = Vec::with_capacity(7);

    for _ in 0..lead {
        cells.push(GridCell::Blank);
    }

    for day in days {
        cells.push(GridCell::Day(day.clone()));
        if cells.len() == 7 {
            weeks.push(WeekRow { cells });
            cells = Vec::with_capacity(7);
        }
    }

    if !cells.is_empty() {
        while cells.len() < 7 {
            cells.push(GridCell::Blank);
        }
        weeks.push(WeekRow { cells });
    }

    weeks
}

/// Maps a weekday to its column for a given week start.
fn column_index(weekday: Weekday, week_start: Weekday) -> usize {
    ((weekday.num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7) as usize
}
