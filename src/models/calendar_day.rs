//! Calendar day and week grid cell models.
//!
//! This module defines the display-oriented [`CalendarDay`] struct along
//! with the [`GridCell`] and [`WeekRow`] types used to lay days out in
//! week-aligned rows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Sentinel label carried by blank grid cells.
///
/// Blank cells render as empty, never as a number; consumers that flatten
/// the grid to labels can filter on this value.
pub const BLANK_CELL_LABEL: &str = "-1";

/// Represents one day of a pay cycle in display form.
///
/// Labels are zero-padded so that single-digit days and months line up in
/// columnar output.
///
/// # Example
///
/// ```
/// use paycycle_engine::models::CalendarDay;
/// use chrono::NaiveDate;
///
/// let day = CalendarDay::from_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
///
/// assert_eq!(day.day_label, "05");
/// assert_eq!(day.month_label, "03");
/// assert_eq!(day.weekday_name, "Tuesday");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Zero-padded day of month, e.g. "05".
    pub day_label: String,
    /// Zero-padded month number, e.g. "03".
    pub month_label: String,
    /// Full English weekday name, e.g. "Tuesday".
    pub weekday_name: String,
}

impl CalendarDay {
    /// Builds the display form of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        CalendarDay {
            day_label: format!("{:02}", date.day()),
            month_label: format!("{:02}", date.month()),
            weekday_name: date.format("%A").to_string(),
        }
    }
}

/// One cell of a week-aligned grid.
///
/// Leading and trailing positions of a pay cycle's first and last weeks
/// hold [`GridCell::Blank`]; every other cell holds a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridCell {
    /// A real day of the cycle.
    Day(CalendarDay),
    /// Padding before the first day or after the last day.
    Blank,
}

impl GridCell {
    /// Returns the day label, or [`BLANK_CELL_LABEL`] for blank cells.
    pub fn label(&self) -> &str {
        match self {
            GridCell::Day(day) => &day.day_label,
            GridCell::Blank => BLANK_CELL_LABEL,
        }
    }

    /// Returns true if this cell is padding.
    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }
}

/// One row of seven grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRow {
    /// The cells of the row, always seven of them.
    pub cells: Vec<GridCell>,
}

impl WeekRow {
    /// Counts the non-blank cells in the row.
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_blank()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_date_pads_single_digits() {
        let day = CalendarDay::from_date(make_date("2024-03-05"));
        assert_eq!(day.day_label, "05");
        assert_eq!(day.month_label, "03");
    }

    #[test]
    fn test_from_date_keeps_double_digits() {
        let day = CalendarDay::from_date(make_date("2024-12-25"));
        assert_eq!(day.day_label, "25");
        assert_eq!(day.month_label, "12");
    }

    #[test]
    fn test_from_date_weekday_names() {
        assert_eq!(
            CalendarDay::from_date(make_date("2024-03-03")).weekday_name,
            "Sunday"
        );
        assert_eq!(
            CalendarDay::from_date(make_date("2024-03-04")).weekday_name,
            "Monday"
        );
        assert_eq!(
            CalendarDay::from_date(make_date("2024-03-09")).weekday_name,
            "Saturday"
        );
    }

    #[test]
    fn test_blank_cell_label_is_sentinel() {
        assert_eq!(GridCell::Blank.label(), BLANK_CELL_LABEL);
        assert_eq!(GridCell::Blank.label(), "-1");
    }

    #[test]
    fn test_day_cell_label_is_day_label() {
        let cell = GridCell::Day(CalendarDay::from_date(make_date("2024-03-05")));
        assert_eq!(cell.label(), "05");
        assert!(!cell.is_blank());
    }

    #[test]
    fn test_week_row_day_count_excludes_blanks() {
        let row = WeekRow {
            cells: vec![
                GridCell::Blank,
                GridCell::Blank,
                GridCell::Day(CalendarDay::from_date(make_date("2024-03-05"))),
                GridCell::Day(CalendarDay::from_date(make_date("2024-03-06"))),
                GridCell::Day(CalendarDay::from_date(make_date("2024-03-07"))),
                GridCell::Blank,
                GridCell::Blank,
            ],
        };
        assert_eq!(row.day_count(), 3);
    }

    #[test]
    fn test_grid_cell_serialization() {
        let blank_json = serde_json::to_string(&GridCell::Blank).unwrap();
        assert_eq!(blank_json, "\"blank\"");

        let day_cell = GridCell::Day(CalendarDay::from_date(make_date("2024-03-05")));
        let day_json = serde_json::to_string(&day_cell).unwrap();
        assert!(day_json.contains("\"day\""));
        assert!(day_json.contains("\"day_label\":\"05\""));
    }
}
