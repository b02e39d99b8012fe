//! Holiday and holiday-calendar models.
//!
//! This module defines the [`Holiday`] entity and the [`HolidayCalendar`]
//! lookup index used by status resolution to answer "is this day an offday".

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a designated holiday (offday).
///
/// # Example
///
/// ```
/// use paycycle_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 3, 26).unwrap(),
///     name: "Independence Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
}

/// A set index over holiday dates for constant-time lookups.
///
/// Status resolution checks every (employee, day) pair against the holiday
/// list, so the list is folded into a [`HashSet`] once per window instead of
/// scanning it per cell.
///
/// # Example
///
/// ```
/// use paycycle_engine::models::{Holiday, HolidayCalendar};
/// use chrono::NaiveDate;
///
/// let holidays = vec![Holiday {
///     date: NaiveDate::from_ymd_opt(2024, 3, 26).unwrap(),
///     name: "Independence Day".to_string(),
/// }];
/// let calendar = HolidayCalendar::from_holidays(&holidays);
///
/// assert!(calendar.contains(NaiveDate::from_ymd_opt(2024, 3, 26).unwrap()));
/// assert!(!calendar.contains(NaiveDate::from_ymd_opt(2024, 3, 27).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from a list of holidays.
    ///
    /// Duplicate dates collapse into a single entry.
    pub fn from_holidays(holidays: &[Holiday]) -> Self {
        Self {
            dates: holidays.iter().map(|h| h.date).collect(),
        }
    }

    /// Returns true if the given date is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
