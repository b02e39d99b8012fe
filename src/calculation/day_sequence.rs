//! Day sequence generation.
//!
//! This module expands an inclusive date range into the ordered list of
//! days it contains, either as raw dates or as display-ready
//! [`CalendarDay`] values.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::CalendarDay;

/// Expands an inclusive date range into every date it contains.
///
/// # Arguments
///
/// * `from` - The first date (inclusive)
/// * `to` - The last date (inclusive)
///
/// # Returns
///
/// Returns the dates in ascending order, or `InvalidWindow` if `from` is
/// after `to`. A range of one day yields a single-element vector.
///
/// # Example
///
/// ```
/// use paycycle_engine::calculation::build_date_sequence;
/// use chrono::NaiveDate;
///
/// let dates = build_date_sequence(
///     NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
/// ).unwrap();
///
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn build_date_sequence(from: NaiveDate, to: NaiveDate) -> EngineResult<Vec<NaiveDate>> {
    if from > to {
        return Err(EngineError::InvalidWindow { from, to });
    }

    let capacity = ((to - from).num_days() + 1) as usize;
    let mut dates = Vec::with_capacity(capacity);

    let mut current = from;
    while current <= to {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    Ok(dates)
}

/// Expands an inclusive date range into display-ready calendar days.
///
/// Same ordering and validation as [`build_date_sequence`], with each date
/// converted through [`CalendarDay::from_date`].
pub fn build_day_sequence(from: NaiveDate, to: NaiveDate) -> EngineResult<Vec<CalendarDay>> {
    let dates = build_date_sequence(from, to)?;
    Ok(dates.into_iter().map(CalendarDay::from_date).collect())
}
