//! Pay cycle window computation.
//!
//! This module derives the inclusive date range of the pay cycle that
//! contains a given anchor date, based on the configured start day.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::PayCycleWindow;

/// The cycle start day used when an organization has none configured.
///
/// A start day of 1 makes the cycle coincide with the calendar month.
pub const DEFAULT_CYCLE_START_DAY: u32 = 1;

/// The highest configurable cycle start day.
///
/// Capped at 28 so the start day exists in every month, February included.
pub const MAX_CYCLE_START_DAY: u32 = 28;

/// Computes the pay cycle window containing an anchor date.
///
/// The window starts on `cycle_start_day` of the anchor's month when the
/// anchor falls on or after that day, otherwise on `cycle_start_day` of the
/// previous month. It always ends the day before the next cycle begins, so
/// consecutive windows tile the calendar without gaps or overlaps.
///
/// # Arguments
///
/// * `anchor` - Any date inside the desired cycle, typically today
/// * `cycle_start_day` - Day of month each cycle starts on, 1 through 28
///
/// # Returns
///
/// Returns the inclusive window, or `InvalidCycleStartDay` if
/// `cycle_start_day` is outside 1..=28.
///
/// # Example
///
/// ```
/// use paycycle_engine::calculation::compute_cycle_window;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let window = compute_cycle_window(anchor, 21).unwrap();
///
/// assert_eq!(window.from, NaiveDate::from_ymd_opt(2024, 1, 21).unwrap());
/// assert_eq!(window.to, NaiveDate::from_ymd_opt(2024, 2, 20).unwrap());
/// ```
pub fn compute_cycle_window(
    anchor: NaiveDate,
    cycle_start_day: u32,
) -> EngineResult<PayCycleWindow> {
    if !(DEFAULT_CYCLE_START_DAY..=MAX_CYCLE_START_DAY).contains(&cycle_start_day) {
        return Err(EngineError::InvalidCycleStartDay {
            day: cycle_start_day,
        });
    }

    let (from_year, from_month) = if anchor.day() >= cycle_start_day {
        (anchor.year(), anchor.month())
    } else if anchor.month() == 1 {
        (anchor.year() - 1, 12)
    } else {
        (anchor.year(), anchor.month() - 1)
    };

    let from = NaiveDate::from_ymd_opt(from_year, from_month, cycle_start_day).ok_or_else(
        || EngineError::DateOutOfRange {
            message: format!(
                "cycle start {}-{:02}-{:02} is not a valid date",
                from_year, from_month, cycle_start_day
            ),
        },
    )?;

    // One month forward, then back one day, lands on the day before the
    // next cycle starts regardless of month length.
    let to = from
        .checked_add_months(Months::new(1))
        .and_then(|next_start| next_start.pred_opt())
        .ok_or_else(|| EngineError::DateOutOfRange {
            message: format!("cycle starting {} has no representable end date", from),
        })?;

    PayCycleWindow::new(from, to)
}
