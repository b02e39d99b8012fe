//! Pay cycle window model for the Pay Cycle Engine.
//!
//! This module defines the [`PayCycleWindow`] struct representing the
//! inclusive date range a pay cycle spans.

use crate::error::{EngineError, EngineResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the inclusive date range of one pay cycle.
///
/// A window always satisfies `from <= to`; construction through
/// [`PayCycleWindow::new`] enforces this.
///
/// # Example
///
/// ```
/// use paycycle_engine::models::PayCycleWindow;
/// use chrono::NaiveDate;
///
/// let window = PayCycleWindow::new(
///     NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
/// ).unwrap();
///
/// assert_eq!(window.day_count(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCycleWindow {
    /// The first day of the cycle (inclusive).
    pub from: NaiveDate,
    /// The last day of the cycle (inclusive).
    pub to: NaiveDate,
}

impl PayCycleWindow {
    /// Creates a new pay cycle window with validation.
    ///
    /// # Arguments
    ///
    /// * `from` - The first day of the cycle (inclusive)
    /// * `to` - The last day of the cycle (inclusive)
    ///
    /// # Returns
    ///
    /// Returns an error if `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidWindow { from, to });
        }
        Ok(PayCycleWindow { from, to })
    }

    /// Checks if a given date falls within this window.
    ///
    /// The check is inclusive of both `from` and `to`.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns the number of days in the window, counting both endpoints.
    pub fn day_count(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}
