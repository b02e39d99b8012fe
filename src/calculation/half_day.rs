//! Half-day leave view.
//!
//! This module renders leave records at half-day granularity, splitting
//! each date into a morning and an afternoon slot. The view is driven by
//! leave alone; holidays and attendance do not appear in it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::day_sequence::build_date_sequence;
use crate::error::EngineResult;
use crate::models::{LeaveDuration, LeaveRecord};

/// One filled half-day slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBlock {
    /// Whether the covering leave is paid.
    pub paid: bool,
}

/// The two half-day slots of one date.
///
/// `None` in a slot means no leave covers that half of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfDayCell {
    /// The morning slot.
    pub am: Option<LeaveBlock>,
    /// The afternoon slot.
    pub pm: Option<LeaveBlock>,
}

impl HalfDayCell {
    /// Returns true if no leave covers either half of the day.
    pub fn is_blank(&self) -> bool {
        self.am.is_none() && self.pm.is_none()
    }
}

/// Resolves the half-day leave slots for one date.
///
/// Full-day records fill both slots, first-half records fill the morning,
/// second-half records fill the afternoon. When overlapping records claim
/// the same slot, the earliest record in `leaves` wins that slot; later
/// records only fill slots still empty.
///
/// # Example
///
/// ```
/// use paycycle_engine::calculation::resolve_half_day;
/// use paycycle_engine::models::{LeaveDuration, LeaveKind, LeaveRecord, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
/// let leave = LeaveRecord {
///     employee_id: "emp_001".to_string(),
///     from: day,
///     to: day,
///     duration: LeaveDuration::FirstHalfday,
///     kind: LeaveKind::Paid,
///     status: LeaveStatus::Approved,
/// };
///
/// let cell = resolve_half_day(day, &[leave]);
/// assert!(cell.am.is_some_and(|block| block.paid));
/// assert!(cell.pm.is_none());
/// ```
pub fn resolve_half_day(day: NaiveDate, leaves: &[LeaveRecord]) -> HalfDayCell {
    let mut cell = HalfDayCell { am: None, pm: None };

    for leave in leaves.iter().filter(|leave| leave.covers(day)) {
        let block = LeaveBlock {
            paid: leave.is_paid(),
        };

        match leave.duration {
            LeaveDuration::FullDay => {
                if cell.am.is_none() {
                    cell.am = Some(block);
                }
                if cell.pm.is_none() {
                    cell.pm = Some(block);
                }
            }
            LeaveDuration::FirstHalfday => {
                if cell.am.is_none() {
                    cell.am = Some(block);
                }
            }
            LeaveDuration::SecondHalfday => {
                if cell.pm.is_none() {
                    cell.pm = Some(block);
                }
            }
        }

        if cell.am.is_some() && cell.pm.is_some() {
            break;
        }
    }

    cell
}

/// Resolves the half-day slots for every date of an inclusive range.
///
/// # Returns
///
/// Returns one cell per date in ascending order, or `InvalidWindow` if
/// `from` is after `to`.
pub fn build_half_day_row(
    from: NaiveDate,
    to: NaiveDate,
    leaves: &[LeaveRecord],
) -> EngineResult<Vec<HalfDayCell>> {
    let dates = build_date_sequence(from, to)?;
    Ok(dates
        .into_iter()
        .map(|day| resolve_half_day(day, leaves))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{LeaveKind, LeaveStatus};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_leave(
        from: &str,
        to: &str,
        duration: LeaveDuration,
        kind: LeaveKind,
    ) -> LeaveRecord {
        LeaveRecord {
            employee_id: "emp_001".to_string(),
            from: make_date(from),
            to: make_date(to),
            duration,
            kind,
            status: LeaveStatus::Approved,
        }
    }

    /// HD-001: first-half leave fills only the morning slot
    #[test]
    fn test_first_half_fills_morning_only() {
        let leaves = vec![create_leave(
            "2024-03-06",
            "2024-03-06",
            LeaveDuration::FirstHalfday,
            LeaveKind::Paid,
        )];

        let cell = resolve_half_day(make_date("2024-03-06"), &leaves);
        assert_eq!(cell.am, Some(LeaveBlock { paid: true }));
        assert_eq!(cell.pm, None);
    }

    /// HD-002: second-half leave fills only the afternoon slot
    #[test]
    fn test_second_half_fills_afternoon_only() {
        let leaves = vec![create_leave(
            "2024-03-06",
            "2024-03-06",
            LeaveDuration::SecondHalfday,
            LeaveKind::Unpaid,
        )];

        let cell = resolve_half_day(make_date("2024-03-06"), &leaves);
        assert_eq!(cell.am, None);
        assert_eq!(cell.pm, Some(LeaveBlock { paid: false }));
    }

    /// HD-003: full-day leave fills both slots
    #[test]
    fn test_full_day_fills_both_slots() {
        let leaves = vec![create_leave(
            "2024-03-01",
            "2024-03-10",
            LeaveDuration::FullDay,
            LeaveKind::Paid,
        )];

        let cell = resolve_half_day(make_date("2024-03-06"), &leaves);
        assert_eq!(cell.am, Some(LeaveBlock { paid: true }));
        assert_eq!(cell.pm, Some(LeaveBlock { paid: true }));
    }

    #[test]
    fn test_uncovered_day_is_blank() {
        let leaves = vec![create_leave(
            "2024-03-01",
            "2024-03-05",
            LeaveDuration::FullDay,
            LeaveKind::Paid,
        )];

        let cell = resolve_half_day(make_date("2024-03-06"), &leaves);
        assert!(cell.is_blank());
    }

    #[test]
    fn test_earlier_record_wins_contested_slot() {
        let leaves = vec![
            create_leave(
                "2024-03-06",
                "2024-03-06",
                LeaveDuration::FirstHalfday,
                LeaveKind::Paid,
            ),
            create_leave(
                "2024-03-06",
                "2024-03-06",
                LeaveDuration::FullDay,
                LeaveKind::Unpaid,
            ),
        ];

        let cell = resolve_half_day(make_date("2024-03-06"), &leaves);
        // The paid first-half record claims the morning; the unpaid
        // full-day record only gets the still-empty afternoon.
        assert_eq!(cell.am, Some(LeaveBlock { paid: true }));
        assert_eq!(cell.pm, Some(LeaveBlock { paid: false }));
    }

    #[test]
    fn test_complementary_halves_fill_both_slots() {
        let leaves = vec![
            create_leave(
                "2024-03-06",
                "2024-03-06",
                LeaveDuration::FirstHalfday,
                LeaveKind::Paid,
            ),
            create_leave(
                "2024-03-06",
                "2024-03-06",
                LeaveDuration::SecondHalfday,
                LeaveKind::Unpaid,
            ),
        ];

        let cell = resolve_half_day(make_date("2024-03-06"), &leaves);
        assert_eq!(cell.am, Some(LeaveBlock { paid: true }));
        assert_eq!(cell.pm, Some(LeaveBlock { paid: false }));
    }

    #[test]
    fn test_row_has_one_cell_per_day() {
        let leaves = vec![create_leave(
            "2024-03-03",
            "2024-03-04",
            LeaveDuration::FullDay,
            LeaveKind::Paid,
        )];

        let row =
            build_half_day_row(make_date("2024-03-01"), make_date("2024-03-05"), &leaves).unwrap();

        assert_eq!(row.len(), 5);
        assert!(row[0].is_blank());
        assert!(row[1].is_blank());
        assert!(!row[2].is_blank());
        assert!(!row[3].is_blank());
        assert!(row[4].is_blank());
    }

    #[test]
    fn test_row_rejects_inverted_range() {
        let result = build_half_day_row(make_date("2024-03-05"), make_date("2024-03-01"), &[]);
        assert!(matches!(result, Err(EngineError::InvalidWindow { .. })));
    }
}
