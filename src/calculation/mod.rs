//! Calculation logic for the Pay Cycle Engine.
//!
//! This module contains all the calculation functions for resolving a pay
//! cycle, including window computation from an anchor date, day sequence
//! generation across month and leap-year boundaries, week grid layout with
//! a configurable week start, per-day status resolution, half-day leave
//! views, and overtime extraction.

mod cycle_window;
mod day_sequence;
mod half_day;
mod overtime;
mod roster;
mod status_resolution;
mod week_grid;

pub use cycle_window::{DEFAULT_CYCLE_START_DAY, MAX_CYCLE_START_DAY, compute_cycle_window};
pub use day_sequence::{build_date_sequence, build_day_sequence};
pub use half_day::{HalfDayCell, LeaveBlock, build_half_day_row, resolve_half_day};
pub use overtime::{overtime_for_day, total_overtime};
pub use roster::resolve_roster;
pub use status_resolution::{DayFacts, collect_day_facts, resolve_day_status};
pub use week_grid::build_week_grid;
