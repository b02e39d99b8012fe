//! Configuration types for pay cycle resolution.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use serde::Deserialize;

use crate::calculation::{DEFAULT_CYCLE_START_DAY, MAX_CYCLE_START_DAY};
use crate::error::{EngineError, EngineResult};

/// Metadata about the organization.
///
/// Contains identifying information about the organization whose pay
/// cycles the engine resolves.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMetadata {
    /// The organization code (e.g., "main_office").
    pub code: String,
    /// The human-readable name of the organization.
    pub name: String,
}

/// Organization configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationFile {
    /// The organization metadata section.
    pub organization: OrganizationMetadata,
}

/// Cycle section of the cycle configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct CycleSettings {
    /// Day of month each pay cycle starts on.
    #[serde(default = "default_start_day")]
    pub start_day: u32,
}

/// Week section of the cycle configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekSettings {
    /// Name of the weekday shown in the first grid column.
    #[serde(default = "default_week_start")]
    pub start: String,
}

impl Default for WeekSettings {
    fn default() -> Self {
        WeekSettings {
            start: default_week_start(),
        }
    }
}

/// Cycle configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CycleFile {
    /// The cycle settings section.
    pub cycle: CycleSettings,
    /// The week settings section.
    #[serde(default)]
    pub week: WeekSettings,
}

fn default_start_day() -> u32 {
    DEFAULT_CYCLE_START_DAY
}

fn default_week_start() -> String {
    "sunday".to_string()
}

/// The complete organization configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the YAML files in
/// an organization configuration directory, with the week start already
/// parsed and the cycle start day validated.
#[derive(Debug, Clone)]
pub struct OrgConfig {
    /// Organization metadata.
    metadata: OrganizationMetadata,
    /// Validated day of month each pay cycle starts on.
    cycle_start_day: u32,
    /// Weekday shown in the first grid column.
    week_start: Weekday,
}

impl OrgConfig {
    /// Creates a new OrgConfig from its component parts.
    ///
    /// # Returns
    ///
    /// Returns `InvalidCycleStartDay` if `cycle_start_day` is outside
    /// 1..=28.
    pub fn new(
        metadata: OrganizationMetadata,
        cycle_start_day: u32,
        week_start: Weekday,
    ) -> EngineResult<Self> {
        if !(DEFAULT_CYCLE_START_DAY..=MAX_CYCLE_START_DAY).contains(&cycle_start_day) {
            return Err(EngineError::InvalidCycleStartDay {
                day: cycle_start_day,
            });
        }

        Ok(Self {
            metadata,
            cycle_start_day,
            week_start,
        })
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        &self.metadata
    }

    /// Returns the day of month each pay cycle starts on.
    pub fn cycle_start_day(&self) -> u32 {
        self.cycle_start_day
    }

    /// Returns the weekday shown in the first grid column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }
}
