//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading organization
//! configurations from YAML files.

use chrono::Weekday;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CycleFile, OrgConfig, OrganizationFile, OrganizationMetadata};

/// Loads and provides access to organization configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query the cycle start day and week start.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── organization.yaml # Organization metadata
/// └── cycle.yaml        # Cycle start day and week start
/// ```
///
/// # Example
///
/// ```no_run
/// use paycycle_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// println!("Organization: {}", loader.organization().name);
/// println!("Cycle starts on day {}", loader.cycle_start_day());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OrgConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The week start name is unrecognized
    /// - The cycle start day is outside 1..=28
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paycycle_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), paycycle_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load organization.yaml
        let organization_path = path.join("organization.yaml");
        let organization_file = Self::load_yaml::<OrganizationFile>(&organization_path)?;

        // Load cycle.yaml
        let cycle_path = path.join("cycle.yaml");
        let cycle_file = Self::load_yaml::<CycleFile>(&cycle_path)?;

        let week_start = parse_week_start(&cycle_file.week.start).ok_or_else(|| {
            EngineError::ConfigParseError {
                path: cycle_path.display().to_string(),
                message: format!("unrecognized week start '{}'", cycle_file.week.start),
            }
        })?;

        let config = OrgConfig::new(
            organization_file.organization,
            cycle_file.cycle.start_day,
            week_start,
        )?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying organization configuration.
    pub fn config(&self) -> &OrgConfig {
        &self.config
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        self.config.organization()
    }

    /// Returns the configured cycle start day.
    pub fn cycle_start_day(&self) -> u32 {
        self.config.cycle_start_day()
    }

    /// Returns the configured week start.
    pub fn week_start(&self) -> Weekday {
        self.config.week_start()
    }
}

/// Parses a configured week start name into a weekday.
fn parse_week_start(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.organization().code, "main_office");
        assert_eq!(loader.organization().name, "Main Office");
    }

    #[test]
    fn test_cycle_start_day_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.cycle_start_day(), 21);
    }

    #[test]
    fn test_week_start_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.week_start(), Weekday::Sun);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("organization.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_parse_week_start_is_case_insensitive() {
        assert_eq!(parse_week_start("sunday"), Some(Weekday::Sun));
        assert_eq!(parse_week_start("Sunday"), Some(Weekday::Sun));
        assert_eq!(parse_week_start("WEDNESDAY"), Some(Weekday::Wed));
    }

    #[test]
    fn test_parse_week_start_rejects_unknown_names() {
        assert_eq!(parse_week_start("someday"), None);
        assert_eq!(parse_week_start(""), None);
    }

    #[test]
    fn test_org_config_rejects_invalid_start_day() {
        let metadata = OrganizationMetadata {
            code: "main_office".to_string(),
            name: "Main Office".to_string(),
        };

        let result = OrgConfig::new(metadata, 29, Weekday::Sun);
        assert!(matches!(
            result,
            Err(EngineError::InvalidCycleStartDay { day: 29 })
        ));
    }
}
