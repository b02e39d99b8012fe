//! Configuration loading and management for the Pay Cycle Engine.
//!
//! This module provides functionality to load organization configurations
//! from YAML files, including organization metadata, the cycle start day,
//! and the week start.
//!
//! # Example
//!
//! ```no_run
//! use paycycle_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded organization: {}", config.organization().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CycleFile, CycleSettings, OrgConfig, OrganizationFile, OrganizationMetadata, WeekSettings,
};
