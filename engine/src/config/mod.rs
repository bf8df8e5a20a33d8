//! Configuration management
//!
//! This module handles loading, validation, and management of the Wayfarer
//! configuration. Configuration is stored in TOML format at
//! ~/.wayfarer/config.toml.
//!
//! # Configuration Sections
//!
//! - **core**: Data directory and log level
//! - **catalog**: Optional dataset path overrides (embedded data otherwise)
//! - **planner**: Fallback constraints used when extraction detects nothing
//!
//! # Path Expansion
//!
//! The configuration system automatically expands ~ to the user's home
//! directory and creates the data directory if it doesn't exist.

use sdk::errors::PlannerError;
use sdk::types::Constraints;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Core engine settings
    #[serde(default)]
    pub core: CoreConfig,

    /// Catalog dataset settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Planner fallback settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            core: CoreConfig::default(),
            catalog: CatalogConfig::default(),
            planner: PlannerConfig::default(),
        }
    }
}

/// Core engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Data directory path (supports ~ expansion)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Catalog dataset configuration
///
/// When both paths are unset the embedded default datasets are used. Paths
/// must be set together: a destination dataset is useless without its
/// attractions and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Destinations CSV path (supports ~ expansion)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinations_path: Option<PathBuf>,

    /// Attractions CSV path (supports ~ expansion)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attractions_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Both dataset paths, when file-backed datasets are configured
    pub fn paths(&self) -> Option<(&Path, &Path)> {
        match (&self.destinations_path, &self.attractions_path) {
            (Some(dest), Some(attr)) => Some((dest, attr)),
            _ => None,
        }
    }
}

/// Planner fallback configuration
///
/// These values seed the constraint extractor's defaults: any field the
/// request text doesn't mention falls back to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Default departure city
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Default trip length in days
    #[serde(default = "default_days")]
    pub days: u32,

    /// Default traveler count
    #[serde(default = "default_travelers")]
    pub travelers: u32,

    /// Default total budget in dollars
    #[serde(default = "default_budget")]
    pub budget: f64,

    /// Placeholder per-person flight estimate
    #[serde(default = "default_flight_est")]
    pub flight_est_per_person: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            days: default_days(),
            travelers: default_travelers(),
            budget: default_budget(),
            flight_est_per_person: default_flight_est(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from("~/.wayfarer")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_origin() -> String {
    "Boston".to_string()
}

fn default_days() -> u32 {
    5
}

fn default_travelers() -> u32 {
    2
}

fn default_budget() -> f64 {
    2000.0
}

fn default_flight_est() -> f64 {
    450.0
}

impl Config {
    /// Load configuration from the default location (~/.wayfarer/config.toml)
    ///
    /// If the configuration file doesn't exist, creates a default
    /// configuration. Validates the configuration after loading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails.
    pub fn load_or_create() -> Result<Self, PlannerError> {
        let config_path = Self::default_config_path()?;

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Self::create_default(&config_path)
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, PlannerError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PlannerError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = toml::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate_and_process()?;

        Ok(config)
    }

    /// Create default configuration and save to path
    fn create_default(path: &Path) -> Result<Self, PlannerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PlannerError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let mut config = Self::default();
        config.validate_and_process()?;

        let toml_string = toml::to_string_pretty(&config)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| PlannerError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(config)
    }

    /// Get the default configuration file path (~/.wayfarer/config.toml)
    fn default_config_path() -> Result<PathBuf, PlannerError> {
        let home = dirs::home_dir().ok_or_else(|| {
            PlannerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(home.join(".wayfarer").join("config.toml"))
    }

    /// Fallback constraints seeded from the planner section
    pub fn default_constraints(&self) -> Constraints {
        Constraints {
            origin: self.planner.origin.clone(),
            days: self.planner.days,
            travelers: self.planner.travelers,
            budget: self.planner.budget,
            flight_est_per_person: self.planner.flight_est_per_person,
            ..Constraints::default()
        }
    }

    /// Validate and process configuration
    ///
    /// Validates field values, expands ~ in paths, and creates the data
    /// directory if it doesn't exist.
    fn validate_and_process(&mut self) -> Result<(), PlannerError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.core.log_level.as_str()) {
            return Err(PlannerError::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.core.log_level,
                valid_log_levels.join(", ")
            )));
        }

        if self.planner.days == 0 {
            return Err(PlannerError::Config(
                "planner.days must be at least 1".to_string(),
            ));
        }
        if self.planner.travelers == 0 {
            return Err(PlannerError::Config(
                "planner.travelers must be at least 1".to_string(),
            ));
        }
        if self.planner.budget < 0.0 {
            return Err(PlannerError::Config(
                "planner.budget must not be negative".to_string(),
            ));
        }
        if self.planner.flight_est_per_person < 0.0 {
            return Err(PlannerError::Config(
                "planner.flight_est_per_person must not be negative".to_string(),
            ));
        }

        match (
            &self.catalog.destinations_path,
            &self.catalog.attractions_path,
        ) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(PlannerError::Config(
                    "catalog.destinations_path and catalog.attractions_path must be set together"
                        .to_string(),
                ));
            }
            _ => {}
        }

        self.core.data_dir = expand_path(&self.core.data_dir)?;
        if !self.core.data_dir.exists() {
            fs::create_dir_all(&self.core.data_dir).map_err(|e| {
                PlannerError::Config(format!("Failed to create data directory: {}", e))
            })?;
        }

        if let Some(path) = self.catalog.destinations_path.take() {
            self.catalog.destinations_path = Some(expand_path(&path)?);
        }
        if let Some(path) = self.catalog.attractions_path.take() {
            self.catalog.attractions_path = Some(expand_path(&path)?);
        }

        Ok(())
    }
}

/// Expand ~ in path to user's home directory
fn expand_path(path: &Path) -> Result<PathBuf, PlannerError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| PlannerError::Config("Invalid UTF-8 in path".to_string()))?;

    if let Some(rest) = path_str.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| {
            PlannerError::Config("Could not determine home directory".to_string())
        })?;

        Ok(home.join(rest))
    } else if path_str == "~" {
        dirs::home_dir()
            .ok_or_else(|| PlannerError::Config("Could not determine home directory".to_string()))
    } else {
        Ok(path.to_path_buf())
    }
}
