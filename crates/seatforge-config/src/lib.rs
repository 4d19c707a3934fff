//! Configuration system for SeatForge.
//!
//! Load balancing configuration from TOML or YAML files to tune the
//! optimizer without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seatforge_config::SeatingConfig;
//!
//! let config = SeatingConfig::from_toml_str(r#"
//!     seat_limit = 64
//!
//!     [balancing]
//!     max_iterations = 10
//!     local_imbalance_threshold = 0.5
//! "#).unwrap();
//!
//! assert_eq!(config.balancing.max_iterations, 10);
//! assert_eq!(config.seat_limit, Some(64));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seatforge_config::SeatingConfig;
//!
//! let config = SeatingConfig::load("seating.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of optimizer passes.
pub const DEFAULT_MAX_ITERATIONS: u32 = 5;

/// Default local imbalance at or below which a seat is left alone.
pub const DEFAULT_LOCAL_IMBALANCE_THRESHOLD: f64 = 0.25;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main seating configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeatingConfig {
    /// Balancing optimizer configuration.
    #[serde(default)]
    pub balancing: BalancingConfig,

    /// Largest grid (in seats) the planner accepts. Unlimited when unset.
    #[serde(default)]
    pub seat_limit: Option<usize>,
}

impl SeatingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the maximum number of optimizer passes.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.balancing.max_iterations = max_iterations;
        self
    }

    /// Sets the local imbalance threshold.
    pub fn with_local_imbalance_threshold(mut self, threshold: f64) -> Self {
        self.balancing.local_imbalance_threshold = threshold;
        self
    }

    /// Sets the seat limit.
    pub fn with_seat_limit(mut self, seat_limit: usize) -> Self {
        self.seat_limit = Some(seat_limit);
        self
    }

    /// Checks the configuration for values the optimizer cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.balancing.validate()
    }
}

/// Balancing optimizer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BalancingConfig {
    /// Maximum number of full passes over the grid.
    pub max_iterations: u32,

    /// Seats whose local imbalance is at or below this value are not
    /// searched for a swap.
    pub local_imbalance_threshold: f64,
}

impl Default for BalancingConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            local_imbalance_threshold: DEFAULT_LOCAL_IMBALANCE_THRESHOLD,
        }
    }
}

impl BalancingConfig {
    /// Rejects a negative or non-finite threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.local_imbalance_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "local_imbalance_threshold must be a finite, non-negative number (got {threshold})"
            )));
        }
        Ok(())
    }
}
