//! Configuration system for the zoo simulation.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animal: AnimalConfig,
    #[serde(default)]
    pub carnivore: CarnivoreConfig,
    #[serde(default)]
    pub herbivore: HerbivoreConfig,
    #[serde(default)]
    pub predation: PredationConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rules shared by every animal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalConfig {
    /// Weight gained per feeding
    pub feed_gain: f64,
    /// Weight lost per move
    pub move_cost: f64,
    /// Animals younger than this (in days) are reported as young
    pub young_until_days: u32,
}

/// Carnivore rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarnivoreConfig {
    /// Weight gained per daily hunt
    pub hunt_gain: f64,
    /// Age in days at which a carnivore dies; `None` disables death by age
    pub max_age_days: Option<u32>,
}

/// Herbivore rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HerbivoreConfig {
    /// Shortest daily stride
    pub stride_min: f64,
    /// Longest daily stride
    pub stride_max: f64,
    /// Age in days at which a herbivore dies; `None` disables death by age
    pub max_age_days: Option<u32>,
}

/// Predation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredationConfig {
    /// Fraction of the prey's weight transferred to the predator
    pub prey_weight_fraction: f64,
    /// Members required before a random predation event can be drawn
    pub min_population: usize,
}

/// Defaults for the command-line driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Days to simulate
    pub days: u64,
    /// Random seed; drawn from the thread RNG when absent
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Days between census snapshots
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AnimalConfig {
    fn default() -> Self {
        Self {
            feed_gain: 0.5,
            move_cost: 0.25,
            young_until_days: 365,
        }
    }
}

impl Default for CarnivoreConfig {
    fn default() -> Self {
        Self {
            hunt_gain: 1.0,
            max_age_days: Some(365 * 3),
        }
    }
}

impl Default for HerbivoreConfig {
    fn default() -> Self {
        Self {
            stride_min: 1.0,
            stride_max: 5.0,
            max_age_days: Some(365 * 2),
        }
    }
}

impl Default for PredationConfig {
    fn default() -> Self {
        Self {
            prey_weight_fraction: 0.5,
            min_population: 2,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: 365,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 30,
            log_level: "info".to_string(),
        }
    }
}

/// Errors raised while loading or saving a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let herbivore = &self.herbivore;
        if !herbivore.stride_min.is_finite() || !herbivore.stride_max.is_finite() {
            return Err(ConfigError::Invalid(
                "stride bounds must be finite".to_string(),
            ));
        }
        if !(herbivore.stride_min >= 0.0 && herbivore.stride_min <= herbivore.stride_max) {
            return Err(ConfigError::Invalid(
                "stride_min must be >= 0 and <= stride_max".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.predation.prey_weight_fraction) {
            return Err(ConfigError::Invalid(
                "prey_weight_fraction must be between 0 and 1".to_string(),
            ));
        }
        if self.predation.min_population < 2 {
            return Err(ConfigError::Invalid(
                "min_population must be at least 2".to_string(),
            ));
        }
        if self.logging.stats_interval == 0 {
            return Err(ConfigError::Invalid("stats_interval must be > 0".to_string()));
        }
        Ok(())
    }
}
