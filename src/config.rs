//! Engine configuration.
//!
//! The heuristic has three policy knobs: the daily demand threshold that
//! triggers slot generation, the fixed hour blocks each qualifying day is
//! split into, and the optimizer pass cap. Defaults reproduce the
//! production behaviour; none of them is derived from the forecast.
//!
//! Configuration is passed in explicitly. Nothing here reads the process
//! environment.
//!
//! # Examples
//!
//! ```
//! use u_shift::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     daily_demand_threshold = 20
//!     max_optimizer_passes = 10
//! "#).unwrap();
//!
//! assert_eq!(config.daily_demand_threshold, 20);
//! assert_eq!(config.shift_blocks.len(), 2); // default morning + evening
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::HourRange;

/// Daily demand must exceed this for a day to get slots.
pub const DEFAULT_DAILY_DEMAND_THRESHOLD: u32 = 10;

/// Morning block `[8, 16)`.
pub const MORNING_BLOCK: HourRange = HourRange { start: 8, end: 16 };

/// Evening block `[16, 24)`.
pub const EVENING_BLOCK: HourRange = HourRange { start: 16, end: 24 };

/// Upper bound on optimizer passes.
pub const DEFAULT_MAX_OPTIMIZER_PASSES: u32 = 50;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Scheduler tuning parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// A day gets slots only when its summed `required_staff` is strictly greater.
    pub daily_demand_threshold: u32,

    /// Hour blocks emitted per role on a qualifying day, in emission order.
    pub shift_blocks: Vec<HourRange>,

    /// Maximum number of optimizer passes.
    pub max_optimizer_passes: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            daily_demand_threshold: DEFAULT_DAILY_DEMAND_THRESHOLD,
            shift_blocks: vec![MORNING_BLOCK, EVENING_BLOCK],
            max_optimizer_passes: DEFAULT_MAX_OPTIMIZER_PASSES,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::from_toml_file(path)?;
        config.validate()?;
        Ok(config)
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

    /// Sets the daily demand threshold.
    pub fn with_daily_demand_threshold(mut self, threshold: u32) -> Self {
        self.daily_demand_threshold = threshold;
        self
    }

    /// Replaces the shift blocks.
    pub fn with_shift_blocks(mut self, blocks: Vec<HourRange>) -> Self {
        self.shift_blocks = blocks;
        self
    }

    /// Sets the optimizer pass cap.
    pub fn with_max_optimizer_passes(mut self, passes: u32) -> Self {
        self.max_optimizer_passes = passes;
        self
    }

    /// Checks that blocks are non-empty, well-formed and that at least one pass is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shift_blocks.is_empty() {
            return Err(ConfigError::Invalid("shift_blocks is empty".into()));
        }
        if let Some(bad) = self.shift_blocks.iter().find(|b| !b.is_well_formed()) {
            return Err(ConfigError::Invalid(format!(
                "shift_blocks contains malformed range {}-{}",
                bad.start, bad.end
            )));
        }
        if self.max_optimizer_passes == 0 {
            return Err(ConfigError::Invalid(
                "max_optimizer_passes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
