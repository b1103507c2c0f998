//! Planner configuration with TOML round-trip.
//!
//! Every field has a serde default so a partial (or empty) document always
//! yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ranking::TieBreakRule;
use crate::schedule::WorkingWindow;

/// Tunable knobs for the planner.
///
/// The 15-minute block size is fixed; cadence, horizon and ordering
/// preferences are configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Available slots between mandatory breaks.
    #[serde(default = "default_break_interval")]
    pub break_interval: usize,
    /// Days covered by a weekly run.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Secondary ordering for equal priority scores.
    #[serde(default)]
    pub tie_break: TieBreakRule,
    /// Working window used when the caller supplies no preference.
    #[serde(default)]
    pub default_window: WorkingWindow,
}

fn default_break_interval() -> usize {
    4
}

fn default_horizon_days() -> u32 {
    7
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            break_interval: default_break_interval(),
            horizon_days: default_horizon_days(),
            tie_break: TieBreakRule::default(),
            default_window: WorkingWindow::default(),
        }
    }
}

impl PlannerConfig {
    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed(e.to_string()))
    }

    /// Reject values that would make a run degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.break_interval == 0 {
            return Err(ConfigError::InvalidValue {
                key: "break_interval".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.horizon_days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "horizon_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
