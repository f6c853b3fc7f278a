//! Session tuning loaded from JSON, defaulting to the values in [`crate::constants`].
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    BASE_DURATION_MS, DURATION_STEP_MS, FEEDBACK_DELAY_MS, MIN_DURATION_MS, SHAKE_MS,
    STARTING_LIVES,
};

/// Tunable parameters for a Tempo session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TempoConfig {
    #[serde(default = "TempoConfig::default_starting_lives")]
    pub starting_lives: u8,
    /// Caller duration for the first card, in milliseconds.
    #[serde(default = "TempoConfig::default_base_duration_ms")]
    pub base_duration_ms: u32,
    /// Amount shaved off the caller duration per deck position.
    #[serde(default = "TempoConfig::default_duration_step_ms")]
    pub duration_step_ms: u32,
    /// Hard floor of the caller duration.
    #[serde(default = "TempoConfig::default_min_duration_ms")]
    pub min_duration_ms: u32,
    /// Delay between a successful match and the automatic advance.
    #[serde(default = "TempoConfig::default_feedback_delay_ms")]
    pub feedback_delay_ms: u32,
    /// How long a wrongly tapped cell stays shaken.
    #[serde(default = "TempoConfig::default_shake_ms")]
    pub shake_ms: u32,
}

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("starting lives must be at least 1")]
    NoLives,
    #[error("minimum duration {min}ms exceeds base duration {base}ms")]
    FloorAboveBase { min: u32, base: u32 },
    #[error("{field} must be greater than zero")]
    ZeroDelay { field: &'static str },
    #[error("config JSON invalid: {0}")]
    Json(String),
}

impl TempoConfig {
    #[must_use]
    pub const fn default_starting_lives() -> u8 {
        STARTING_LIVES
    }

    #[must_use]
    pub const fn default_base_duration_ms() -> u32 {
        BASE_DURATION_MS
    }

    #[must_use]
    pub const fn default_duration_step_ms() -> u32 {
        DURATION_STEP_MS
    }

    #[must_use]
    pub const fn default_min_duration_ms() -> u32 {
        MIN_DURATION_MS
    }

    #[must_use]
    pub const fn default_feedback_delay_ms() -> u32 {
        FEEDBACK_DELAY_MS
    }

    #[must_use]
    pub const fn default_shake_ms() -> u32 {
        SHAKE_MS
    }

    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or any value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the configuration for values that would break the caller loop.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }
        if self.min_duration_ms > self.base_duration_ms {
            return Err(ConfigError::FloorAboveBase {
                min: self.min_duration_ms,
                base: self.base_duration_ms,
            });
        }
        if self.min_duration_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "min_duration_ms",
            });
        }
        if self.feedback_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                field: "feedback_delay_ms",
            });
        }
        if self.shake_ms == 0 {
            return Err(ConfigError::ZeroDelay { field: "shake_ms" });
        }
        Ok(())
    }

    /// Caller duration for the card at `index`: `max(min, base - step * index)`.
    #[must_use]
    pub fn caller_duration_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_duration_ms
            .saturating_sub(self.duration_step_ms.saturating_mul(index))
            .max(self.min_duration_ms)
    }

    /// Caller duration for an optional caller position. Before the first card
    /// the ramp is read one step ahead of index 0.
    #[must_use]
    pub fn duration_for(&self, caller: Option<usize>) -> u32 {
        caller.map_or_else(
            || {
                self.base_duration_ms
                    .saturating_add(self.duration_step_ms)
                    .max(self.min_duration_ms)
            },
            |index| self.caller_duration_ms(index),
        )
    }
}

impl Default for TempoConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            base_duration_ms: BASE_DURATION_MS,
            duration_step_ms: DURATION_STEP_MS,
            min_duration_ms: MIN_DURATION_MS,
            feedback_delay_ms: FEEDBACK_DELAY_MS,
            shake_ms: SHAKE_MS,
        }
    }
}

/// Caller duration at `index` under the default ramp.
#[must_use]
pub fn caller_duration(index: usize) -> Duration {
    Duration::from_millis(u64::from(
        TempoConfig::default().caller_duration_ms(index),
    ))
}
