//! Tween configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Options recognised by [`crate::tween::ValueTween`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Run length in milliseconds. 0 applies the target synchronously.
    #[serde(alias = "duration", alias = "durationMs")]
    pub duration_ms: f64,
    /// Apply the exact target on cancel, even mid-run.
    pub force: bool,
}

impl TweenConfig {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Effective duration: non-finite or non-positive values count as 0.
    #[inline]
    pub fn duration(&self) -> f64 {
        if self.duration_ms.is_finite() && self.duration_ms > 0.0 {
            self.duration_ms
        } else {
            0.0
        }
    }

    /// Parse from JSON such as `{ "duration": 300, "force": true }`.
    /// Unlike the lenient [`TweenConfig::duration`], a negative or NaN
    /// duration is rejected here.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TweenConfig = serde_json::from_str(s)?;
        if !cfg.duration_ms.is_finite() || cfg.duration_ms < 0.0 {
            return Err(ConfigError::InvalidDuration(cfg.duration_ms));
        }
        Ok(cfg)
    }
}
