//! Interaction settings.
//!
//! Loaded from JSON; every field falls back to its default so a partial file
//! is valid.

use crate::core::{Axis, InteractionError};
use crate::gesture::Easing;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_SWIPE_COMMIT_THRESHOLD_FRACTION: f32 = 0.3;
pub const DEFAULT_SETTLE_DURATION_MS: u64 = 500;
pub const DEFAULT_CURSOR_FOLLOW_FACTOR: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub autoplay_interval_ms: u64,
    /// Fraction of the track length a swipe must cover to change slides.
    pub swipe_commit_threshold_fraction: f32,
    pub drag_axis: Axis,
    pub settle_duration_ms: u64,
    pub settle_easing: Easing,
    /// Travel before a reorder drag starts hit testing.
    pub drag_start_slop_px: f32,
    pub cursor_follow_factor: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            swipe_commit_threshold_fraction: DEFAULT_SWIPE_COMMIT_THRESHOLD_FRACTION,
            drag_axis: Axis::Horizontal,
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
            settle_easing: Easing::Ease,
            drag_start_slop_px: 0.0,
            cursor_follow_factor: DEFAULT_CURSOR_FOLLOW_FACTOR,
        }
    }
}

impl InteractionConfig {
    pub fn validate(&self) -> Result<(), InteractionError> {
        if self.autoplay_interval_ms == 0 {
            return Err(InteractionError::invalid_configuration(
                "autoplay_interval_ms must be > 0",
            ));
        }
        let f = self.swipe_commit_threshold_fraction;
        if !(f > 0.0 && f <= 1.0) {
            return Err(InteractionError::invalid_configuration(format!(
                "swipe_commit_threshold_fraction must be in (0, 1], got {}",
                f
            )));
        }
        if !self.drag_start_slop_px.is_finite() || self.drag_start_slop_px < 0.0 {
            return Err(InteractionError::invalid_configuration(
                "drag_start_slop_px must be a finite non-negative number",
            ));
        }
        let k = self.cursor_follow_factor;
        if !(k > 0.0 && k <= 1.0) {
            return Err(InteractionError::invalid_configuration(format!(
                "cursor_follow_factor must be in (0, 1], got {}",
                k
            )));
        }
        Ok(())
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Missing file means defaults; a present but broken file is logged and
    /// also falls back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config rejected, using defaults");
                Self::default()
            }
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(InteractionError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<InteractionError> for ConfigError {
    fn from(e: InteractionError) -> Self {
        ConfigError::Invalid(e)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
