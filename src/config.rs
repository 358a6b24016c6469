//! Layout configuration.
//!
//! Defaults reproduce the stock behavior: `canvas.emscripten`, an 800 px
//! large-window threshold, a 600 px centered box, 100 ms retry polling and
//! warm-up runs at 500/1000/2000 ms. A host page can override any subset by
//! passing a JSON object to `installWithConfig`.

use serde::Deserialize;

use crate::consts::{CENTERED_SIZE_PX, LARGE_WINDOW_THRESHOLD_PX, RETRY_DELAY_MS, TARGET_SELECTOR, WARMUP_DELAYS_MS};
use crate::error::LayoutError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// CSS selector for the managed canvas; the first match wins.
    pub selector: String,
    pub large_window_threshold_px: f64,
    pub centered_size_px: u32,
    /// Delay before polling again for a missing canvas.
    pub retry_delay_ms: u32,
    /// One-shot recomputes queued at install time.
    pub warmup_delays_ms: Vec<u32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            selector: TARGET_SELECTOR.to_owned(),
            large_window_threshold_px: LARGE_WINDOW_THRESHOLD_PX,
            centered_size_px: CENTERED_SIZE_PX,
            retry_delay_ms: RETRY_DELAY_MS,
            warmup_delays_ms: WARMUP_DELAYS_MS.to_vec(),
        }
    }
}

impl LayoutConfig {
    /// Parse a JSON object and validate it. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.selector.trim().is_empty() {
            return Err(LayoutError::InvalidSetting { field: "selector", reason: "must not be empty" });
        }
        if !self.large_window_threshold_px.is_finite() || self.large_window_threshold_px <= 0.0 {
            return Err(LayoutError::InvalidSetting {
                field: "large_window_threshold_px",
                reason: "must be a positive number",
            });
        }
        if self.centered_size_px == 0 {
            return Err(LayoutError::InvalidSetting { field: "centered_size_px", reason: "must be positive" });
        }
        // Zero would re-poll on every timer tick.
        if self.retry_delay_ms == 0 {
            return Err(LayoutError::InvalidSetting { field: "retry_delay_ms", reason: "must be positive" });
        }
        Ok(())
    }
}
