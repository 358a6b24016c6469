//! One layout recompute against an abstract host.
//!
//! ARCHITECTURE
//! ============
//! `LayoutAdjuster` reads viewport and fullscreen state fresh on every call,
//! looks the canvas up again, and writes the complete style set for the chosen
//! mode. It keeps no state between calls, so redundant triggers are harmless.
//! Scheduling lives in [`crate::driver`]; the adjuster only reports that a
//! retry is needed.

use log::{debug, warn};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::layout::{LayoutMode, Viewport, is_large_window};
use crate::style::CanvasStyle;

#[cfg(test)]
#[path = "adjuster_test.rs"]
mod adjuster_test;

/// Environment the adjuster reads from and writes to.
///
/// Implemented over `web-sys` in the browser and by a fake in tests.
pub trait LayoutHost {
    /// Handle to the element whose style is managed.
    type Target;

    fn viewport(&self) -> Viewport;

    /// True when any recognized fullscreen indicator is active.
    fn fullscreen_active(&self) -> bool;

    /// First element matching `selector`, if it exists yet.
    fn find_target(&self, selector: &str) -> Option<Self::Target>;

    fn apply_style(&self, target: &Self::Target, style: &CanvasStyle) -> Result<(), LayoutError>;
}

/// Why a recompute ran. Only used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Resize,
    FullscreenChange,
    Load,
    Warmup(u32),
    Retry,
    Manual,
}

/// Result of a single recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// Target found; the style for this mode was written.
    Applied(LayoutMode),
    /// Target missing; nothing was written. Run again after the delay.
    Deferred { retry_after_ms: u32 },
}

pub struct LayoutAdjuster<H: LayoutHost> {
    host: H,
    config: LayoutConfig,
}

impl<H: LayoutHost> LayoutAdjuster<H> {
    #[must_use]
    pub fn new(host: H, config: LayoutConfig) -> Self {
        Self { host, config }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Recompute and apply the canvas layout from current ambient state.
    pub fn recompute(&self, trigger: Trigger) -> Recompute {
        let Some(target) = self.host.find_target(&self.config.selector) else {
            debug!(
                "canvas-fit: {:?}: no element matches `{}`, retrying in {}ms",
                trigger, self.config.selector, self.config.retry_delay_ms
            );
            return Recompute::Deferred { retry_after_ms: self.config.retry_delay_ms };
        };

        let viewport = self.host.viewport();
        let threshold = self.config.large_window_threshold_px;
        let large = is_large_window(viewport, threshold);
        let fullscreen = self.host.fullscreen_active();
        let mode = LayoutMode::choose(viewport, fullscreen, threshold);

        debug!(
            "canvas-fit: {:?}: viewport {}x{}, large window: {large}, fullscreen: {fullscreen}, applying {} style",
            trigger,
            viewport.width,
            viewport.height,
            mode.as_str()
        );

        let style = CanvasStyle::for_mode(mode, self.config.centered_size_px);
        if let Err(err) = self.host.apply_style(&target, &style) {
            warn!("canvas-fit: {err}");
        }
        Recompute::Applied(mode)
    }
}
