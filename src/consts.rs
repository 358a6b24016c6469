//! Shared constants for the canvas fit layer.

// ── Target ──────────────────────────────────────────────────────

/// Selector for the canvas whose inline style is managed.
pub const TARGET_SELECTOR: &str = "canvas.emscripten";

// ── Layout ──────────────────────────────────────────────────────

/// A viewport wider or taller than this (CSS px) counts as a large window.
pub const LARGE_WINDOW_THRESHOLD_PX: f64 = 800.0;

/// Side length of the centered canvas box, in CSS pixels.
pub const CENTERED_SIZE_PX: u32 = 600;

// ── Timing ──────────────────────────────────────────────────────

/// Delay before re-running a recompute that found no target.
pub const RETRY_DELAY_MS: u32 = 100;

/// One-shot recomputes queued at install time.
pub const WARMUP_DELAYS_MS: [u32; 3] = [500, 1000, 2000];

// ── DOM names ───────────────────────────────────────────────────

/// Document properties that hold the current fullscreen element, per engine.
pub const FULLSCREEN_ELEMENT_PROPERTIES: [&str; 4] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

/// Document events fired when fullscreen state changes, per engine.
pub const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Window event fired on viewport resize.
pub const RESIZE_EVENT: &str = "resize";

/// Window event fired once the page has loaded.
pub const LOAD_EVENT: &str = "load";
