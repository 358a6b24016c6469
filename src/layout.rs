#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Which of the two style sets a canvas receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Fixed square box centered in the viewport.
    Centered,
    /// Stretched edge to edge over the viewport.
    Fill,
}

impl LayoutMode {
    /// Pick the mode for the current viewport and fullscreen state.
    ///
    /// Large windows and fullscreen both center; only a small, windowed
    /// viewport fills. `threshold` is compared strictly on each axis.
    #[must_use]
    pub fn choose(viewport: Viewport, fullscreen: bool, threshold: f64) -> Self {
        if is_large_window(viewport, threshold) || fullscreen {
            Self::Centered
        } else {
            Self::Fill
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::Fill => "fill",
        }
    }
}

/// True when either viewport axis exceeds `threshold`.
#[must_use]
pub fn is_large_window(viewport: Viewport, threshold: f64) -> bool {
    viewport.width > threshold || viewport.height > threshold
}
