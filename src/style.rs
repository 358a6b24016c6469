//! Inline style sets written to the canvas.
//!
//! Both sets name all seven properties, so applying one always overwrites
//! whatever the other left behind.

use crate::error::LayoutError;
use crate::layout::LayoutMode;

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

/// Values for every inline style property the layout owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasStyle {
    pub width: String,
    pub height: String,
    pub position: &'static str,
    pub top: &'static str,
    pub left: &'static str,
    pub transform: &'static str,
    pub margin: &'static str,
}

impl CanvasStyle {
    /// Fixed `side_px` square whose center sits on the viewport center.
    #[must_use]
    pub fn centered(side_px: u32) -> Self {
        Self {
            width: format!("{side_px}px"),
            height: format!("{side_px}px"),
            position: "absolute",
            top: "50%",
            left: "50%",
            transform: "translate(-50%, -50%)",
            margin: "0",
        }
    }

    /// Full-window box anchored at the top-left corner.
    #[must_use]
    pub fn fill() -> Self {
        Self {
            width: "100%".to_owned(),
            height: "100%".to_owned(),
            position: "absolute",
            top: "0",
            left: "0",
            transform: "none",
            margin: "0",
        }
    }

    #[must_use]
    pub fn for_mode(mode: LayoutMode, centered_side_px: u32) -> Self {
        match mode {
            LayoutMode::Centered => Self::centered(centered_side_px),
            LayoutMode::Fill => Self::fill(),
        }
    }

    /// `(css-name, value)` pairs in write order.
    #[must_use]
    pub fn properties(&self) -> [(&'static str, &str); 7] {
        [
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
            ("position", self.position),
            ("top", self.top),
            ("left", self.left),
            ("transform", self.transform),
            ("margin", self.margin),
        ]
    }

    /// Write every property through `set`, carrying on past rejections so no
    /// property keeps a value from the other mode.
    ///
    /// Returns the first rejected property.
    pub fn write_all<E>(&self, mut set: impl FnMut(&'static str, &str) -> Result<(), E>) -> Result<(), LayoutError> {
        let mut first_rejected = None;
        for (property, value) in self.properties() {
            if set(property, value).is_err() && first_rejected.is_none() {
                first_rejected = Some(property);
            }
        }
        match first_rejected {
            Some(property) => Err(LayoutError::StyleRejected { property }),
            None => Ok(()),
        }
    }
}
