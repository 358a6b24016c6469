//! Vendor-neutral fullscreen detection.
//!
//! Browsers expose the current fullscreen element under different property
//! names. Callers supply a probe that reports whether one named property is
//! non-null; this module owns the list and the "any of them" rule.

use crate::consts::FULLSCREEN_ELEMENT_PROPERTIES;

#[cfg(test)]
#[path = "fullscreen_test.rs"]
mod fullscreen_test;

/// True when `probe` reports a non-null value for any known property.
///
/// Stops at the first positive answer.
pub fn any_indicator_active(probe: impl FnMut(&'static str) -> bool) -> bool {
    FULLSCREEN_ELEMENT_PROPERTIES.into_iter().any(probe)
}
