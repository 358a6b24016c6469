//! Canvas fit-to-window layout for an embedded canvas element.
//!
//! This crate is compiled to WebAssembly and loaded next to a page that hosts
//! a single `canvas.emscripten` element. On resize, fullscreen changes, page
//! load and a few warm-up ticks it rewrites the canvas inline style so the
//! canvas is either a fixed box centered in the viewport or stretched over the
//! whole window.
//!
//! Everything that decides *what* to write is plain Rust and runs natively in
//! tests. The DOM and timer plumbing sits behind the [`adjuster::LayoutHost`]
//! and [`driver::Scheduler`] traits and is only compiled with the `browser`
//! feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`adjuster`] | `LayoutAdjuster`: one recompute against a host |
//! | [`driver`] | Retry and warm-up scheduling around the adjuster |
//! | [`layout`] | Viewport and centered/fill mode selection |
//! | [`style`] | The seven inline style properties for each mode |
//! | [`fullscreen`] | Vendor-neutral "is anything fullscreen" check |
//! | [`config`] | `LayoutConfig` and JSON loading |
//! | [`error`] | `LayoutError` |
//! | [`consts`] | Selector, thresholds, delays and DOM names |
//! | `dom` | `web-sys` host and `gloo-timers` scheduler (`browser`) |
//! | `wiring` | Event listeners and JS exports (`browser`) |

pub mod adjuster;
pub mod config;
pub mod consts;
pub mod driver;
pub mod error;
pub mod fullscreen;
pub mod layout;
pub mod style;

#[cfg(feature = "browser")]
pub mod dom;
#[cfg(feature = "browser")]
pub mod wiring;

#[cfg(test)]
mod testing;

pub use adjuster::{LayoutAdjuster, LayoutHost, Recompute, Trigger};
pub use config::LayoutConfig;
pub use driver::{LayoutDriver, Scheduler};
pub use error::LayoutError;
pub use layout::{LayoutMode, Viewport};
pub use style::CanvasStyle;
