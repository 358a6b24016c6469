//! Browser host: `web-sys` reads and writes, `gloo-timers` scheduling.
//!
//! Only compiled with the `browser` feature. Every DOM call that can fail is
//! folded into the host contract: unreadable sizes read as zero, a bad
//! selector reads as "no canvas yet", and a rejected style write becomes
//! [`LayoutError::StyleRejected`].

use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::adjuster::LayoutHost;
use crate::driver::Scheduler;
use crate::error::LayoutError;
use crate::fullscreen::any_indicator_active;
use crate::layout::Viewport;
use crate::style::CanvasStyle;

pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// True when `document[prop]` is neither `null` nor `undefined`.
    fn document_property_set(&self, prop: &str) -> bool {
        match Reflect::get(self.document.as_ref(), &JsValue::from_str(prop)) {
            Ok(value) => !value.is_null() && !value.is_undefined(),
            Err(_) => false,
        }
    }
}

fn css_pixels(value: Result<JsValue, JsValue>) -> f64 {
    match value {
        Ok(v) => v.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

impl LayoutHost for DomHost {
    type Target = HtmlElement;

    fn viewport(&self) -> Viewport {
        Viewport::new(css_pixels(self.window.inner_width()), css_pixels(self.window.inner_height()))
    }

    fn fullscreen_active(&self) -> bool {
        any_indicator_active(|prop| self.document_property_set(prop))
    }

    fn find_target(&self, selector: &str) -> Option<HtmlElement> {
        match self.document.query_selector(selector) {
            Ok(Some(element)) => match element.dyn_into::<HtmlElement>() {
                Ok(element) => Some(element),
                Err(_) => {
                    warn!("canvas-fit: `{selector}` matched a non-HTML element");
                    None
                }
            },
            Ok(None) => None,
            Err(_) => {
                warn!("canvas-fit: `{selector}` is not a valid selector");
                None
            }
        }
    }

    fn apply_style(&self, target: &HtmlElement, style: &CanvasStyle) -> Result<(), LayoutError> {
        let declaration = target.style();
        style.write_all(|property, value| declaration.set_property(property, value))
    }
}

/// Schedules tasks on `setTimeout`; handles are forgotten, never cancelled.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
