//! Page wiring and JS exports.
//!
//! `install_layout` runs once per page. It registers the resize, fullscreen
//! and load listeners, then queues the warm-up runs. Listener closures are
//! forgotten and live as long as the page does.

use std::cell::RefCell;
use std::rc::Rc;

use log::{Level, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

use crate::adjuster::{LayoutAdjuster, Trigger};
use crate::config::LayoutConfig;
use crate::consts::{FULLSCREEN_CHANGE_EVENTS, LOAD_EVENT, RESIZE_EVENT};
use crate::dom::{DomHost, TimeoutScheduler};
use crate::driver::LayoutDriver;
use crate::error::LayoutError;

type BrowserDriver = LayoutDriver<DomHost, TimeoutScheduler>;

thread_local! {
    static INSTALLED: RefCell<Option<Rc<BrowserDriver>>> = const { RefCell::new(None) };
}

/// Wire every trigger to a shared driver. Fails if already installed.
///
/// The slot is claimed before any listener is attached. If attaching fails
/// partway, the listeners already attached stay live on the claimed driver
/// and a repeat install is refused, so no listener is ever attached twice.
pub fn install_layout(config: LayoutConfig) -> Result<(), LayoutError> {
    config.validate()?;
    if INSTALLED.with(|slot| slot.borrow().is_some()) {
        return Err(LayoutError::AlreadyInstalled);
    }

    let window = web_sys::window().ok_or(LayoutError::NoWindow)?;
    let document = window.document().ok_or(LayoutError::NoDocument)?;
    let selector = config.selector.clone();
    let host = DomHost::new(window.clone(), document.clone());
    let driver = LayoutDriver::new(LayoutAdjuster::new(host, config), TimeoutScheduler);
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&driver)));

    listen(window.as_ref(), RESIZE_EVENT, &driver, Trigger::Resize)?;
    for event in FULLSCREEN_CHANGE_EVENTS {
        listen(document.as_ref(), event, &driver, Trigger::FullscreenChange)?;
    }

    // A wasm module often finishes loading after `load` has already fired.
    if document.ready_state() == "complete" {
        driver.run(Trigger::Load);
    } else {
        listen(window.as_ref(), LOAD_EVENT, &driver, Trigger::Load)?;
    }
    driver.schedule_warmups();

    info!("canvas-fit: installed for `{selector}`");
    Ok(())
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    driver: &Rc<BrowserDriver>,
    trigger: Trigger,
) -> Result<(), LayoutError> {
    let driver = Rc::clone(driver);
    let callback = Closure::wrap(Box::new(move |_event: Event| {
        driver.run(trigger);
    }) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|_| LayoutError::ListenerRejected { event })?;
    callback.forget();
    Ok(())
}

// =============================================================================
// JS EXPORTS
// =============================================================================

/// Module start hook: panic reporting and console logging.
///
/// Does not install the layout; the host page calls `install()` or
/// `installWithConfig()` once the module is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        warn!("canvas-fit: console logger not installed: {err}");
    }
}

/// Install with the stock configuration.
///
/// Nothing is wired until the host page calls this (or `installWithConfig`)
/// exactly once, typically right after the module's init promise resolves:
///
/// ```js
/// await init();
/// install();
/// ```
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    install_layout(LayoutConfig::default())?;
    Ok(())
}

/// Install with a JSON config object; omitted fields keep their defaults.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> Result<(), JsValue> {
    install_layout(LayoutConfig::from_json(json)?)?;
    Ok(())
}

/// Recompute immediately, e.g. after the host page inserts the canvas.
#[wasm_bindgen(js_name = recomputeLayout)]
pub fn recompute_layout() -> Result<(), JsValue> {
    let driver = INSTALLED.with(|slot| slot.borrow().clone()).ok_or(LayoutError::NotInstalled)?;
    driver.run(Trigger::Manual);
    Ok(())
}
