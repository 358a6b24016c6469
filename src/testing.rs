//! In-memory host and scheduler for native tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::adjuster::LayoutHost;
use crate::driver::Scheduler;
use crate::error::LayoutError;
use crate::layout::Viewport;
use crate::style::CanvasStyle;

/// Fake page: viewport, fullscreen flag and an optional canvas.
///
/// Shared through `Rc` so a test can mutate the page while a driver owns it.
#[derive(Default)]
pub struct FakePage {
    pub viewport: Cell<(f64, f64)>,
    pub fullscreen: Cell<bool>,
    pub canvas_present: Cell<bool>,
    pub reject_writes: Cell<bool>,
    pub lookups: RefCell<Vec<String>>,
    pub writes: RefCell<Vec<CanvasStyle>>,
}

impl FakePage {
    pub fn new(width: f64, height: f64, fullscreen: bool, canvas_present: bool) -> Rc<Self> {
        let page = Self::default();
        page.viewport.set((width, height));
        page.fullscreen.set(fullscreen);
        page.canvas_present.set(canvas_present);
        Rc::new(page)
    }

    pub fn last_write(&self) -> Option<CanvasStyle> {
        self.writes.borrow().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }
}

#[derive(Clone)]
pub struct FakeHost(pub Rc<FakePage>);

pub struct FakeCanvas;

impl LayoutHost for FakeHost {
    type Target = FakeCanvas;

    fn viewport(&self) -> Viewport {
        let (width, height) = self.0.viewport.get();
        Viewport::new(width, height)
    }

    fn fullscreen_active(&self) -> bool {
        self.0.fullscreen.get()
    }

    fn find_target(&self, selector: &str) -> Option<FakeCanvas> {
        self.0.lookups.borrow_mut().push(selector.to_owned());
        self.0.canvas_present.get().then_some(FakeCanvas)
    }

    fn apply_style(&self, _target: &FakeCanvas, style: &CanvasStyle) -> Result<(), LayoutError> {
        if self.0.reject_writes.get() {
            return Err(LayoutError::StyleRejected { property: "width" });
        }
        self.0.writes.borrow_mut().push(style.clone());
        Ok(())
    }
}

/// Timer queue on a virtual clock that only advances when a test says so.
#[derive(Default)]
pub struct ManualScheduler {
    now_ms: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

struct Pending {
    due_ms: u64,
    delay_ms: u32,
    task: Box<dyn FnOnce()>,
}

impl ManualScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Requested delays of queued tasks, in queue order.
    pub fn pending_delays(&self) -> Vec<u32> {
        self.pending.borrow().iter().map(|p| p.delay_ms).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Advance the clock to the earliest due task and run it.
    ///
    /// Returns false when nothing is queued.
    pub fn fire_next(&self) -> bool {
        let next = {
            let mut pending = self.pending.borrow_mut();
            let Some(index) = pending.iter().enumerate().min_by_key(|(_, p)| p.due_ms).map(|(i, _)| i) else {
                return false;
            };
            pending.remove(index)
        };
        self.now_ms.set(next.due_ms);
        (next.task)();
        true
    }

    /// Fire tasks until the queue drains or `limit` tasks have run.
    pub fn run_until_idle(&self, limit: usize) -> usize {
        let mut fired = 0;
        while fired < limit && self.fire_next() {
            fired += 1;
        }
        fired
    }
}

impl Scheduler for Rc<ManualScheduler> {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let due_ms = self.now_ms.get() + u64::from(delay_ms);
        self.pending.borrow_mut().push(Pending { due_ms, delay_ms, task });
    }
}
