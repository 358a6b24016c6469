//! Scheduling around [`LayoutAdjuster`]: retry polling and warm-up runs.
//!
//! DESIGN
//! ======
//! The driver is shared through `Rc` so queued tasks can call back into it.
//! Tasks are fire-and-forget: nothing cancels a pending retry or warm-up, and
//! a retry only re-arms itself while the canvas is still missing.

use std::rc::Rc;

use log::debug;

use crate::adjuster::{LayoutAdjuster, LayoutHost, Recompute, Trigger};

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

/// One-shot delayed task queue.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

pub struct LayoutDriver<H: LayoutHost, S: Scheduler> {
    adjuster: LayoutAdjuster<H>,
    scheduler: S,
}

impl<H, S> LayoutDriver<H, S>
where
    H: LayoutHost + 'static,
    S: Scheduler + 'static,
{
    #[must_use]
    pub fn new(adjuster: LayoutAdjuster<H>, scheduler: S) -> Rc<Self> {
        Rc::new(Self { adjuster, scheduler })
    }

    #[must_use]
    pub fn adjuster(&self) -> &LayoutAdjuster<H> {
        &self.adjuster
    }

    /// Recompute now; on a missing canvas queue exactly one retry.
    pub fn run(self: &Rc<Self>, trigger: Trigger) -> Recompute {
        let outcome = self.adjuster.recompute(trigger);
        if let Recompute::Deferred { retry_after_ms } = outcome {
            let driver = Rc::clone(self);
            self.scheduler.schedule(
                retry_after_ms,
                Box::new(move || {
                    driver.run(Trigger::Retry);
                }),
            );
        }
        outcome
    }

    /// Queue one run per configured warm-up delay.
    pub fn schedule_warmups(self: &Rc<Self>) {
        for &delay_ms in &self.adjuster.config().warmup_delays_ms {
            debug!("canvas-fit: warm-up recompute queued at {delay_ms}ms");
            let driver = Rc::clone(self);
            self.scheduler.schedule(
                delay_ms,
                Box::new(move || {
                    driver.run(Trigger::Warmup(delay_ms));
                }),
            );
        }
    }
}
