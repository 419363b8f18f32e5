//! Trailing-edge debounce over a cancel-on-drop timer.
//!
//! Each [`Debouncer::trigger`] replaces the pending timer; dropping the old
//! handle cancels it, so only the last call in a burst runs once the delay
//! passes with no further calls.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;

/// Schedules one-shot callbacks. The returned handle cancels on drop.
pub trait Scheduler {
    type Pending;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending;
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Pending>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self { scheduler, delay_ms, pending: RefCell::new(None) }
    }

    /// Restart the quiet period; `task` runs if nothing else triggers first.
    pub fn trigger(&self, task: impl FnOnce() + 'static) {
        // Drop the previous handle before scheduling so it is cancelled first.
        self.pending.borrow_mut().take();
        let next = self.scheduler.schedule(self.delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(next);
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// `setTimeout`-backed scheduler. `gloo_timers` clears the timeout on drop.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "browser")]
impl Scheduler for TimeoutScheduler {
    type Pending = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}
