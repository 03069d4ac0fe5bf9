//! Repeating timers.
//!
//! A [`Scheduler`] hands out RAII timer handles: the tick keeps firing
//! every period until the handle is dropped. A tick may drop its own
//! handle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;

/// Source of repeating timers.
pub trait Scheduler: 'static {
    /// Dropping the handle cancels the timer.
    type Timer: 'static;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Timer;
}

// =============================================================================
// Browser
// =============================================================================

/// `setInterval` through `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Handle to a running browser interval.
pub struct BrowserTimer(Option<Interval>);

impl Scheduler for BrowserScheduler {
    type Timer = BrowserTimer;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer(Some(Interval::new(period_ms, tick)))
    }
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        if let Some(interval) = self.0.take() {
            // The interval is cleared now; the closure may still be on the
            // stack, so it is released on the next microtask.
            let closure = interval.cancel();
            wasm_bindgen_futures::spawn_local(async move {
                drop(closure);
            });
        }
    }
}

// =============================================================================
// Manual clock
// =============================================================================

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct Entry {
    id: u64,
    period: u64,
    due: u64,
    tick: Tick,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Virtual clock driven by [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

/// Handle to a [`ManualScheduler`] timer.
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.clock.borrow().entries.len()
    }

    /// Move the clock forward by `ms`, firing every tick that falls due,
    /// earliest first.
    pub fn advance(&self, ms: u64) {
        let target = self.now() + ms;
        loop {
            let tick = {
                let mut guard = self.clock.borrow_mut();
                let clock = &mut *guard;
                let next = clock
                    .entries
                    .iter_mut()
                    .filter(|e| e.due <= target)
                    .min_by_key(|e| (e.due, e.id));
                match next {
                    Some(entry) => {
                        let due = entry.due;
                        entry.due += entry.period;
                        let tick = entry.tick.clone();
                        clock.now = due;
                        tick
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            };
            (tick.borrow_mut())();
        }
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTimer {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let period = u64::from(period_ms.max(1));
        let due = clock.now + period;
        clock.entries.push(Entry {
            id,
            period,
            due,
            tick: Rc::new(RefCell::new(tick)),
        });
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.clock),
        }
    }
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().entries.retain(|e| e.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_ticks_fire_each_period() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _timer = scheduler.every(400, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(399);
        assert_eq!(hits.get(), 0);
        scheduler.advance(1);
        assert_eq!(hits.get(), 1);
        scheduler.advance(1200);
        assert_eq!(hits.get(), 4);
        assert_eq!(scheduler.now(), 1600);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let timer = scheduler.every(100, Box::new(move || counter.set(counter.get() + 1)));

        scheduler.advance(250);
        drop(timer);
        scheduler.advance(1000);
        assert_eq!(hits.get(), 2);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_tick_can_cancel_itself() {
        let scheduler = ManualScheduler::new();
        let slot: Rc<RefCell<Option<ManualTimer>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let own = slot.clone();
        let counter = hits.clone();
        let timer = scheduler.every(
            10,
            Box::new(move || {
                counter.set(counter.get() + 1);
                if counter.get() == 3 {
                    own.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(timer);

        scheduler.advance(100);
        assert_eq!(hits.get(), 3);
        assert_eq!(scheduler.pending(), 0);
    }
}
