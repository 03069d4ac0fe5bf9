//! Simulated export progress.
//!
//! `start` opens `#pf-export-modal` and ticks a fake percentage forward
//! by a random step until it reaches 100. `stop` closes the modal and
//! returns to idle from any phase. At most one timer is alive per
//! simulator: the previous one is dropped before a new one is created.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::{Rng, RngCore};

use crate::config::{STEP_MAX, STEP_MIN, TICK_PERIOD_MS};
use crate::dom::{Element, Hook, Surface};
use crate::timer::Scheduler;
use crate::types::{ExportPhase, Notification};

const OPEN: &str = "is-open";
const EXPORTING: &str = "is-exporting";
const COMPLETE: &str = "is-complete";

struct ProcessState<T> {
    percent: u8,
    phase: ExportPhase,
    timer: Option<T>,
}

impl<T> Default for ProcessState<T> {
    fn default() -> Self {
        Self {
            percent: 0,
            phase: ExportPhase::Idle,
            timer: None,
        }
    }
}

/// Drives the export modal through idle -> exporting -> complete.
pub struct ExportProgressSimulator<T: Scheduler> {
    scheduler: Rc<T>,
    rng: Rc<RefCell<Box<dyn RngCore>>>,
    state: Rc<RefCell<ProcessState<T::Timer>>>,
    period_ms: u32,
}

impl<T: Scheduler> Clone for ExportProgressSimulator<T> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            rng: self.rng.clone(),
            state: self.state.clone(),
            period_ms: self.period_ms,
        }
    }
}

impl<T: Scheduler> ExportProgressSimulator<T> {
    pub fn new(scheduler: T, rng: Box<dyn RngCore>) -> Self {
        Self::with_period(scheduler, rng, TICK_PERIOD_MS)
    }

    pub fn with_period(scheduler: T, rng: Box<dyn RngCore>, period_ms: u32) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            rng: Rc::new(RefCell::new(rng)),
            state: Rc::new(RefCell::new(ProcessState::default())),
            period_ms,
        }
    }

    pub fn percent(&self) -> u8 {
        self.state.borrow().percent
    }

    pub fn phase(&self) -> ExportPhase {
        self.state.borrow().phase
    }

    /// True while a tick is scheduled.
    pub fn is_running(&self) -> bool {
        self.state.borrow().timer.is_some()
    }

    /// Open the modal and (re)start the simulation from 0.
    ///
    /// Returns false, touching nothing, when the modal is absent.
    pub fn start<S: Surface>(&self, root: &S) -> bool {
        let Some(modal) = root.query(Hook::ExportModal) else {
            return false;
        };

        let previous = {
            let mut state = self.state.borrow_mut();
            state.percent = 0;
            state.phase = ExportPhase::Exporting;
            state.timer.take()
        };
        drop(previous);

        modal.add_class(OPEN);
        modal.remove_class(COMPLETE);
        modal.set_attr("aria-hidden", "false");
        modal.set_attr("aria-modal", "true");

        let tick = {
            let state = Rc::downgrade(&self.state);
            let rng = self.rng.clone();
            let root = root.clone();
            move || advance(&state, &rng, &root, &modal)
        };
        let timer = self.scheduler.every(self.period_ms, Box::new(tick));
        self.state.borrow_mut().timer = Some(timer);

        // Listeners may stop the run; the timer must already be in place.
        root.emit(&Notification::ExportStart);

        log::debug!("Export simulation started");
        true
    }

    /// Close the modal and reset to idle, whatever the current phase.
    ///
    /// Returns false, touching nothing, when the modal is absent.
    pub fn stop<S: Surface>(&self, root: &S) -> bool {
        let Some(modal) = root.query(Hook::ExportModal) else {
            return false;
        };

        self.cancel();

        modal.remove_class(OPEN);
        modal.remove_class(EXPORTING);
        modal.remove_class(COMPLETE);
        modal.set_attr("aria-hidden", "true");
        modal.remove_attr("aria-modal");
        root.emit(&Notification::ExportClosed);

        log::debug!("Export modal closed");
        true
    }

    /// Drop any pending tick and reset the counter without touching the DOM.
    fn cancel(&self) {
        let previous = {
            let mut state = self.state.borrow_mut();
            state.percent = 0;
            state.phase = ExportPhase::Idle;
            state.timer.take()
        };
        drop(previous);
    }
}

fn advance<T, S>(
    state: &Weak<RefCell<ProcessState<T>>>,
    rng: &Rc<RefCell<Box<dyn RngCore>>>,
    root: &S,
    modal: &S::Element,
) where
    S: Surface,
{
    let Some(state) = state.upgrade() else {
        return;
    };

    let step: u8 = rng.borrow_mut().gen_range(STEP_MIN..=STEP_MAX);
    let (percent, finished) = {
        let mut state = state.borrow_mut();
        state.percent = state.percent.saturating_add(step).min(100);
        if state.percent >= 100 {
            state.phase = ExportPhase::Complete;
            (state.percent, state.timer.take())
        } else {
            (state.percent, None)
        }
    };

    root.emit(&Notification::ExportProgress { percent });

    if percent < 100 {
        modal.add_class(EXPORTING);
    } else {
        drop(finished);
        modal.remove_class(EXPORTING);
        modal.add_class(COMPLETE);
        root.emit(&Notification::ExportComplete);
        log::debug!("Export simulation complete");
    }
}
