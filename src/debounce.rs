//! Input Debouncing
//!
//! Collapses a burst of calls into a single deferred call that runs once the
//! calls stop for `wait_ms`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Something that can run a task later. Dropping the returned handle
/// must cancel the task if it has not run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo-timers
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    pending: RefCell<Option<S::Handle>>,
    armed: Rc<Cell<bool>>,
}

impl<S: Scheduler> Debouncer<S> {
    /// `wait_ms == 0` disables debouncing: `call` runs the task immediately.
    pub fn new(scheduler: S, wait_ms: u32) -> Self {
        Self {
            scheduler,
            wait_ms,
            pending: RefCell::new(None),
            armed: Rc::new(Cell::new(false)),
        }
    }

    /// Replace any pending task with `task` and restart the quiet window
    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        if self.wait_ms == 0 {
            task();
            return;
        }

        let armed = Rc::clone(&self.armed);
        armed.set(true);
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                // The spent handle stays in `pending` until the next call;
                // dropping a timer from inside its own callback is not allowed.
                armed.set(false);
                task();
            }),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending task, if any
    pub fn cancel(&self) {
        self.armed.set(false);
        self.pending.borrow_mut().take();
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    struct Slot {
        due: u64,
        task: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Scheduler driven by an explicit clock
    #[derive(Default)]
    pub struct ManualClock {
        now: Cell<u64>,
        slots: RefCell<Vec<Slot>>,
    }

    pub struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl ManualClock {
        /// Move time forward and run every task that came due
        pub fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Box<dyn FnOnce()>> = self
                .slots
                .borrow_mut()
                .iter_mut()
                .filter(|slot| slot.due <= now && !slot.cancelled.get())
                .filter_map(|slot| slot.task.take())
                .collect();
            for task in due {
                task();
            }
        }

        pub fn scheduled(&self) -> usize {
            self.slots.borrow().len()
        }
    }

    impl Scheduler for Rc<ManualClock> {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.slots.borrow_mut().push(Slot {
                due: self.now.get() + u64::from(delay_ms),
                task: Some(task),
                cancelled: Rc::clone(&cancelled),
            });
            ManualHandle(cancelled)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualClock;
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Rc<RefCell<Vec<String>>>) {
        (Rc::new(Cell::new(0)), Rc::new(RefCell::new(Vec::new())))
    }

    #[test]
    fn test_burst_runs_once_after_quiet_window() {
        let clock = Rc::new(ManualClock::default());
        let debouncer = Debouncer::new(Rc::clone(&clock), 300);
        let (runs, seen) = counter();

        for (i, typed) in ["b", "be", "ber", "bert"].into_iter().enumerate() {
            if i > 0 {
                clock.advance(100);
            }
            let runs = Rc::clone(&runs);
            let seen = Rc::clone(&seen);
            let typed = typed.to_string();
            debouncer.call(move || {
                runs.set(runs.get() + 1);
                seen.borrow_mut().push(typed);
            });
        }

        clock.advance(299);
        assert_eq!(runs.get(), 0);
        assert!(debouncer.is_pending());

        clock.advance(1);
        assert_eq!(runs.get(), 1);
        assert_eq!(*seen.borrow(), vec!["bert".to_string()]);
        assert!(!debouncer.is_pending());

        clock.advance(1000);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_separate_bursts_each_run() {
        let clock = Rc::new(ManualClock::default());
        let debouncer = Debouncer::new(Rc::clone(&clock), 300);
        let (runs, _) = counter();

        for _ in 0..2 {
            let runs = Rc::clone(&runs);
            debouncer.call(move || runs.set(runs.get() + 1));
            clock.advance(300);
        }
        assert_eq!(runs.get(), 2);
        assert_eq!(clock.scheduled(), 2);
    }

    #[test]
    fn test_cancel_drops_pending_task() {
        let clock = Rc::new(ManualClock::default());
        let debouncer = Debouncer::new(Rc::clone(&clock), 300);
        let (runs, _) = counter();

        let r = Rc::clone(&runs);
        debouncer.call(move || r.set(r.get() + 1));
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        clock.advance(500);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_zero_wait_runs_immediately() {
        let clock = Rc::new(ManualClock::default());
        let debouncer = Debouncer::new(Rc::clone(&clock), 0);
        let (runs, _) = counter();

        let r = Rc::clone(&runs);
        debouncer.call(move || r.set(r.get() + 1));
        assert_eq!(runs.get(), 1);
        assert_eq!(clock.scheduled(), 0);
        assert!(!debouncer.is_pending());
    }
}
