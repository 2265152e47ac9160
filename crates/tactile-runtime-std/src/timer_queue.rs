//! Host-driven single-shot timers.
//!
//! Deadlines are kept in an ordered map keyed by `(deadline, id)`, so timers
//! sharing a deadline fire in the order they were scheduled. Nothing runs
//! until the host calls [`TimerQueue::run_due`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use tactile_core::collections::HashMap;
use tactile_core::{Clock, Scheduler, TimerCallback, TimerHandle};

#[derive(Default)]
struct QueueState {
    next_id: u64,
    pending: BTreeMap<(u64, u64), TimerCallback>,
    deadlines: HashMap<u64, u64>,
}

pub struct TimerQueue {
    clock: Rc<dyn Clock>,
    state: RefCell<QueueState>,
}

impl TimerQueue {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            state: RefCell::new(QueueState::default()),
        }
    }

    /// Earliest pending deadline, in clock milliseconds.
    pub fn next_deadline(&self) -> Option<u64> {
        self.state
            .borrow()
            .pending
            .keys()
            .next()
            .map(|(deadline, _)| *deadline)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs every callback whose deadline has passed and returns how many ran.
    ///
    /// Callbacks run with the queue unlocked, so they may schedule or cancel
    /// timers; a timer they schedule that is already due runs in this call.
    pub fn run_due(&self) -> usize {
        let mut fired = 0;
        loop {
            let now = self.clock.now_millis();
            let callback = {
                let mut state = self.state.borrow_mut();
                let Some(&(deadline, id)) = state.pending.keys().next() else {
                    break;
                };
                if deadline > now {
                    break;
                }
                state.deadlines.remove(&id);
                state.pending.remove(&(deadline, id))
            };
            if let Some(callback) = callback {
                callback();
                fired += 1;
            }
        }
        fired
    }
}

impl Scheduler for TimerQueue {
    fn after(&self, delay_ms: u64, callback: TimerCallback) -> TimerHandle {
        let deadline = self.clock.now_millis().saturating_add(delay_ms);
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.pending.insert((deadline, id), callback);
        state.deadlines.insert(id, deadline);
        log::trace!("timer {id} scheduled for {deadline}");
        TimerHandle::from_raw(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let id = handle.into_raw();
        let mut state = self.state.borrow_mut();
        if let Some(deadline) = state.deadlines.remove(&id) {
            state.pending.remove(&(deadline, id));
            log::trace!("timer {id} cancelled");
        }
    }
}
