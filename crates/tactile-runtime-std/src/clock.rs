use std::cell::Cell;
use tactile_core::Clock;
use web_time::Instant;

/// Monotonic clock counting milliseconds from its creation.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to. Used by hosts that drive their own
/// frame time and by tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Cell::new(start_millis),
        }
    }

    /// Moves the clock to `millis`. Attempts to go backwards are ignored.
    pub fn set(&self, millis: u64) {
        if millis < self.now.get() {
            log::warn!(
                "ManualClock: ignoring attempt to rewind from {} to {}",
                self.now.get(),
                millis
            );
            return;
        }
        self.now.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
