//! Standard library backed runtime services for Tactile
//!
//! Ready-made implementations of the platform traits from `tactile-core`:
//! clocks, a host-driven timer queue and an in-process pointer hub that
//! routes events and owns pointer capture.

mod clock;
mod pointer_hub;
mod timer_queue;

pub use clock::{ManualClock, StdClock};
pub use pointer_hub::PointerHub;
pub use timer_queue::TimerQueue;

use std::rc::Rc;
use tactile_core::{Clock, Platform};

/// Wires a hub, a timer queue and a clock into a [`Platform`].
pub fn platform_with(
    hub: &Rc<PointerHub>,
    timers: &Rc<TimerQueue>,
    clock: Rc<dyn Clock>,
) -> Platform {
    Platform::new(hub.clone(), hub.clone(), timers.clone(), clock)
}
