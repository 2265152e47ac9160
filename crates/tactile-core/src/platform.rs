//! Platform abstraction traits for gesture recognition.
//!
//! These traits let a recognizer delegate event delivery, pointer capture,
//! timing and delayed work to the host platform, so the state machine never
//! depends directly on a windowing system or on `std` timing APIs.
//!
//! Everything here is single-threaded: handlers and callbacks are plain
//! `Rc` closures and are never required to be `Send`.

use crate::{PointerEvent, PointerEventKind, PointerId, TargetId};
use std::rc::Rc;

/// Provides monotonic timing information.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin. Never decreases.
    fn now_millis(&self) -> u64;
}

/// Opaque handle for a pending single-shot callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

pub type TimerCallback = Box<dyn FnOnce()>;

/// Runs single-shot callbacks after a delay.
pub trait Scheduler {
    /// Schedule `callback` to run once, `delay_ms` milliseconds from now.
    ///
    /// Implementations must never invoke the callback from inside this call.
    fn after(&self, delay_ms: u64, callback: TimerCallback) -> TimerHandle;

    /// Cancel a pending callback. Unknown or already fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}

/// Opaque handle for a raw pointer event subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

/// Delivers raw pointer events for a target, one event at a time.
pub trait PointerEventSource {
    fn subscribe(
        &self,
        target: TargetId,
        kind: PointerEventKind,
        handler: PointerHandler,
    ) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

/// Binds a pointer to a target so every later event for that pointer is
/// routed to the target regardless of where the pointer is on screen.
pub trait PointerCapture {
    fn capture(&self, target: TargetId, pointer: PointerId);

    /// Release a capture held by `target`. Redundant releases are no-ops.
    fn release(&self, target: TargetId, pointer: PointerId);
}

/// The set of platform services a recognizer is attached with.
#[derive(Clone)]
pub struct Platform {
    pub events: Rc<dyn PointerEventSource>,
    pub capture: Rc<dyn PointerCapture>,
    pub scheduler: Rc<dyn Scheduler>,
    pub clock: Rc<dyn Clock>,
}

impl Platform {
    pub fn new(
        events: Rc<dyn PointerEventSource>,
        capture: Rc<dyn PointerCapture>,
        scheduler: Rc<dyn Scheduler>,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            events,
            capture,
            scheduler,
            clock,
        }
    }
}
