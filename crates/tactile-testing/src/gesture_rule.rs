//! Scripted pointer input against a real recognizer.
//!
//! [`GestureTestRule`] attaches a [`GestureRecognizer`] to a single target on
//! top of the std runtime services, with a [`ManualClock`] in place of wall
//! time. Tests feed pointer events, advance time and then inspect the
//! recorded notifications.
//!
//! # Example
//!
//! ```
//! use tactile_testing::GestureTestRule;
//!
//! let rule = GestureTestRule::new();
//! rule.down(1, 10.0, 10.0);
//! rule.advance(500);
//! rule.up(1, 10.0, 10.0);
//! assert_eq!(rule.event_names(), vec!["pressstart", "pressend"]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use tactile_core::{
    Clock, Platform, Point, PointerEvent, PointerEventKind, PointerId, PointerKind, TargetId,
};
use tactile_foundation::{
    ConfigError, GestureConfig, GestureEvent, GestureEventKind, GestureRecognizer,
    RecognizerState,
};
use tactile_runtime_std::{platform_with, ManualClock, PointerHub, TimerQueue};

/// Target the rule's recognizer is attached to.
pub const TEST_TARGET: TargetId = 1;

pub struct GestureTestRule {
    clock: Rc<ManualClock>,
    timers: Rc<TimerQueue>,
    hub: Rc<PointerHub>,
    recognizer: GestureRecognizer,
    events: Rc<RefCell<Vec<GestureEvent>>>,
    pointer_kind: RefCell<PointerKind>,
}

impl GestureTestRule {
    /// A rule using the default gesture thresholds.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Panics if `config` does not validate; see [`Self::try_with_config`].
    pub fn with_config(config: GestureConfig) -> Self {
        Self::try_with_config(config).expect("test gesture config must validate")
    }

    pub fn try_with_config(config: GestureConfig) -> Result<Self, ConfigError> {
        let clock = Rc::new(ManualClock::new(0));
        let timers = Rc::new(TimerQueue::new(clock.clone()));
        let hub = Rc::new(PointerHub::new());
        let platform = platform_with(&hub, &timers, clock.clone());
        let recognizer = GestureRecognizer::attach(TEST_TARGET, config, platform)?;

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        recognizer.subscribe_all(move |event| sink.borrow_mut().push(event.clone()));

        Ok(Self {
            clock,
            timers,
            hub,
            recognizer,
            events,
            pointer_kind: RefCell::new(PointerKind::Touch),
        })
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    pub fn hub(&self) -> &PointerHub {
        &self.hub
    }

    /// The services the rule's recognizer runs on, for attaching more.
    pub fn platform(&self) -> Platform {
        platform_with(&self.hub, &self.timers, self.clock.clone())
    }

    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Device class used by subsequent `down`/`move_to`/`up` calls.
    pub fn set_pointer_kind(&self, kind: PointerKind) {
        *self.pointer_kind.borrow_mut() = kind;
    }

    pub fn down(&self, id: PointerId, x: f32, y: f32) {
        self.send(PointerEventKind::Down, id, x, y);
    }

    pub fn down_with_kind(&self, id: PointerId, x: f32, y: f32, kind: PointerKind) {
        let event = PointerEvent::new(PointerEventKind::Down, id, Point::new(x, y), TEST_TARGET)
            .with_pointer_kind(kind);
        self.hub.dispatch(&event);
    }

    pub fn move_to(&self, id: PointerId, x: f32, y: f32) {
        self.send(PointerEventKind::Move, id, x, y);
    }

    pub fn up(&self, id: PointerId, x: f32, y: f32) {
        self.send(PointerEventKind::Up, id, x, y);
    }

    pub fn cancel(&self, id: PointerId) {
        self.send(PointerEventKind::Cancel, id, 0.0, 0.0);
    }

    /// Sends an arbitrary event through the hub, e.g. one hit-tested
    /// against another target.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        self.hub.dispatch(event)
    }

    /// Advances the clock by `millis`, stopping at every timer deadline on
    /// the way so callbacks observe their exact due time.
    pub fn advance(&self, millis: u64) {
        let until = self.now().saturating_add(millis);
        while let Some(deadline) = self.timers.next_deadline() {
            if deadline > until {
                break;
            }
            self.clock.set(deadline);
            self.timers.run_due();
        }
        self.clock.set(until);
        self.timers.run_due();
    }

    pub fn events(&self) -> Vec<GestureEvent> {
        self.events.borrow().clone()
    }

    /// Returns the recorded notifications and forgets them.
    pub fn take_events(&self) -> Vec<GestureEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(GestureEvent::name).collect()
    }

    pub fn count(&self, kind: GestureEventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.kind() == kind)
            .count()
    }

    /// The most recent notification of `kind`.
    pub fn last(&self, kind: GestureEventKind) -> Option<GestureEvent> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|event| event.kind() == kind)
            .cloned()
    }

    pub fn captured_pointers(&self) -> Vec<PointerId> {
        self.hub.captured_pointers(TEST_TARGET)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn state(&self) -> RecognizerState {
        self.recognizer.state()
    }

    pub fn dispose(&self) {
        self.recognizer.dispose();
    }

    fn send(&self, kind: PointerEventKind, id: PointerId, x: f32, y: f32) {
        let pointer_kind = self.pointer_kind.borrow().clone();
        let event = PointerEvent::new(kind, id, Point::new(x, y), TEST_TARGET)
            .with_pointer_kind(pointer_kind);
        self.hub.dispatch(&event);
    }
}

impl Default for GestureTestRule {
    fn default() -> Self {
        Self::new()
    }
}
