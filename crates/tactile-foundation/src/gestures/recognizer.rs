//! Per-target gesture recognizer.
//!
//! A [`GestureRecognizer`] subscribes to the raw pointer events of one target
//! and turns them into tap, press, pan, swipe and pinch notifications. All
//! state lives in a single [`RecognizerState`] plus the tracked contacts and
//! the pending press timer; every handler is a `match` on the current state.
//!
//! Handlers mutate the machine and collect notifications while it is
//! borrowed, then dispatch them once the borrow is released. Listeners can
//! therefore call back into the recognizer, including disposing it, which
//! suppresses every notification still waiting to be delivered.

use super::config::{GestureConfig, MultiContactPolicy};
use super::contact::{Contact, Contacts};
use super::events::{
    GestureEvent, GestureEventKind, PanEvent, PinchEvent, PressEvent, SwipeEvent, TapEvent,
};
use super::listeners::{GestureListener, ListenerId, ListenerRegistry};
use super::state::RecognizerState;
use super::swipe;
use crate::ConfigError;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tactile_core::{
    Platform, Point, PointerEvent, PointerEventKind, PointerHandler, PointerId, SubscriptionId,
    TargetId, TimerHandle,
};

type Emissions = SmallVec<[GestureEvent; 2]>;

#[derive(Default)]
struct Machine {
    state: RecognizerState,
    contacts: Contacts,
    press_timer: Option<TimerHandle>,
}

struct Inner {
    target: TargetId,
    config: GestureConfig,
    platform: Platform,
    machine: RefCell<Machine>,
    listeners: RefCell<ListenerRegistry>,
    subscriptions: RefCell<SmallVec<[SubscriptionId; 4]>>,
    disposed: Cell<bool>,
}

/// Recognizes gestures on one target until disposed.
///
/// Dropping the recognizer disposes it.
pub struct GestureRecognizer {
    inner: Rc<Inner>,
}

impl GestureRecognizer {
    /// Starts recognizing gestures on `target`.
    ///
    /// Subscribes to down, move, up and cancel events for the target through
    /// `platform.events`. Fails only when `config` does not validate.
    pub fn attach(
        target: TargetId,
        config: GestureConfig,
        platform: Platform,
    ) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            log::warn!("refusing to attach gestures to target {target}: {err}");
            return Err(err);
        }

        let inner = Rc::new(Inner {
            target,
            config,
            platform,
            machine: RefCell::new(Machine::default()),
            listeners: RefCell::new(ListenerRegistry::default()),
            subscriptions: RefCell::new(SmallVec::new()),
            disposed: Cell::new(false),
        });

        let subscriptions: SmallVec<[SubscriptionId; 4]> = PointerEventKind::ALL
            .into_iter()
            .map(|kind| {
                let weak = Rc::downgrade(&inner);
                let handler: PointerHandler = Rc::new(move |event: &PointerEvent| {
                    if let Some(inner) = weak.upgrade() {
                        inner.handle_pointer_event(event);
                    }
                });
                inner.platform.events.subscribe(target, kind, handler)
            })
            .collect();
        *inner.subscriptions.borrow_mut() = subscriptions;

        log::debug!("attached gesture recognizer to target {target}");
        Ok(Self { inner })
    }

    /// Target the recognizer was attached to.
    pub fn target(&self) -> TargetId {
        self.inner.target
    }

    /// Thresholds fixed at attach time.
    pub fn config(&self) -> &GestureConfig {
        &self.inner.config
    }

    /// Current recognition state; `Idle` once disposed.
    pub fn state(&self) -> RecognizerState {
        self.inner.machine.borrow().state
    }

    /// Ids of the contacts currently tracked (and captured), oldest first.
    pub fn tracked_contacts(&self) -> Vec<PointerId> {
        self.inner.machine.borrow().contacts.ids().collect()
    }

    /// Registers `listener` for notifications of one kind.
    pub fn subscribe(
        &self,
        kind: GestureEventKind,
        listener: impl Fn(&GestureEvent) + 'static,
    ) -> ListenerId {
        self.inner.add_listener(Some(kind), Rc::new(listener))
    }

    /// Registers `listener` for every notification.
    pub fn subscribe_all(&self, listener: impl Fn(&GestureEvent) + 'static) -> ListenerId {
        self.inner.add_listener(None, Rc::new(listener))
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.listeners.borrow_mut().unsubscribe(id)
    }

    /// Number of registered listeners, filtered or not.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// True once [`Self::dispose`] ran, explicitly or on drop.
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Stops recognition: unsubscribes from the platform, cancels the press
    /// timer, releases every captured contact and drops all listeners.
    ///
    /// Calling it again is a no-op.
    pub fn dispose(&self) {
        self.inner.dispose();
    }
}

impl Drop for GestureRecognizer {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl Inner {
    fn add_listener(
        &self,
        filter: Option<GestureEventKind>,
        listener: GestureListener,
    ) -> ListenerId {
        self.listeners.borrow_mut().subscribe(filter, listener)
    }

    fn now(&self) -> u64 {
        self.platform.clock.now_millis()
    }

    fn handle_pointer_event(self: &Rc<Self>, event: &PointerEvent) {
        if self.disposed.get() {
            log::debug!(
                "target {}: ignoring {:?} for pointer {} after dispose",
                self.target,
                event.kind,
                event.id
            );
            return;
        }

        let emissions = {
            let mut machine = self.machine.borrow_mut();
            let mut emissions = Emissions::new();
            match event.kind {
                PointerEventKind::Down => self.on_down(&mut machine, event, &mut emissions),
                PointerEventKind::Move => self.on_move(&mut machine, event, &mut emissions),
                PointerEventKind::Up => self.on_up(&mut machine, event, &mut emissions),
                PointerEventKind::Cancel => self.on_cancel(&mut machine, event, &mut emissions),
            }
            self.settle_if_disposed(&mut machine, &mut emissions);
            emissions
        };
        self.dispatch(emissions);
    }

    fn on_down(
        self: &Rc<Self>,
        machine: &mut Machine,
        event: &PointerEvent,
        emissions: &mut Emissions,
    ) {
        if machine.contacts.contains(event.id) {
            log::debug!("target {}: pointer {} is already down", self.target, event.id);
            return;
        }
        let now = self.now();

        match machine.contacts.len() {
            0 => {
                self.track(machine, Contact::new(event, now));
                self.transition(machine, RecognizerState::PossibleTap);
                self.arm_press_timer(machine);
            }
            1 => {
                if self.config.multi_contact == MultiContactPolicy::Ignore {
                    log::debug!(
                        "target {}: ignoring second pointer {}",
                        self.target,
                        event.id
                    );
                    return;
                }
                self.cancel_press_timer(machine);
                if let Some(first) = machine.contacts.first() {
                    match machine.state {
                        RecognizerState::Panning => {
                            let cancel = self.pan_event(first, Point::ZERO);
                            emissions.push(GestureEvent::PanCancel(cancel));
                        }
                        RecognizerState::Pressing => {
                            let cancel = self.press_event(first, now);
                            emissions.push(GestureEvent::PressCancel(cancel));
                        }
                        _ => {}
                    }
                }
                self.track(machine, Contact::new(event, now));
                self.transition(machine, RecognizerState::PossibleMultiContact);
            }
            _ => {
                log::debug!(
                    "target {}: ignoring pointer {} beyond the tracked pair",
                    self.target,
                    event.id
                );
            }
        }
    }

    fn on_press_timer(&self) {
        if self.disposed.get() {
            return;
        }

        let emissions = {
            let mut machine = self.machine.borrow_mut();
            machine.press_timer = None;
            let mut emissions = Emissions::new();

            if machine.state != RecognizerState::PossibleTap {
                log::debug!(
                    "target {}: stale press timer in {:?}",
                    self.target,
                    machine.state
                );
            } else if let Some(contact) = machine.contacts.first() {
                if contact.distance() < self.config.press.max_distance {
                    let press = self.press_event(contact, self.now());
                    self.transition(&mut machine, RecognizerState::Pressing);
                    emissions.push(GestureEvent::PressStart(press));
                } else {
                    log::debug!(
                        "target {}: contact drifted {:.1}px before the press timer fired",
                        self.target,
                        contact.distance()
                    );
                    self.reset(&mut machine);
                }
            }
            self.settle_if_disposed(&mut machine, &mut emissions);
            emissions
        };
        self.dispatch(emissions);
    }

    fn on_move(&self, machine: &mut Machine, event: &PointerEvent, emissions: &mut Emissions) {
        let Some(contact) = machine.contacts.get_mut(event.id) else {
            log::trace!("target {}: move for untracked pointer {}", self.target, event.id);
            return;
        };
        let delta = contact.advance(event.position);

        if machine.state.is_multi_contact() {
            self.on_pair_move(machine, event.id, emissions);
            return;
        }

        let Some(contact) = machine.contacts.get(event.id) else {
            return;
        };
        let distance = contact.distance();
        let state = machine.state;
        match state {
            RecognizerState::PossibleTap => {
                if distance >= self.config.pan.threshold {
                    let pan = self.pan_event(contact, delta);
                    self.cancel_press_timer(machine);
                    self.transition(machine, RecognizerState::Panning);
                    emissions.push(GestureEvent::PanStart(pan));
                }
            }
            RecognizerState::Pressing => {
                if distance >= self.config.press.max_distance {
                    let cancel = self.press_event(contact, self.now());
                    let pan = self.pan_event(contact, delta);
                    self.cancel_press_timer(machine);
                    emissions.push(GestureEvent::PressCancel(cancel));
                    self.transition(machine, RecognizerState::Panning);
                    emissions.push(GestureEvent::PanStart(pan));
                }
            }
            RecognizerState::Panning => {
                emissions.push(GestureEvent::PanMove(self.pan_event(contact, delta)));
            }
            RecognizerState::Idle
            | RecognizerState::Swiping
            | RecognizerState::Canceled
            | RecognizerState::PossibleMultiContact
            | RecognizerState::Pinching => {}
        }
    }

    fn on_pair_move(&self, machine: &mut Machine, moved: PointerId, emissions: &mut Emissions) {
        let Some((first, second)) = machine.contacts.pair() else {
            return;
        };
        let contact = if first.id == moved { first } else { second };
        let center = first.start.midpoint(second.start);
        let distance = first.current.distance_to(second.current);
        let pinch = self.pinch_event(contact, center, distance);

        match machine.state {
            RecognizerState::PossibleMultiContact => {
                if distance >= self.config.pinch.threshold {
                    self.transition(machine, RecognizerState::Pinching);
                    emissions.push(GestureEvent::PinchStart(pinch));
                }
            }
            RecognizerState::Pinching => emissions.push(GestureEvent::PinchMove(pinch)),
            _ => {}
        }
    }

    fn on_up(&self, machine: &mut Machine, event: &PointerEvent, emissions: &mut Emissions) {
        let Some(mut released) = self.untrack(machine, event.id) else {
            log::trace!("target {}: up for untracked pointer {}", self.target, event.id);
            return;
        };
        released.advance(event.position);

        if let Some(remaining) = machine.contacts.first() {
            if machine.state == RecognizerState::Pinching {
                emissions.push(GestureEvent::PinchEnd(self.pinch_end(remaining, &released)));
            }
            self.transition(machine, RecognizerState::Canceled);
            return;
        }

        let now = self.now();
        let duration = released.elapsed(now);
        let state = machine.state;
        match state {
            RecognizerState::PossibleTap => {
                self.cancel_press_timer(machine);
                if duration <= self.config.tap.max_duration
                    && released.distance() <= self.config.tap.max_distance
                {
                    emissions.push(GestureEvent::Tap(TapEvent {
                        x: released.current.x,
                        y: released.current.y,
                        pointer_kind: released.pointer_kind.clone(),
                        target: self.target,
                    }));
                }
            }
            RecognizerState::Pressing => {
                self.cancel_press_timer(machine);
                emissions.push(GestureEvent::PressEnd(self.press_event(&released, now)));
            }
            RecognizerState::Panning => {
                match swipe::classify(&self.config.swipe, released.offset(), duration) {
                    Some(metrics) => {
                        self.transition(machine, RecognizerState::Swiping);
                        emissions.push(GestureEvent::Swipe(SwipeEvent {
                            x: released.current.x,
                            y: released.current.y,
                            pointer_kind: released.pointer_kind.clone(),
                            target: self.target,
                            velocity_x: metrics.velocity_x,
                            velocity_y: metrics.velocity_y,
                            velocity: metrics.velocity,
                            direction: metrics.direction,
                            distance: metrics.distance,
                        }));
                    }
                    None => {
                        let end = self.pan_event(&released, Point::ZERO);
                        emissions.push(GestureEvent::PanEnd(end));
                    }
                }
            }
            _ => {}
        }
        self.reset(machine);
    }

    fn on_cancel(&self, machine: &mut Machine, event: &PointerEvent, emissions: &mut Emissions) {
        let Some(released) = self.untrack(machine, event.id) else {
            log::trace!("target {}: cancel for untracked pointer {}", self.target, event.id);
            return;
        };
        self.cancel_press_timer(machine);

        match machine.state {
            RecognizerState::PossibleTap | RecognizerState::Pressing => {
                let cancel = self.press_event(&released, self.now());
                emissions.push(GestureEvent::PressCancel(cancel));
            }
            RecognizerState::Panning => {
                let cancel = self.pan_event(&released, Point::ZERO);
                emissions.push(GestureEvent::PanCancel(cancel));
            }
            RecognizerState::Pinching => {
                if let Some(remaining) = machine.contacts.first() {
                    emissions.push(GestureEvent::PinchEnd(self.pinch_end(remaining, &released)));
                }
            }
            _ => {}
        }
        self.reset(machine);
    }

    fn track(&self, machine: &mut Machine, contact: Contact) {
        let id = contact.id;
        if machine.contacts.insert(contact) {
            self.platform.capture.capture(self.target, id);
        }
    }

    fn untrack(&self, machine: &mut Machine, id: PointerId) -> Option<Contact> {
        let contact = machine.contacts.remove(id)?;
        self.platform.capture.release(self.target, id);
        Some(contact)
    }

    fn transition(&self, machine: &mut Machine, next: RecognizerState) {
        if machine.state != next {
            log::trace!("target {}: {:?} -> {:?}", self.target, machine.state, next);
            machine.state = next;
        }
    }

    /// Back to `Idle`: timer cancelled, every remaining contact released.
    fn reset(&self, machine: &mut Machine) {
        self.cancel_press_timer(machine);
        for contact in machine.contacts.take_all() {
            self.platform.capture.release(self.target, contact.id);
        }
        self.transition(machine, RecognizerState::Idle);
    }

    /// Finishes a dispose that ran while `machine` was borrowed, e.g. from a
    /// platform service called by the handler.
    fn settle_if_disposed(&self, machine: &mut Machine, emissions: &mut Emissions) {
        if self.disposed.get() {
            self.reset(machine);
            emissions.clear();
        }
    }

    fn arm_press_timer(self: &Rc<Self>, machine: &mut Machine) {
        self.cancel_press_timer(machine);
        let weak: Weak<Inner> = Rc::downgrade(self);
        let handle = self.platform.scheduler.after(
            self.config.press.min_duration,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.on_press_timer();
                }
            }),
        );
        machine.press_timer = Some(handle);
    }

    fn cancel_press_timer(&self, machine: &mut Machine) {
        if let Some(handle) = machine.press_timer.take() {
            self.platform.scheduler.cancel(handle);
        }
    }

    fn pan_event(&self, contact: &Contact, delta: Point) -> PanEvent {
        let offset = contact.offset();
        PanEvent {
            x: contact.current.x,
            y: contact.current.y,
            delta_x: delta.x,
            delta_y: delta.y,
            offset_x: offset.x,
            offset_y: offset.y,
            pointer_kind: contact.pointer_kind.clone(),
            target: self.target,
        }
    }

    fn press_event(&self, contact: &Contact, now: u64) -> PressEvent {
        PressEvent {
            x: contact.current.x,
            y: contact.current.y,
            pointer_kind: contact.pointer_kind.clone(),
            target: self.target,
            duration: contact.elapsed(now),
        }
    }

    fn pinch_event(&self, contact: &Contact, center: Point, distance: f32) -> PinchEvent {
        PinchEvent {
            x: contact.current.x,
            y: contact.current.y,
            pointer_kind: contact.pointer_kind.clone(),
            center_x: center.x,
            center_y: center.y,
            distance,
        }
    }

    /// Final pinch measurements, reported at the position of the contact still down.
    fn pinch_end(&self, remaining: &Contact, released: &Contact) -> PinchEvent {
        let center = remaining.start.midpoint(released.start);
        let distance = remaining.current.distance_to(released.current);
        self.pinch_event(remaining, center, distance)
    }

    fn dispatch(&self, emissions: Emissions) {
        for event in emissions {
            if self.disposed.get() {
                log::debug!("target {}: dropping {} after dispose", self.target, event.name());
                return;
            }
            log::trace!("target {}: {}", self.target, event.name());
            let listeners = self.listeners.borrow().listeners_for(event.kind());
            for (id, listener) in listeners {
                if self.disposed.get() {
                    return;
                }
                if self.listeners.borrow().is_subscribed(id) {
                    listener(&event);
                }
            }
        }
    }

    fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        let subscriptions = std::mem::take(&mut *self.subscriptions.borrow_mut());
        for id in subscriptions {
            self.platform.events.unsubscribe(id);
        }
        match self.machine.try_borrow_mut() {
            Ok(mut machine) => self.reset(&mut machine),
            Err(_) => log::debug!(
                "target {}: disposed while handling an event; reset deferred to the handler",
                self.target
            ),
        }
        self.listeners.borrow_mut().clear();
        log::debug!("disposed gesture recognizer for target {}", self.target);
    }
}
