//! In-process pointer event routing and capture.
//!
//! The hub is the event source and the capture primitive in one: a captured
//! pointer's events go to the capturing target wherever they were hit-tested,
//! everything else goes to `event.target`.

use smallvec::SmallVec;
use std::cell::RefCell;
use tactile_core::collections::HashMap;
use tactile_core::{
    PointerCapture, PointerEvent, PointerEventKind, PointerEventSource, PointerHandler, PointerId,
    SubscriptionId, TargetId,
};

struct Subscription {
    id: SubscriptionId,
    target: TargetId,
    kind: PointerEventKind,
    handler: PointerHandler,
}

#[derive(Default)]
struct HubState {
    next_id: u64,
    /// Registration order is delivery order.
    subscriptions: Vec<Subscription>,
    captures: HashMap<PointerId, TargetId>,
}

#[derive(Default)]
pub struct PointerHub {
    state: RefCell<HubState>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` synchronously and returns how many handlers ran.
    ///
    /// Handlers may subscribe, unsubscribe, capture or release while running;
    /// a handler unsubscribed by an earlier one is skipped.
    pub fn dispatch(&self, event: &PointerEvent) -> usize {
        let (route, handlers) = {
            let state = self.state.borrow();
            let route = state
                .captures
                .get(&event.id)
                .copied()
                .unwrap_or(event.target);
            let handlers: SmallVec<[(SubscriptionId, PointerHandler); 4]> = state
                .subscriptions
                .iter()
                .filter(|sub| sub.target == route && sub.kind == event.kind)
                .map(|sub| (sub.id, sub.handler.clone()))
                .collect();
            (route, handlers)
        };

        log::trace!(
            "dispatching {:?} for pointer {} to target {} ({} handlers)",
            event.kind,
            event.id,
            route,
            handlers.len()
        );

        let mut delivered = 0;
        for (id, handler) in handlers {
            if self.is_subscribed(id) {
                handler(event);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.state
            .borrow()
            .subscriptions
            .iter()
            .any(|sub| sub.id == id)
    }

    pub fn subscription_count(&self) -> usize {
        self.state.borrow().subscriptions.len()
    }

    /// Target currently holding `pointer`, if any.
    pub fn capture_owner(&self, pointer: PointerId) -> Option<TargetId> {
        self.state.borrow().captures.get(&pointer).copied()
    }

    /// Pointers captured by `target`, in ascending id order.
    pub fn captured_pointers(&self, target: TargetId) -> Vec<PointerId> {
        let mut pointers: Vec<PointerId> = self
            .state
            .borrow()
            .captures
            .iter()
            .filter(|(_, owner)| **owner == target)
            .map(|(pointer, _)| *pointer)
            .collect();
        pointers.sort_unstable();
        pointers
    }
}

impl PointerEventSource for PointerHub {
    fn subscribe(
        &self,
        target: TargetId,
        kind: PointerEventKind,
        handler: PointerHandler,
    ) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId::from_raw(state.next_id);
        state.next_id += 1;
        state.subscriptions.push(Subscription {
            id,
            target,
            kind,
            handler,
        });
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.state
            .borrow_mut()
            .subscriptions
            .retain(|sub| sub.id != id);
    }
}

impl PointerCapture for PointerHub {
    fn capture(&self, target: TargetId, pointer: PointerId) {
        if let Some(previous) = self.state.borrow_mut().captures.insert(pointer, target) {
            if previous != target {
                log::debug!("pointer {pointer} capture moved from target {previous} to {target}");
            }
        }
    }

    fn release(&self, target: TargetId, pointer: PointerId) {
        let mut state = self.state.borrow_mut();
        if state.captures.get(&pointer) == Some(&target) {
            state.captures.remove(&pointer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tactile_core::Point;

    fn event(kind: PointerEventKind, id: PointerId, target: TargetId) -> PointerEvent {
        PointerEvent::new(kind, id, Point::new(0.0, 0.0), target)
    }

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> PointerHandler {
        let log = log.clone();
        Rc::new(move |_: &PointerEvent| log.borrow_mut().push(tag))
    }

    #[test]
    fn routes_by_target_and_kind_in_order() {
        let hub = PointerHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        hub.subscribe(1, PointerEventKind::Down, recorder(&log, "a"));
        hub.subscribe(2, PointerEventKind::Down, recorder(&log, "other"));
        hub.subscribe(1, PointerEventKind::Up, recorder(&log, "up"));
        hub.subscribe(1, PointerEventKind::Down, recorder(&log, "b"));

        assert_eq!(hub.dispatch(&event(PointerEventKind::Down, 7, 1)), 2);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn capture_overrides_hit_target() {
        let hub = PointerHub::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        hub.subscribe(1, PointerEventKind::Move, recorder(&log, "owner"));
        hub.subscribe(2, PointerEventKind::Move, recorder(&log, "hit"));

        hub.capture(1, 7);
        hub.dispatch(&event(PointerEventKind::Move, 7, 2));
        hub.release(1, 7);
        hub.dispatch(&event(PointerEventKind::Move, 7, 2));
        assert_eq!(*log.borrow(), vec!["owner", "hit"]);
    }

    #[test]
    fn release_is_idempotent_and_owner_checked() {
        let hub = PointerHub::new();
        hub.capture(1, 7);
        hub.release(2, 7);
        assert_eq!(hub.capture_owner(7), Some(1));
        hub.release(1, 7);
        hub.release(1, 7);
        assert_eq!(hub.capture_owner(7), None);
        assert!(hub.captured_pointers(1).is_empty());
    }

    #[test]
    fn handler_unsubscribed_mid_dispatch_is_skipped() {
        let hub = Rc::new(PointerHub::new());
        let log = Rc::new(RefCell::new(Vec::new()));
        let victim = Rc::new(RefCell::new(None));

        let (remover_hub, remover_victim) = (hub.clone(), victim.clone());
        hub.subscribe(
            1,
            PointerEventKind::Down,
            Rc::new(move |_: &PointerEvent| {
                if let Some(id) = remover_victim.borrow_mut().take() {
                    remover_hub.unsubscribe(id);
                }
            }),
        );
        let id = hub.subscribe(1, PointerEventKind::Down, recorder(&log, "victim"));
        *victim.borrow_mut() = Some(id);

        assert_eq!(hub.dispatch(&event(PointerEventKind::Down, 1, 1)), 1);
        assert!(log.borrow().is_empty());
        assert_eq!(hub.subscription_count(), 1);
    }
}
