//! Listener registry owned by each recognizer.
//!
//! Listeners are invoked synchronously in registration order. The registry
//! hands out a snapshot of the matching listeners so a listener may
//! subscribe, unsubscribe or dispose the recognizer while it runs.

use super::events::{GestureEvent, GestureEventKind};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type GestureListener = Rc<dyn Fn(&GestureEvent)>;

struct Registration {
    /// `None` listens to every notification.
    filter: Option<GestureEventKind>,
    listener: GestureListener,
}

#[derive(Default)]
pub(crate) struct ListenerRegistry {
    next_id: u64,
    entries: IndexMap<ListenerId, Registration>,
}

impl ListenerRegistry {
    pub fn subscribe(
        &mut self,
        filter: Option<GestureEventKind>,
        listener: GestureListener,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, Registration { filter, listener });
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    pub fn is_subscribed(&self, id: ListenerId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn listeners_for(
        &self,
        kind: GestureEventKind,
    ) -> SmallVec<[(ListenerId, GestureListener); 4]> {
        self.entries
            .iter()
            .filter(|(_, registration)| registration.filter.map_or(true, |filter| filter == kind))
            .map(|(id, registration)| (*id, Rc::clone(&registration.listener)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> GestureListener {
        let log = Rc::clone(log);
        Rc::new(move |_event: &GestureEvent| log.borrow_mut().push(tag))
    }

    fn tap() -> GestureEvent {
        GestureEvent::Tap(crate::TapEvent {
            x: 0.0,
            y: 0.0,
            pointer_kind: Default::default(),
            target: 1,
        })
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        registry.subscribe(None, recording(&log, "first"));
        registry.subscribe(Some(GestureEventKind::Tap), recording(&log, "second"));
        registry.subscribe(None, recording(&log, "third"));

        let event = tap();
        for (_, listener) in registry.listeners_for(event.kind()) {
            listener(&event);
        }
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn filters_skip_other_kinds() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        registry.subscribe(Some(GestureEventKind::PanStart), recording(&log, "pan"));
        registry.subscribe(None, recording(&log, "all"));

        assert_eq!(registry.listeners_for(GestureEventKind::Tap).len(), 1);
        assert_eq!(registry.listeners_for(GestureEventKind::PanStart).len(), 2);
    }

    #[test]
    fn unsubscribe_preserves_order_of_the_rest() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::default();
        registry.subscribe(None, recording(&log, "a"));
        let middle = registry.subscribe(None, recording(&log, "b"));
        registry.subscribe(None, recording(&log, "c"));

        assert!(registry.unsubscribe(middle));
        assert!(!registry.unsubscribe(middle));
        assert!(!registry.is_subscribed(middle));

        let event = tap();
        for (_, listener) in registry.listeners_for(event.kind()) {
            listener(&event);
        }
        assert_eq!(*log.borrow(), vec!["a", "c"]);
        assert_eq!(registry.len(), 2);
    }
}
