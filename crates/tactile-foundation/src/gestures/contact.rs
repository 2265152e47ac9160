use crate::gesture_constants::MAX_TRACKED_CONTACTS;
use smallvec::SmallVec;
use tactile_core::{Point, PointerEvent, PointerId, PointerKind};

/// One live pointer span tracked by a recognizer.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Contact {
    pub id: PointerId,
    pub start: Point,
    pub previous: Point,
    pub current: Point,
    pub pointer_kind: PointerKind,
    pub down_at: u64,
}

impl Contact {
    pub fn new(event: &PointerEvent, now: u64) -> Self {
        Self {
            id: event.id,
            start: event.position,
            previous: event.position,
            current: event.position,
            pointer_kind: event.pointer_kind.clone(),
            down_at: now,
        }
    }

    /// Records a new sample and returns the displacement since the last one.
    pub fn advance(&mut self, position: Point) -> Point {
        self.previous = self.current;
        self.current = position;
        self.current - self.previous
    }

    /// Displacement from where the contact went down.
    pub fn offset(&self) -> Point {
        self.current - self.start
    }

    pub fn distance(&self) -> f32 {
        self.offset().magnitude()
    }

    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.down_at)
    }
}

/// The contacts a recognizer currently tracks, in the order they went down.
#[derive(Debug, Default)]
pub(crate) struct Contacts {
    items: SmallVec<[Contact; MAX_TRACKED_CONTACTS]>,
}

impl Contacts {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.items.iter().any(|contact| contact.id == id)
    }

    pub fn get(&self, id: PointerId) -> Option<&Contact> {
        self.items.iter().find(|contact| contact.id == id)
    }

    pub fn get_mut(&mut self, id: PointerId) -> Option<&mut Contact> {
        self.items.iter_mut().find(|contact| contact.id == id)
    }

    pub fn first(&self) -> Option<&Contact> {
        self.items.first()
    }

    pub fn pair(&self) -> Option<(&Contact, &Contact)> {
        match self.items.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Starts tracking `contact`. Returns false when full or already tracked.
    pub fn insert(&mut self, contact: Contact) -> bool {
        if self.items.len() >= MAX_TRACKED_CONTACTS || self.contains(contact.id) {
            return false;
        }
        self.items.push(contact);
        true
    }

    pub fn remove(&mut self, id: PointerId) -> Option<Contact> {
        let index = self.items.iter().position(|contact| contact.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn take_all(&mut self) -> SmallVec<[Contact; MAX_TRACKED_CONTACTS]> {
        std::mem::take(&mut self.items)
    }

    pub fn ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.items.iter().map(|contact| contact.id)
    }
}
