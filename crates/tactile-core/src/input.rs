use crate::Point;
use std::fmt;
use std::rc::Rc;

pub type PointerId = u64;

/// Identifies the visual element an event or a capture belongs to.
pub type TargetId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    pub const ALL: [PointerEventKind; 4] = [
        PointerEventKind::Down,
        PointerEventKind::Move,
        PointerEventKind::Up,
        PointerEventKind::Cancel,
    ];
}

/// The device class that produced a contact.
///
/// Platforms report more kinds than the three common ones, so unknown
/// names are preserved in [`PointerKind::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
    Other(Rc<str>),
}

impl PointerKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            other => PointerKind::Other(Rc::from(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PointerKind::Mouse => "mouse",
            PointerKind::Touch => "touch",
            PointerKind::Pen => "pen",
            PointerKind::Other(name) => name,
        }
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw contact event as delivered by the platform.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub pointer_kind: PointerKind,
    /// Element the platform hit-tested the event against.
    pub target: TargetId,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, id: PointerId, position: Point, target: TargetId) -> Self {
        Self {
            id,
            kind,
            position,
            pointer_kind: PointerKind::default(),
            target,
        }
    }

    /// Set the device class for this event
    pub fn with_pointer_kind(mut self, pointer_kind: PointerKind) -> Self {
        self.pointer_kind = pointer_kind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pointer_kinds_round_trip_names() {
        for name in ["mouse", "touch", "pen"] {
            assert_eq!(PointerKind::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn unknown_pointer_kind_is_preserved() {
        let kind = PointerKind::from_name("eraser");
        assert_eq!(kind, PointerKind::Other(Rc::from("eraser")));
        assert_eq!(kind.to_string(), "eraser");
    }

    #[test]
    fn events_default_to_mouse() {
        let event = PointerEvent::new(PointerEventKind::Down, 7, Point::new(1.0, 2.0), 3);
        assert_eq!(event.pointer_kind, PointerKind::Mouse);
        let touch = event.with_pointer_kind(PointerKind::Touch);
        assert_eq!(touch.pointer_kind, PointerKind::Touch);
        assert_eq!(touch.id, 7);
        assert_eq!(touch.target, 3);
    }
}
