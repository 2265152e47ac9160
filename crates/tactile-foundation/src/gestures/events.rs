//! Gesture notifications delivered to listeners.

use tactile_core::{Point, PointerKind, TargetId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureEventKind {
    PanStart,
    PanMove,
    PanEnd,
    PanCancel,
    Tap,
    PressStart,
    PressEnd,
    PressCancel,
    Swipe,
    PinchStart,
    PinchMove,
    PinchEnd,
}

impl GestureEventKind {
    /// Notification name as listeners on other surfaces know it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PanStart => "panstart",
            Self::PanMove => "panmove",
            Self::PanEnd => "panend",
            Self::PanCancel => "pancancel",
            Self::Tap => "tap",
            Self::PressStart => "pressstart",
            Self::PressEnd => "pressend",
            Self::PressCancel => "presscancel",
            Self::Swipe => "swipe",
            Self::PinchStart => "pinchstart",
            Self::PinchMove => "pinchmove",
            Self::PinchEnd => "pinchend",
        }
    }
}

/// Dominant axis and sense of a swipe. `Down` means towards larger y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Horizontal only when |x| strictly exceeds |y|, so diagonal ties
    /// resolve to the vertical axis.
    pub fn from_offset(offset: Point) -> Self {
        if offset.x.abs() > offset.y.abs() {
            if offset.x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if offset.y > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanEvent {
    pub x: f32,
    pub y: f32,
    /// Movement since the previous sample.
    pub delta_x: f32,
    pub delta_y: f32,
    /// Movement since the contact went down.
    pub offset_x: f32,
    pub offset_y: f32,
    pub pointer_kind: PointerKind,
    pub target: TargetId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TapEvent {
    pub x: f32,
    pub y: f32,
    pub pointer_kind: PointerKind,
    pub target: TargetId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PressEvent {
    pub x: f32,
    pub y: f32,
    pub pointer_kind: PointerKind,
    pub target: TargetId,
    /// Milliseconds since the contact went down.
    pub duration: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwipeEvent {
    pub x: f32,
    pub y: f32,
    pub pointer_kind: PointerKind,
    pub target: TargetId,
    /// Average velocity along each axis in px/ms.
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub velocity: f32,
    pub direction: SwipeDirection,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinchEvent {
    pub x: f32,
    pub y: f32,
    pub pointer_kind: PointerKind,
    /// Midpoint of the two contacts' starting positions.
    pub center_x: f32,
    pub center_y: f32,
    /// Current separation of the two contacts.
    pub distance: f32,
}

/// A gesture lifecycle notification.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    PanStart(PanEvent),
    PanMove(PanEvent),
    PanEnd(PanEvent),
    PanCancel(PanEvent),
    Tap(TapEvent),
    PressStart(PressEvent),
    PressEnd(PressEvent),
    PressCancel(PressEvent),
    Swipe(SwipeEvent),
    PinchStart(PinchEvent),
    PinchMove(PinchEvent),
    PinchEnd(PinchEvent),
}

impl GestureEvent {
    pub fn kind(&self) -> GestureEventKind {
        match self {
            GestureEvent::PanStart(_) => GestureEventKind::PanStart,
            GestureEvent::PanMove(_) => GestureEventKind::PanMove,
            GestureEvent::PanEnd(_) => GestureEventKind::PanEnd,
            GestureEvent::PanCancel(_) => GestureEventKind::PanCancel,
            GestureEvent::Tap(_) => GestureEventKind::Tap,
            GestureEvent::PressStart(_) => GestureEventKind::PressStart,
            GestureEvent::PressEnd(_) => GestureEventKind::PressEnd,
            GestureEvent::PressCancel(_) => GestureEventKind::PressCancel,
            GestureEvent::Swipe(_) => GestureEventKind::Swipe,
            GestureEvent::PinchStart(_) => GestureEventKind::PinchStart,
            GestureEvent::PinchMove(_) => GestureEventKind::PinchMove,
            GestureEvent::PinchEnd(_) => GestureEventKind::PinchEnd,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Pointer position the notification was produced at.
    pub fn position(&self) -> Point {
        let (x, y) = match self {
            GestureEvent::PanStart(e)
            | GestureEvent::PanMove(e)
            | GestureEvent::PanEnd(e)
            | GestureEvent::PanCancel(e) => (e.x, e.y),
            GestureEvent::Tap(e) => (e.x, e.y),
            GestureEvent::PressStart(e)
            | GestureEvent::PressEnd(e)
            | GestureEvent::PressCancel(e) => (e.x, e.y),
            GestureEvent::Swipe(e) => (e.x, e.y),
            GestureEvent::PinchStart(e)
            | GestureEvent::PinchMove(e)
            | GestureEvent::PinchEnd(e) => (e.x, e.y),
        };
        Point::new(x, y)
    }

    pub fn pointer_kind(&self) -> &PointerKind {
        match self {
            GestureEvent::PanStart(e)
            | GestureEvent::PanMove(e)
            | GestureEvent::PanEnd(e)
            | GestureEvent::PanCancel(e) => &e.pointer_kind,
            GestureEvent::Tap(e) => &e.pointer_kind,
            GestureEvent::PressStart(e)
            | GestureEvent::PressEnd(e)
            | GestureEvent::PressCancel(e) => &e.pointer_kind,
            GestureEvent::Swipe(e) => &e.pointer_kind,
            GestureEvent::PinchStart(e)
            | GestureEvent::PinchMove(e)
            | GestureEvent::PinchEnd(e) => &e.pointer_kind,
        }
    }

    pub fn as_pan(&self) -> Option<&PanEvent> {
        match self {
            GestureEvent::PanStart(e)
            | GestureEvent::PanMove(e)
            | GestureEvent::PanEnd(e)
            | GestureEvent::PanCancel(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_press(&self) -> Option<&PressEvent> {
        match self {
            GestureEvent::PressStart(e)
            | GestureEvent::PressEnd(e)
            | GestureEvent::PressCancel(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_pinch(&self) -> Option<&PinchEvent> {
        match self {
            GestureEvent::PinchStart(e)
            | GestureEvent::PinchMove(e)
            | GestureEvent::PinchEnd(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_swipe(&self) -> Option<&SwipeEvent> {
        match self {
            GestureEvent::Swipe(e) => Some(e),
            _ => None,
        }
    }
}
