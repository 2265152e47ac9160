//! Gesture recognition for Tactile: tap, press, pan, swipe and pinch

mod error;
pub mod gesture_constants;
pub mod gestures;

pub use error::ConfigError;
pub use gestures::{
    GestureConfig, GestureEvent, GestureEventKind, GestureListener, GestureRecognizer,
    ListenerId, MultiContactPolicy, PanConfig, PanEvent, PinchConfig, PinchEvent, PressConfig,
    PressEvent, RecognizerState, SwipeConfig, SwipeDirection, SwipeEvent, TapConfig, TapEvent,
};
pub use tactile_core::{Point, PointerEvent, PointerEventKind, PointerId, PointerKind, TargetId};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::*;
    pub use crate::ConfigError;
    pub use tactile_core::prelude::*;
}
