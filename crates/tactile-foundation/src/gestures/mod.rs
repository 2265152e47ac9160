mod config;
mod contact;
mod events;
mod listeners;
mod recognizer;
mod state;
mod swipe;

pub use config::{
    GestureConfig, MultiContactPolicy, PanConfig, PinchConfig, PressConfig, SwipeConfig,
    TapConfig,
};
pub use events::{
    GestureEvent, GestureEventKind, PanEvent, PinchEvent, PressEvent, SwipeDirection, SwipeEvent,
    TapEvent,
};
pub use listeners::{GestureListener, ListenerId};
pub use recognizer::GestureRecognizer;
pub use state::RecognizerState;
