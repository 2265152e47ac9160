//! Core contracts for Tactile gesture recognition
//!
//! This crate contains the geometry primitives, raw pointer event types and
//! the platform service traits (clock, scheduler, pointer delivery and
//! capture) that a gesture recognizer is attached to.

pub mod collections;
mod geometry;
mod input;
pub mod platform;

pub use geometry::*;
pub use input::*;
pub use platform::{
    Clock, Platform, PointerCapture, PointerEventSource, PointerHandler, Scheduler,
    SubscriptionId, TimerCallback, TimerHandle,
};

pub mod prelude {
    pub use crate::geometry::Point;
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId, PointerKind, TargetId};
    pub use crate::platform::{Clock, Platform, PointerCapture, PointerEventSource, Scheduler};
}
