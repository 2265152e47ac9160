//! Testing utilities and harness for Tactile

pub mod gesture_rule;

pub use gesture_rule::*;

pub mod prelude {
    pub use crate::gesture_rule::*;
}
