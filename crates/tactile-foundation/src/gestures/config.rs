//! Per-gesture thresholds.
//!
//! Every option group implements [`Default`] with the values from
//! [`gesture_constants`](crate::gesture_constants), so callers override only
//! what they need with struct update syntax:
//!
//! ```
//! use tactile_foundation::{GestureConfig, SwipeConfig};
//!
//! let config = GestureConfig {
//!     swipe: SwipeConfig {
//!         min_distance: 50.0,
//!         ..SwipeConfig::default()
//!     },
//!     ..GestureConfig::default()
//! };
//! assert_eq!(config.swipe.max_duration, 300);
//! ```

use crate::gesture_constants::{
    PAN_THRESHOLD, PINCH_THRESHOLD, PRESS_MAX_DISTANCE, PRESS_MIN_DURATION_MS,
    SWIPE_MAX_DURATION_MS, SWIPE_MIN_DISTANCE, SWIPE_MIN_VELOCITY, TAP_MAX_DISTANCE,
    TAP_MAX_DURATION_MS,
};
use crate::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanConfig {
    pub threshold: f32,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            threshold: PAN_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    pub max_duration: u64,
    pub max_distance: f32,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            max_duration: TAP_MAX_DURATION_MS,
            max_distance: TAP_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressConfig {
    pub min_duration: u64,
    pub max_distance: f32,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            min_duration: PRESS_MIN_DURATION_MS,
            max_distance: PRESS_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Pixels per millisecond.
    pub min_velocity: f32,
    pub min_distance: f32,
    pub max_duration: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_velocity: SWIPE_MIN_VELOCITY,
            min_distance: SWIPE_MIN_DISTANCE,
            max_duration: SWIPE_MAX_DURATION_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchConfig {
    pub threshold: f32,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            threshold: PINCH_THRESHOLD,
        }
    }
}

/// What a second contact does to a gesture already in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MultiContactPolicy {
    /// Cancel the one-contact gesture (emitting `pancancel` or
    /// `presscancel`) and start recognizing a pinch.
    #[default]
    CancelAndTrack,
    /// Leave extra contacts untracked; only one-contact gestures are recognized.
    Ignore,
}

/// Thresholds for every gesture a recognizer reports.
///
/// Fixed for the lifetime of a recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GestureConfig {
    pub pan: PanConfig,
    pub tap: TapConfig,
    pub press: PressConfig,
    pub swipe: SwipeConfig,
    pub pinch: PinchConfig,
    pub multi_contact: MultiContactPolicy,
}

impl GestureConfig {
    /// Checks that every distance and velocity is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = [
            ("pan.threshold", self.pan.threshold),
            ("tap.max_distance", self.tap.max_distance),
            ("press.max_distance", self.press.max_distance),
            ("swipe.min_velocity", self.swipe.min_velocity),
            ("swipe.min_distance", self.swipe.min_distance),
            ("pinch.threshold", self.pinch.threshold),
        ];
        for (option, value) in options {
            check_threshold(option, value)?;
        }
        Ok(())
    }
}

fn check_threshold(option: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { option });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { option, value });
    }
    Ok(())
}
