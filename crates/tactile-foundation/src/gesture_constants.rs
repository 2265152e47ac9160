//! Default gesture thresholds.
//!
//! These are the values a [`GestureConfig`](crate::GestureConfig) starts from
//! when an option is left unspecified.
//!
//! # Units
//!
//! Distances are in logical pixels, durations in milliseconds of the
//! platform's monotonic clock and velocities in pixels per millisecond. For
//! very high-density touch screens, consider scaling the distances by the
//! device's scale factor.

/// Pan threshold in logical pixels.
///
/// Once a lone contact moves at least this far from where it went down, a
/// possible tap becomes a pan and the pending press timer is dropped.
pub const PAN_THRESHOLD: f32 = 5.0;

/// Longest contact, in milliseconds, that still counts as a tap.
pub const TAP_MAX_DURATION_MS: u64 = 250;

/// Furthest a contact may end from its start and still count as a tap.
pub const TAP_MAX_DISTANCE: f32 = 10.0;

/// Hold time, in milliseconds, before a resting contact starts a press.
pub const PRESS_MIN_DURATION_MS: u64 = 500;

/// Drift that turns a press into a pan.
pub const PRESS_MAX_DISTANCE: f32 = 10.0;

/// Minimum average release velocity for a swipe, in px/ms.
pub const SWIPE_MIN_VELOCITY: f32 = 0.3;

/// Minimum total travel for a swipe.
pub const SWIPE_MIN_DISTANCE: f32 = 30.0;

/// Longest contact, in milliseconds, that can still end as a swipe.
pub const SWIPE_MAX_DURATION_MS: u64 = 300;

/// Separation between two contacts required to start a pinch.
pub const PINCH_THRESHOLD: f32 = 5.0;

/// Number of simultaneous contacts a recognizer tracks. Extra contacts are ignored.
pub const MAX_TRACKED_CONTACTS: usize = 2;
