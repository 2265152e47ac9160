//! Release-time swipe classification.
//!
//! Velocity is the average over the whole contact, offset divided by
//! duration. There is no sample history; a pan qualifies or it does not.

use super::config::SwipeConfig;
use super::events::SwipeDirection;
use tactile_core::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SwipeMetrics {
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub velocity: f32,
    pub distance: f32,
    pub direction: SwipeDirection,
}

/// Returns the swipe a pan ending with `offset` after `duration_ms` makes,
/// or `None` when any threshold is missed.
///
/// An instantaneous release has no defined velocity and never qualifies.
pub(crate) fn classify(
    config: &SwipeConfig,
    offset: Point,
    duration_ms: u64,
) -> Option<SwipeMetrics> {
    if duration_ms == 0 || duration_ms > config.max_duration {
        return None;
    }
    let duration = duration_ms as f32;
    let distance = offset.magnitude();
    let velocity = distance / duration;
    if !velocity.is_finite() || velocity < config.min_velocity || distance < config.min_distance {
        return None;
    }
    Some(SwipeMetrics {
        velocity_x: offset.x / duration,
        velocity_y: offset.y / duration,
        velocity,
        distance,
        direction: SwipeDirection::from_offset(offset),
    })
}
