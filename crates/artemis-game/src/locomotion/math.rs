//! Frame-local vector helpers

use glam::{Vec2, Vec3};

use super::Basis;

/// Critically damped spring rate per second of settle time.
///
/// With `omega = SETTLE_RATE / settle_time` a spring released from rest has
/// `(1 + 7.5) * e^-7.5 ≈ 0.5%` of its displacement left after `settle_time`.
const SETTLE_RATE: f32 = 7.5;

/// Shortest settle time accepted by [`smooth_damp`]
const MIN_SETTLE_TIME: f32 = 1.0e-4;

/// Move a vector towards a target by a maximum delta, never overshooting
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let diff = target - current;
    let distance = diff.length();

    if distance <= max_delta || distance == 0.0 {
        target
    } else {
        current + diff / distance * max_delta.max(0.0)
    }
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` is the spring's rate of change and must persist between calls.
/// `settle_time` is the time after which less than 1% of the starting offset
/// remains when released from rest. A zero `dt` returns `current` unchanged.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    settle_time: f32,
    dt: f32,
) -> Vec3 {
    let omega = SETTLE_RATE / settle_time.max(MIN_SETTLE_TIME);
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + change * omega) * dt;
    *velocity = (*velocity - temp * omega) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp overshoot past the target.
    if dt > 0.0 && (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }

    output
}

/// Linear interpolation with the factor clamped to [0, 1]
pub fn lerp_clamped(from: f32, to: f32, t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    from + (to - from) * t
}

/// Project a 2D move axis onto the horizontal plane of `basis`.
///
/// Returns a unit vector, or zero when the input has no planar length.
pub fn planar_direction(axis: Vec2, basis: Basis) -> Vec3 {
    let mut motion = basis.forward * axis.y + basis.right * axis.x;
    motion.y = 0.0;
    motion.normalize_or_zero()
}

/// Clamp a frame delta to a usable value; zero, negative or non-finite
/// deltas become zero
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.max(0.0)
    } else {
        0.0
    }
}
