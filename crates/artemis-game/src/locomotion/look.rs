//! Mouse-look: clamped pitch and free yaw

use glam::Vec2;

use crate::player::{MotionState, MovementConfig};

/// Look update for one tick, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookDelta {
    /// Camera pivot pitch after this tick
    pub pitch: f32,
    /// Rotation to apply to the entity about the up axis
    pub yaw_delta: f32,
}

/// Apply scaled look input to the state's pitch and produce the yaw delta.
///
/// Moving the look axis up (+y) lowers the pitch value, which tilts the
/// camera upward. Yaw is not clamped and accumulates on the entity.
pub fn compute_look(
    state: &mut MotionState,
    config: &MovementConfig,
    look_axis: Vec2,
) -> LookDelta {
    let scaled = look_axis * config.look_sensitivity;

    state.set_pitch(state.pitch() - scaled.y);

    let yaw_delta = if scaled.x.is_finite() { scaled.x } else { 0.0 };
    LookDelta {
        pitch: state.pitch(),
        yaw_delta,
    }
}
