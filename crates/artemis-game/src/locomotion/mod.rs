//! Per-tick locomotion
//!
//! A [`Locomotion`] strategy turns one [`FrameInput`] into a movement request,
//! a look update, and a field of view. Two strategies exist:
//!
//! - [`SimpleLocomotion`]: constant-rate acceleration toward the target speed,
//!   no jumping, non-accumulating gravity
//! - [`PhysicalLocomotion`]: acceleration plus damped deceleration, jumping,
//!   grounded stick velocity, and head-bump cancellation
//!
//! Look and field-of-view computation are shared by both.

mod fov;
mod look;
pub mod math;
mod physical;
mod simple;

#[cfg(test)]
pub(crate) mod test_support;

pub use fov::{compute_fov, target_fov};
pub use look::{compute_look, LookDelta};
pub use physical::PhysicalLocomotion;
pub use simple::SimpleLocomotion;

use artemis_core::{CharacterBody, CollisionFlags, ViewRig};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::FrameInput;
use crate::player::{MotionState, MovementConfig};

/// Move directions with a squared length below this count as no input
pub const DIRECTION_DEADZONE_SQ: f32 = 0.01;

/// Selects the locomotion strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocomotionKind {
    /// Clamped speed, no jump
    Simple,
    /// Accelerate/decelerate with jump and grounded gravity stick
    #[default]
    Physical,
}

impl LocomotionKind {
    /// Build the strategy for this kind
    pub fn build(self) -> Box<dyn Locomotion> {
        match self {
            LocomotionKind::Simple => Box::new(SimpleLocomotion),
            LocomotionKind::Physical => Box::new(PhysicalLocomotion),
        }
    }
}

/// Horizontal basis of the controlled entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self {
            forward: Vec3::NEG_Z,
            right: Vec3::X,
        }
    }
}

/// Result of the movement half of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementOutcome {
    /// Displacement requested from the mover
    pub displacement: Vec3,
    /// Sides struck during the move
    pub flags: CollisionFlags,
    /// Grounded state read at the start of the tick
    pub grounded: bool,
}

/// Everything one tick produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub displacement: Vec3,
    pub flags: CollisionFlags,
    pub grounded: bool,
    pub speed: f32,
    pub pitch: f32,
    pub yaw_delta: f32,
    pub fov: f32,
}

/// A locomotion strategy
pub trait Locomotion {
    /// Which kind this strategy implements
    fn kind(&self) -> LocomotionKind;

    /// Blend velocities, move the body, and update `state.current_speed`.
    ///
    /// `dt` has already been sanitized by the caller.
    fn compute_movement(
        &self,
        state: &mut MotionState,
        config: &MovementConfig,
        input: &FrameInput,
        basis: Basis,
        body: &mut dyn CharacterBody,
        dt: f32,
    ) -> MovementOutcome;

    /// Run one full tick: movement, then look, then field of view
    #[allow(clippy::too_many_arguments)]
    fn compute_tick(
        &self,
        state: &mut MotionState,
        config: &MovementConfig,
        input: &FrameInput,
        basis: Basis,
        body: &mut dyn CharacterBody,
        view: &mut dyn ViewRig,
        dt: f32,
    ) -> TickReport {
        let dt = math::sanitize_dt(dt);

        let movement = self.compute_movement(state, config, input, basis, body, dt);

        let look = compute_look(state, config, input.look_axis);
        view.set_pitch(look.pitch);
        view.apply_yaw(look.yaw_delta);

        let fov = compute_fov(state, config, input.sprint_held, dt);
        view.set_field_of_view(fov);

        TickReport {
            displacement: movement.displacement,
            flags: movement.flags,
            grounded: movement.grounded,
            speed: state.current_speed(),
            pitch: look.pitch,
            yaw_delta: look.yaw_delta,
            fov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{RecordingView, ScriptedBody};
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_kind_builds_matching_strategy() {
        assert_eq!(LocomotionKind::Simple.build().kind(), LocomotionKind::Simple);
        assert_eq!(LocomotionKind::Physical.build().kind(), LocomotionKind::Physical);
    }

    #[test]
    fn test_tick_pushes_look_and_fov_to_view() {
        let config = MovementConfig::default();
        let mut state = MotionState::new(&config);
        let mut body = ScriptedBody::grounded();
        let mut view = RecordingView::default();
        let input = FrameInput {
            look_axis: Vec2::new(30.0, 50.0),
            ..FrameInput::IDLE
        };

        let report = PhysicalLocomotion.compute_tick(
            &mut state,
            &config,
            &input,
            Basis::default(),
            &mut body,
            &mut view,
            1.0 / 60.0,
        );

        assert!((report.yaw_delta - 3.0).abs() < 1e-5);
        assert!((report.pitch + 5.0).abs() < 1e-5);
        assert!((view.yaw - 3.0).abs() < 1e-5);
        assert_eq!(view.pitch, report.pitch);
        assert_eq!(view.fov, report.fov);
        assert_eq!(body.moves.len(), 1);
    }

    #[test]
    fn test_idle_ticks_leave_rest_state_unchanged() {
        for kind in [LocomotionKind::Simple, LocomotionKind::Physical] {
            let config = MovementConfig {
                locomotion: kind,
                ..Default::default()
            };
            let strategy = kind.build();
            let mut state = MotionState::new(&config);
            let mut body = ScriptedBody::grounded();
            let mut view = RecordingView::default();

            for _ in 0..120 {
                strategy.compute_tick(
                    &mut state,
                    &config,
                    &FrameInput::IDLE,
                    Basis::default(),
                    &mut body,
                    &mut view,
                    1.0 / 60.0,
                );
            }

            assert_eq!(state.pitch(), 0.0);
            assert_eq!(state.horizontal_velocity, Vec3::ZERO);
            assert_eq!(state.current_fov(), config.default_fov);
        }
    }

    #[test]
    fn test_zero_dt_is_safe() {
        let config = MovementConfig::default();
        let mut state = MotionState::new(&config);
        state.horizontal_velocity = Vec3::new(2.0, 0.0, 0.0);
        let mut body = ScriptedBody::grounded();
        let mut view = RecordingView::default();
        let input = FrameInput {
            move_axis: Vec2::new(0.0, 1.0),
            sprint_held: true,
            ..FrameInput::IDLE
        };

        for dt in [0.0, -1.0, f32::NAN] {
            let report = PhysicalLocomotion.compute_tick(
                &mut state,
                &config,
                &input,
                Basis::default(),
                &mut body,
                &mut view,
                dt,
            );
            assert_eq!(report.displacement, Vec3::ZERO);
            assert!(report.speed.is_finite());
            assert!(report.fov.is_finite());
        }
        assert_eq!(state.horizontal_velocity, Vec3::new(2.0, 0.0, 0.0));
    }
}
