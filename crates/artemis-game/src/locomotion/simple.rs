//! Clamped-speed locomotion without jumping

use artemis_core::CharacterBody;
use glam::Vec3;

use crate::input::FrameInput;
use crate::player::{MotionState, MovementConfig};

use super::math::{move_towards, planar_direction};
use super::{Basis, Locomotion, LocomotionKind, MovementOutcome, DIRECTION_DEADZONE_SQ};

/// Accelerates toward walk or sprint speed at a constant rate and stops the
/// same way. Gravity is a per-tick downward velocity of
/// `gravity * multiplier * dt` that is not accumulated across ticks, and
/// jump requests are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleLocomotion;

impl Locomotion for SimpleLocomotion {
    fn kind(&self) -> LocomotionKind {
        LocomotionKind::Simple
    }

    fn compute_movement(
        &self,
        state: &mut MotionState,
        config: &MovementConfig,
        input: &FrameInput,
        basis: Basis,
        body: &mut dyn CharacterBody,
        dt: f32,
    ) -> MovementOutcome {
        let grounded = body.is_grounded();

        let direction = planar_direction(input.move_axis, basis);
        let target = if direction.length_squared() < DIRECTION_DEADZONE_SQ {
            Vec3::ZERO
        } else {
            direction * config.max_speed(input.sprint_held)
        };

        state.horizontal_velocity =
            move_towards(state.horizontal_velocity, target, config.acceleration * dt);
        state.vertical_velocity = config.gravity() * dt;

        let displacement = state.full_velocity() * dt;
        let flags = body.move_by(displacement);
        state.refresh_speed();

        MovementOutcome {
            displacement,
            flags,
            grounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::test_support::ScriptedBody;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn forward_input(sprint: bool) -> FrameInput {
        FrameInput {
            move_axis: Vec2::new(0.0, 1.0),
            sprint_held: sprint,
            ..FrameInput::IDLE
        }
    }

    #[test]
    fn test_zero_input_stays_still() {
        let config = MovementConfig::simple();
        let mut state = MotionState::new(&config);
        let mut body = ScriptedBody::grounded();

        let outcome = SimpleLocomotion.compute_movement(
            &mut state,
            &config,
            &FrameInput::IDLE,
            Basis::default(),
            &mut body,
            DT,
        );

        assert_eq!(state.horizontal_velocity, Vec3::ZERO);
        assert_eq!(outcome.displacement.x, 0.0);
        assert_eq!(outcome.displacement.z, 0.0);
        assert!(outcome.displacement.y < 0.0);
    }

    #[test]
    fn test_acceleration_step_is_bounded() {
        let config = MovementConfig::simple();
        let mut state = MotionState::new(&config);
        let mut body = ScriptedBody::grounded();

        SimpleLocomotion.compute_movement(
            &mut state,
            &config,
            &forward_input(false),
            Basis::default(),
            &mut body,
            DT,
        );

        let expected = config.acceleration * DT;
        assert!((state.horizontal_velocity.length() - expected).abs() < 1e-5);
        assert!(state.horizontal_velocity.z < 0.0);
    }

    #[test]
    fn test_sprint_reaches_but_never_exceeds_sprint_speed() {
        let config = MovementConfig::simple();
        let mut state = MotionState::new(&config);
        let mut body = ScriptedBody::grounded();

        for _ in 0..120 {
            SimpleLocomotion.compute_movement(
                &mut state,
                &config,
                &forward_input(true),
                Basis::default(),
                &mut body,
                DT,
            );
            assert!(state.horizontal_velocity.length() <= config.sprint_speed + 1e-4);
        }
        assert!((state.horizontal_velocity.length() - config.sprint_speed).abs() < 1e-4);
    }

    #[test]
    fn test_gravity_does_not_accumulate_and_jump_is_ignored() {
        let config = MovementConfig::simple();
        let mut state = MotionState::new(&config);
        let mut body = ScriptedBody::airborne();
        let input = FrameInput {
            jump_requested: true,
            ..FrameInput::IDLE
        };

        for _ in 0..10 {
            SimpleLocomotion.compute_movement(
                &mut state,
                &config,
                &input,
                Basis::default(),
                &mut body,
                DT,
            );
        }

        assert!((state.vertical_velocity - config.gravity() * DT).abs() < 1e-6);
        assert!((state.current_speed() - state.vertical_velocity.abs()).abs() < 1e-6);
    }
}
