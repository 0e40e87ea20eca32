//! Accelerate/decelerate locomotion with jumping

use artemis_core::{CharacterBody, GroundContact};
use glam::Vec3;
use tracing::debug;

use crate::input::FrameInput;
use crate::player::{MotionState, MovementConfig};

use super::math::{move_towards, planar_direction, smooth_damp};
use super::{Basis, Locomotion, LocomotionKind, MovementOutcome, DIRECTION_DEADZONE_SQ};

/// Vertical velocity held while grounded so the body keeps ground contact
pub const GROUNDED_STICK_VELOCITY: f32 = -3.0;

/// Upward velocity above which a ceiling hit cancels the rise
pub const HEAD_BUMP_THRESHOLD: f32 = 0.01;

/// Accelerates at a constant rate while there is move input and decays
/// smoothly to rest over `deceleration_time` once input stops. Gravity
/// integrates while airborne, jumps launch from the ground, and ceilings
/// cancel upward velocity.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalLocomotion;

impl Locomotion for PhysicalLocomotion {
    fn kind(&self) -> LocomotionKind {
        LocomotionKind::Physical
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
        if direction.length_squared() > DIRECTION_DEADZONE_SQ {
            let target = direction * config.max_speed(input.sprint_held);
            state.horizontal_velocity =
                move_towards(state.horizontal_velocity, target, config.acceleration * dt);
            state.damping_velocity = Vec3::ZERO;
        } else {
            state.horizontal_velocity = smooth_damp(
                state.horizontal_velocity,
                Vec3::ZERO,
                &mut state.damping_velocity,
                config.deceleration_time,
                dt,
            );
        }

        if grounded && state.vertical_velocity < 0.0 {
            state.vertical_velocity = GROUNDED_STICK_VELOCITY;
        } else {
            state.vertical_velocity += config.gravity() * dt;
        }

        if input.jump_requested && grounded {
            state.vertical_velocity = config.jump_velocity();
            debug!(velocity = state.vertical_velocity, "Jump");
        }

        let displacement = state.full_velocity() * dt;
        let flags = body.move_by(displacement);
        let contact = GroundContact::new(grounded, flags);

        if contact.collided_above && state.vertical_velocity > HEAD_BUMP_THRESHOLD {
            debug!(velocity = state.vertical_velocity, "Head bump cancelled upward motion");
            state.vertical_velocity = 0.0;
        }

        state.refresh_speed();

        MovementOutcome {
            displacement,
            flags,
            grounded,
        }
    }
}
