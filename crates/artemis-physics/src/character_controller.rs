//! Character body using rapier3d's kinematic character controller

use artemis_core::{CharacterMover, CollisionFlags, GroundSensor};
use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{PhysicsError, PhysicsWorld};

/// Translation differences below this are treated as "not blocked" (meters)
const BLOCK_EPSILON: f32 = 1.0e-4;

/// Character controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterControllerConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Maximum slope angle in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Whether to snap to ground when walking down slopes
    pub snap_to_ground: bool,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
}

impl Default for CharacterControllerConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            snap_to_ground: true,
            ground_snap_distance: 0.2,
        }
    }
}

/// Capsule body moved through the physics world with collision response
pub struct CharacterController {
    /// Configuration
    pub config: CharacterControllerConfig,
    /// Current position (bottom of the capsule)
    pub position: Vec3,
    /// Whether the last move ended on walkable ground
    grounded: bool,
    /// The collider handle, set once spawned
    collider_handle: Option<ColliderHandle>,
    /// Rapier's kinematic character controller
    controller: KinematicCharacterController,
}

impl CharacterController {
    /// Create a new character controller with default config
    pub fn new() -> Self {
        Self::with_config(CharacterControllerConfig::default())
    }

    /// Create a new character controller with custom config
    pub fn with_config(config: CharacterControllerConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: true,
        });
        controller.snap_to_ground = if config.snap_to_ground {
            Some(CharacterLength::Absolute(config.ground_snap_distance))
        } else {
            None
        };
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            grounded: false,
            collider_handle: None,
            controller,
        }
    }

    /// Spawn the character in the physics world
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let center = self.center_position();
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(vector![center.x, center.y, center.z])
            .friction(0.0) // Smooth sliding against walls
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        info!(?position, "Spawned character capsule");
        handle
    }

    /// The collider handle, if spawned
    pub fn collider_handle(&self) -> Option<ColliderHandle> {
        self.collider_handle
    }

    /// Resolve the collider handle, failing if the character is not in `physics`
    fn checked_handle(&self, physics: &PhysicsWorld) -> Result<ColliderHandle, PhysicsError> {
        let handle = self.collider_handle.ok_or(PhysicsError::NotSpawned)?;
        if physics.get_collider(handle).is_none() {
            return Err(PhysicsError::ColliderMissing(handle));
        }
        Ok(handle)
    }

    /// Borrow this character and its world as a tick-long [`KinematicBody`]
    pub fn body<'a>(
        &'a mut self,
        physics: &'a mut PhysicsWorld,
        dt: f32,
    ) -> Result<KinematicBody<'a>, PhysicsError> {
        self.checked_handle(physics)?;
        Ok(KinematicBody {
            character: self,
            physics,
            dt,
        })
    }

    /// Move the character with collision detection
    pub fn move_character(
        &mut self,
        physics: &mut PhysicsWorld,
        desired_translation: Vec3,
        dt: f32,
    ) -> Result<CollisionFlags, PhysicsError> {
        let collider_handle = self.checked_handle(physics)?;
        let Some(collider) = physics.collider_set.get(collider_handle) else {
            return Err(PhysicsError::ColliderMissing(collider_handle));
        };

        let shape = collider.shape();
        let center = self.center_position();
        let current_pos = Isometry::translation(center.x, center.y, center.z);

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            &physics.query_pipeline,
            shape,
            &current_pos,
            vector![desired_translation.x, desired_translation.y, desired_translation.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        self.grounded = movement.grounded;

        let applied = Vec3::new(
            movement.translation.x,
            movement.translation.y,
            movement.translation.z,
        );
        let flags = classify_collision(desired_translation, applied, movement.grounded);
        if flags.any() {
            debug!(?desired_translation, ?applied, ?flags, "Character move obstructed");
        }

        self.position += applied;

        let center = self.center_position();
        if let Some(collider) = physics.collider_set.get_mut(collider_handle) {
            collider.set_translation(vector![center.x, center.y, center.z]);
        }

        Ok(flags)
    }

    /// Set the character's position directly (teleport)
    pub fn set_position(
        &mut self,
        physics: &mut PhysicsWorld,
        position: Vec3,
    ) -> Result<(), PhysicsError> {
        let handle = self.checked_handle(physics)?;
        self.position = position;
        self.grounded = false;

        let center = self.center_position();
        if let Some(collider) = physics.collider_set.get_mut(handle) {
            collider.set_translation(vector![center.x, center.y, center.z]);
        }
        Ok(())
    }

    /// Get the eye position (top of capsule)
    pub fn eye_position(&self) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y + self.config.height - 0.1, // Slightly below top
            self.position.z,
        )
    }

    /// Get the center position (middle of capsule)
    pub fn center_position(&self) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y + self.config.height / 2.0,
            self.position.z,
        )
    }

    /// Check if standing on ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }
}

impl Default for CharacterController {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive collision flags by comparing the requested and applied translations
fn classify_collision(desired: Vec3, applied: Vec3, grounded: bool) -> CollisionFlags {
    let above = desired.y > BLOCK_EPSILON && applied.y < desired.y - BLOCK_EPSILON;
    let below =
        grounded || (desired.y < -BLOCK_EPSILON && applied.y > desired.y + BLOCK_EPSILON);

    let desired_xz = Vec3::new(desired.x, 0.0, desired.z);
    let applied_xz = Vec3::new(applied.x, 0.0, applied.z);
    let sides = desired_xz.length_squared() > BLOCK_EPSILON * BLOCK_EPSILON
        && (desired_xz - applied_xz).length() > BLOCK_EPSILON;

    CollisionFlags {
        above,
        below,
        sides,
    }
}

/// A spawned character and its world, borrowed for one tick
///
/// Constructed through [`CharacterController::body`], which checks that the
/// character's collider exists before any movement is requested.
pub struct KinematicBody<'a> {
    character: &'a mut CharacterController,
    physics: &'a mut PhysicsWorld,
    dt: f32,
}

impl CharacterMover for KinematicBody<'_> {
    fn move_by(&mut self, delta: Vec3) -> CollisionFlags {
        match self.character.move_character(self.physics, delta, self.dt) {
            Ok(flags) => flags,
            Err(e) => {
                warn!("Character move skipped: {}", e);
                CollisionFlags::NONE
            }
        }
    }
}

impl GroundSensor for KinematicBody<'_> {
    fn is_grounded(&self) -> bool {
        self.character.is_grounded()
    }
}
