//! First-person player controller with physics integration

use artemis_core::EntityId;
use artemis_physics::{CharacterController, CharacterControllerConfig, PhysicsWorld};
use glam::Vec3;
use tracing::{debug_span, info};

use crate::camera::{CameraConfig, CameraController};
use crate::error::ControllerError;
use crate::input::FrameInput;
use crate::locomotion::{Locomotion, LocomotionKind, TickReport};

use super::{MotionState, MovementConfig};

/// Player controller tying input, locomotion, the physics body, and the camera
pub struct PlayerController {
    /// Entity id, attached to every tick's log span
    id: EntityId,
    /// Movement configuration
    config: MovementConfig,
    /// Velocities, pitch, and lens state
    state: MotionState,
    /// Active locomotion strategy
    locomotion: Box<dyn Locomotion>,
    /// Physics character controller
    pub character: CharacterController,
    /// First-person camera rig
    pub camera: CameraController,
}

impl PlayerController {
    /// Spawn a player with the default capsule at `position`
    pub fn spawn(
        config: MovementConfig,
        camera_config: CameraConfig,
        physics: &mut PhysicsWorld,
        position: Vec3,
    ) -> Result<Self, ControllerError> {
        Self::spawn_with_body(
            config,
            camera_config,
            CharacterControllerConfig::default(),
            physics,
            position,
        )
    }

    /// Spawn a player with a custom capsule at `position`
    pub fn spawn_with_body(
        config: MovementConfig,
        camera_config: CameraConfig,
        character_config: CharacterControllerConfig,
        physics: &mut PhysicsWorld,
        position: Vec3,
    ) -> Result<Self, ControllerError> {
        config.validate()?;

        let mut character = CharacterController::with_config(character_config);
        character.spawn(physics, position);
        physics.update_queries();

        let mut camera = CameraController::new(camera_config, config.default_fov);
        camera.follow(character.eye_position());

        let id = EntityId::new();
        info!(%id, locomotion = ?config.locomotion, "Player spawned");

        Ok(Self {
            id,
            state: MotionState::new(&config),
            locomotion: config.locomotion.build(),
            config,
            character,
            camera,
        })
    }

    /// Run one tick
    pub fn update(
        &mut self,
        physics: &mut PhysicsWorld,
        input: &FrameInput,
        dt: f32,
    ) -> Result<TickReport, ControllerError> {
        let _span = debug_span!("player_tick", id = %self.id).entered();

        let basis = self.camera.basis();
        let mut body = self.character.body(physics, dt)?;
        let report = self.locomotion.compute_tick(
            &mut self.state,
            &self.config,
            input,
            basis,
            &mut body,
            &mut self.camera,
            dt,
        );

        self.camera.follow(self.character.eye_position());
        Ok(report)
    }

    /// Move the player to `position` and stop all motion
    pub fn teleport(
        &mut self,
        physics: &mut PhysicsWorld,
        position: Vec3,
    ) -> Result<(), ControllerError> {
        self.character.set_position(physics, position)?;
        self.state.stop();
        self.camera.follow(self.character.eye_position());
        info!(id = %self.id, ?position, "Player teleported");
        Ok(())
    }

    /// Switch the locomotion strategy, keeping the current motion state
    pub fn set_locomotion(&mut self, kind: LocomotionKind) {
        if self.locomotion.kind() != kind {
            self.config.locomotion = kind;
            self.locomotion = kind.build();
            info!(id = %self.id, locomotion = ?kind, "Locomotion changed");
        }
    }

    /// Entity id
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Get the player's current position (bottom of the capsule)
    pub fn position(&self) -> Vec3 {
        self.character.position
    }

    /// Get the player's eye position
    pub fn eye_position(&self) -> Vec3 {
        self.character.eye_position()
    }

    /// Check if the player is grounded
    pub fn is_grounded(&self) -> bool {
        self.character.is_grounded()
    }
}
