//! Collaborator contracts for character locomotion
//!
//! The locomotion core never owns a physics world or a camera. It borrows
//! implementations of these traits for the duration of one tick:
//!
//! - [`CharacterMover`]: applies a displacement with collision response
//! - [`GroundSensor`]: reports whether the character stands on walkable ground
//! - [`OrientationSink`]: receives the yaw delta and camera pivot pitch
//! - [`LensSink`]: receives the camera field of view

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gravitational acceleration of the host environment (meters per second squared)
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Which sides of the character were obstructed during one move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFlags {
    /// Upward motion was blocked (ceiling, overhang)
    pub above: bool,
    /// Downward motion was blocked or the character ended on ground
    pub below: bool,
    /// Horizontal motion was blocked or deflected
    pub sides: bool,
}

impl CollisionFlags {
    /// No collision on any side
    pub const NONE: CollisionFlags = CollisionFlags {
        above: false,
        below: false,
        sides: false,
    };

    /// True when any side was struck
    pub fn any(&self) -> bool {
        self.above || self.below || self.sides
    }
}

/// Ground contact read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact {
    /// The character stands on walkable ground
    pub is_grounded: bool,
    /// The last move hit something above the character
    pub collided_above: bool,
}

impl GroundContact {
    /// Combine the grounded state with the flags of the move just made
    pub fn new(is_grounded: bool, flags: CollisionFlags) -> Self {
        Self {
            is_grounded,
            collided_above: flags.above,
        }
    }
}

/// Moves a character through the world with collision response
pub trait CharacterMover {
    /// Move by `delta` (world units), returning which sides were struck
    fn move_by(&mut self, delta: Vec3) -> CollisionFlags;
}

/// Reports whether a character is on the ground
pub trait GroundSensor {
    fn is_grounded(&self) -> bool;
}

/// A physics body that can both move and sense the ground
pub trait CharacterBody: CharacterMover + GroundSensor {}

impl<T: CharacterMover + GroundSensor + ?Sized> CharacterBody for T {}

/// Receives look orientation updates
pub trait OrientationSink {
    /// Rotate the entity about the world up axis by `degrees`
    fn apply_yaw(&mut self, degrees: f32);

    /// Set the camera pivot's local pitch in degrees
    fn set_pitch(&mut self, degrees: f32);
}

/// Receives the camera field of view
pub trait LensSink {
    /// Set the vertical field of view in degrees
    fn set_field_of_view(&mut self, degrees: f32);
}

/// A camera rig that takes both orientation and lens updates
pub trait ViewRig: OrientationSink + LensSink {}

impl<T: OrientationSink + LensSink + ?Sized> ViewRig for T {}
