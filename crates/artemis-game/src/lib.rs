//! Artemis Game - First-person character control
//!
//! Provides the player controller, locomotion strategies, camera rig, and
//! input latching.

pub mod camera;
pub mod error;
pub mod input;
pub mod locomotion;
pub mod player;

pub use camera::{CameraConfig, CameraController};
pub use error::{ConfigError, ControllerError};
pub use input::{FrameInput, InputState};
pub use locomotion::{
    Basis, Locomotion, LocomotionKind, MovementOutcome, PhysicalLocomotion, SimpleLocomotion,
    TickReport,
};
pub use player::{MotionState, MovementConfig, PlayerController};
