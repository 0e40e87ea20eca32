//! First-person camera rig
//!
//! Holds the entity yaw, the pivot pitch, and the lens field of view that the
//! locomotion core writes each tick.

mod config;
mod controller;

pub use config::CameraConfig;
pub use controller::CameraController;
