//! Player controller module
//!
//! Provides first-person player movement with physics integration.

mod controller;
mod movement;
mod state;

pub use controller::PlayerController;
pub use movement::{MovementConfig, SPRINT_FOV_FACTOR};
pub use state::MotionState;
