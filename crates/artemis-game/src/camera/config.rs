//! Camera configuration

use serde::{Deserialize, Serialize};

/// Camera configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical offset added to the character's eye position
    pub eye_height_offset: f32,
    /// Near clip plane distance
    pub near_plane: f32,
    /// Far clip plane distance
    pub far_plane: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_height_offset: 0.0, // Use the character's eye position directly
            near_plane: 0.1,
            far_plane: 1000.0,
        }
    }
}
