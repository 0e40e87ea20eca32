//! Movement configuration

use artemis_core::GRAVITY;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::locomotion::LocomotionKind;

/// Sprint field of view relative to the default field of view
pub const SPRINT_FOV_FACTOR: f32 = 1.1;

/// Movement configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Which locomotion strategy drives the character
    pub locomotion: LocomotionKind,
    /// Walking speed in meters per second
    pub walk_speed: f32,
    /// Sprinting speed in meters per second
    pub sprint_speed: f32,
    /// Rate at which horizontal velocity approaches its target (m/s²)
    pub acceleration: f32,
    /// Seconds for horizontal speed to settle near zero once input stops
    pub deceleration_time: f32,
    /// Jump apex height in meters
    pub jump_height: f32,
    /// Multiplier on the environment gravity
    pub gravity_multiplier: f32,
    /// Degrees of rotation per unit of look input (x = yaw, y = pitch)
    pub look_sensitivity: Vec2,
    /// Pitch limit in degrees, applied symmetrically
    pub pitch_clamp: f32,
    /// Resting field of view in degrees
    pub default_fov: f32,
    /// Field-of-view approach rate (per second)
    pub fov_smoothing: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            locomotion: LocomotionKind::Physical,
            walk_speed: 3.5,
            sprint_speed: 8.0,
            acceleration: 20.0,
            deceleration_time: 0.25,
            jump_height: 2.0,
            gravity_multiplier: 4.0,
            look_sensitivity: Vec2::new(0.1, 0.1),
            pitch_clamp: 85.0,
            default_fov: 90.0,
            fov_smoothing: 3.0,
        }
    }
}

impl MovementConfig {
    /// Settings for the clamped-speed controller without jumping.
    ///
    /// Its gravity term is not accumulated, so it uses a much larger
    /// multiplier to keep the character pressed onto the ground.
    pub fn simple() -> Self {
        Self {
            locomotion: LocomotionKind::Simple,
            gravity_multiplier: 20.0,
            ..Self::default()
        }
    }

    /// Check that every rate, speed, and angle is positive and finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("walk_speed", self.walk_speed),
            ("sprint_speed", self.sprint_speed),
            ("acceleration", self.acceleration),
            ("deceleration_time", self.deceleration_time),
            ("jump_height", self.jump_height),
            ("gravity_multiplier", self.gravity_multiplier),
            ("look_sensitivity.x", self.look_sensitivity.x),
            ("look_sensitivity.y", self.look_sensitivity.y),
            ("pitch_clamp", self.pitch_clamp),
            ("default_fov", self.default_fov),
            ("fov_smoothing", self.fov_smoothing),
        ];

        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.sprint_speed < self.walk_speed {
            debug!(
                walk_speed = self.walk_speed,
                sprint_speed = self.sprint_speed,
                "Sprint speed is below walk speed"
            );
        }
        Ok(())
    }

    /// Get the current max speed based on sprint state
    pub fn max_speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.sprint_speed
        } else {
            self.walk_speed
        }
    }

    /// Field of view while sprinting at full speed
    pub fn sprint_fov(&self) -> f32 {
        self.default_fov * SPRINT_FOV_FACTOR
    }

    /// Vertical acceleration applied while airborne (negative = down)
    pub fn gravity(&self) -> f32 {
        GRAVITY.y * self.gravity_multiplier
    }

    /// Launch velocity that reaches `jump_height` under this gravity
    pub fn jump_velocity(&self) -> f32 {
        (2.0 * self.jump_height * -GRAVITY.y * self.gravity_multiplier).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(MovementConfig::default().validate(), Ok(()));
        assert_eq!(MovementConfig::simple().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let config = MovementConfig {
            acceleration: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "acceleration",
                value: 0.0
            })
        );

        let config = MovementConfig {
            pitch_clamp: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_jump_velocity() {
        let config = MovementConfig {
            jump_height: 2.0,
            gravity_multiplier: 4.0,
            ..Default::default()
        };
        assert!((config.jump_velocity() - 12.529).abs() < 0.01);
    }

    #[test]
    fn test_speed_and_fov_derivations() {
        let config = MovementConfig::default();
        assert_eq!(config.max_speed(false), 3.5);
        assert_eq!(config.max_speed(true), 8.0);
        assert!((config.sprint_fov() - 99.0).abs() < 1e-4);
        assert!((config.gravity() + 39.24).abs() < 1e-3);
    }
}
