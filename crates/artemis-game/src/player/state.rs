//! Per-entity motion state mutated every tick

use glam::Vec3;

use super::MovementConfig;

/// Velocity, look pitch, and lens state of one controlled character
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// Movement-plane velocity (Y is always zero)
    pub horizontal_velocity: Vec3,
    /// Vertical velocity from gravity and jumps (positive = up)
    pub vertical_velocity: f32,
    /// Magnitude of the combined velocity after the last tick
    current_speed: f32,
    /// Camera pivot pitch in degrees, kept within `pitch_clamp`
    pitch: f32,
    pitch_clamp: f32,
    /// Field of view last pushed to the lens
    pub(crate) current_fov: f32,
    /// Rate-of-change reference for the deceleration smoother
    pub(crate) damping_velocity: Vec3,
}

impl MotionState {
    /// Resting state for a freshly spawned character
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            horizontal_velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            current_speed: 0.0,
            pitch: 0.0,
            pitch_clamp: config.pitch_clamp.abs(),
            current_fov: config.default_fov,
            damping_velocity: Vec3::ZERO,
        }
    }

    /// Camera pivot pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch, clamped to `[-pitch_clamp, pitch_clamp]`.
    ///
    /// Non-finite values are ignored.
    pub fn set_pitch(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.pitch = degrees.clamp(-self.pitch_clamp, self.pitch_clamp);
        }
    }

    /// Speed after the last tick
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Field of view after the last tick
    pub fn current_fov(&self) -> f32 {
        self.current_fov
    }

    /// Horizontal and vertical velocity combined
    pub fn full_velocity(&self) -> Vec3 {
        Vec3::new(
            self.horizontal_velocity.x,
            self.vertical_velocity,
            self.horizontal_velocity.z,
        )
    }

    /// Recompute `current_speed` from the velocity components
    pub(crate) fn refresh_speed(&mut self) {
        self.current_speed = self.full_velocity().length();
    }

    /// Zero all motion, keeping look pitch and field of view
    pub fn stop(&mut self) {
        self.horizontal_velocity = Vec3::ZERO;
        self.vertical_velocity = 0.0;
        self.damping_velocity = Vec3::ZERO;
        self.current_speed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pitch_clamped_on_write() {
        let mut state = MotionState::new(&MovementConfig::default());
        state.set_pitch(200.0);
        assert_eq!(state.pitch(), 85.0);
        state.set_pitch(-1000.0);
        assert_eq!(state.pitch(), -85.0);
        state.set_pitch(f32::NAN);
        assert_eq!(state.pitch(), -85.0);
    }

    #[test]
    fn test_speed_combines_components() {
        let mut state = MotionState::new(&MovementConfig::default());
        state.horizontal_velocity = Vec3::new(3.0, 0.0, 0.0);
        state.vertical_velocity = 4.0;
        state.refresh_speed();
        assert!((state.current_speed() - 5.0).abs() < 1e-6);

        state.stop();
        assert_eq!(state.current_speed(), 0.0);
        assert_eq!(state.full_velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_resting_fov_matches_config() {
        let config = MovementConfig::default();
        let state = MotionState::new(&config);
        assert_eq!(state.current_fov(), config.default_fov);
    }
}
