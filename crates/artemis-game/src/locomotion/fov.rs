//! Sprint-driven field of view

use crate::player::{MotionState, MovementConfig};

use super::math::lerp_clamped;

/// Speeds at or below this never widen the field of view
const SPRINT_FOV_MIN_SPEED: f32 = 0.1;

/// Field of view the lens is heading toward this tick
pub fn target_fov(config: &MovementConfig, current_speed: f32, sprint_held: bool) -> f32 {
    if sprint_held && current_speed > SPRINT_FOV_MIN_SPEED {
        let speed_ratio = current_speed / config.sprint_speed;
        lerp_clamped(config.default_fov, config.sprint_fov(), speed_ratio)
    } else {
        config.default_fov
    }
}

/// Move the state's field of view toward its target.
///
/// The approach factor is `fov_smoothing * dt`, so the response depends on
/// frame rate.
pub fn compute_fov(
    state: &mut MotionState,
    config: &MovementConfig,
    sprint_held: bool,
    dt: f32,
) -> f32 {
    let target = target_fov(config, state.current_speed(), sprint_held);
    state.current_fov = lerp_clamped(state.current_fov, target, config.fov_smoothing * dt);
    state.current_fov
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sprint_targets_default() {
        let config = MovementConfig::default();
        for speed in [0.0, 3.5, 8.0, 40.0] {
            assert_eq!(target_fov(&config, speed, false), config.default_fov);
        }
    }

    #[test]
    fn test_sprint_target_scales_with_speed() {
        let config = MovementConfig::default();
        assert_eq!(target_fov(&config, 0.05, true), config.default_fov);
        assert!((target_fov(&config, 4.0, true) - 94.5).abs() < 1e-4);
        assert!((target_fov(&config, 8.0, true) - config.sprint_fov()).abs() < 1e-4);
        // Overshooting speed does not push past the sprint field of view.
        assert!((target_fov(&config, 16.0, true) - config.sprint_fov()).abs() < 1e-4);
    }

    #[test]
    fn test_fov_approaches_target() {
        let config = MovementConfig::default();
        let mut state = MotionState::new(&config);
        state.horizontal_velocity = glam::Vec3::new(0.0, 0.0, -8.0);
        state.refresh_speed();

        let first = compute_fov(&mut state, &config, true, 1.0 / 60.0);
        assert!(first > config.default_fov);
        assert!(first < config.sprint_fov());

        // A huge step lands exactly on the target instead of overshooting.
        let settled = compute_fov(&mut state, &config, true, 10.0);
        assert!((settled - config.sprint_fov()).abs() < 1e-4);
    }
}
