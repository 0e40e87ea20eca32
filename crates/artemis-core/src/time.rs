//! Frame timing for Artemis
//!
//! Turns raw frame deltas into clamped, scaled deltas and a count of
//! fixed-timestep ticks to run.

use serde::{Deserialize, Serialize};

/// Errors produced when validating a [`TimeConfig`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeConfigError {
    #[error("fixed timestep must be positive and finite, got {0}")]
    InvalidTimestep(f32),

    #[error("max delta time must be at least one fixed timestep, got {0}")]
    InvalidMaxDelta(f32),

    #[error("time scale must be positive and finite, got {0}")]
    InvalidTimeScale(f32),
}

/// Configuration for frame timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many simulated seconds pass per real second
    pub time_scale: f32,
    /// Fixed timestep for locomotion ticks (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

impl TimeConfig {
    /// Check that the timestep values can drive the accumulator
    pub fn validate(&self) -> Result<(), TimeConfigError> {
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(TimeConfigError::InvalidTimeScale(self.time_scale));
        }
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(TimeConfigError::InvalidTimestep(self.fixed_timestep));
        }
        if self.max_delta_time.is_nan() || self.max_delta_time < self.fixed_timestep {
            return Err(TimeConfigError::InvalidMaxDelta(self.max_delta_time));
        }
        Ok(())
    }
}

/// Game time tracking
#[derive(Debug, Clone)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Unscaled delta time
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Whether the simulation is paused
    pub paused: bool,
    /// Accumulated time for fixed timestep
    fixed_accumulator: f32,
}

impl Default for GameTime {
    fn default() -> Self {
        Self {
            config: TimeConfig::default(),
            total_time: 0.0,
            delta_time: 0.0,
            unscaled_delta_time: 0.0,
            frame_count: 0,
            paused: false,
            fixed_accumulator: 0.0,
        }
    }
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Result<Self, TimeConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Update with the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        // Negative or NaN deltas (clock hiccups) count as an empty frame.
        let raw_delta = if raw_delta.is_finite() { raw_delta.max(0.0) } else { 0.0 };
        self.unscaled_delta_time = raw_delta.min(self.config.max_delta_time);
        self.frame_count += 1;

        if self.paused {
            self.delta_time = 0.0;
            return;
        }

        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Get the number of fixed timesteps to process this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let mut steps = 0;
        while self.fixed_accumulator >= self.config.fixed_timestep {
            self.fixed_accumulator -= self.config.fixed_timestep;
            steps += 1;
        }
        steps
    }

    /// Get the interpolation factor for rendering between fixed steps
    pub fn fixed_interpolation(&self) -> f32 {
        self.fixed_accumulator / self.config.fixed_timestep
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}
