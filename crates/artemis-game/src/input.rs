//! Latched input for locomotion
//!
//! Input callbacks arrive between ticks and overwrite (or accumulate into) a
//! latch. Once per tick the host takes a [`FrameInput`] snapshot, which also
//! clears the per-frame parts of the latch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Input snapshot valid for exactly one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Planar move axis, each component in [-1, 1] (x = strafe, y = forward)
    pub move_axis: Vec2,
    /// Look delta for this tick (x = yaw, y = pitch), unscaled
    pub look_axis: Vec2,
    /// Sprint modifier held
    pub sprint_held: bool,
    /// Jump pressed since the last tick
    pub jump_requested: bool,
}

impl FrameInput {
    /// No input at all
    pub const IDLE: FrameInput = FrameInput {
        move_axis: Vec2::ZERO,
        look_axis: Vec2::ZERO,
        sprint_held: false,
        jump_requested: false,
    };
}

/// Input latch written by device callbacks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Last move axis reported
    move_axis: Vec2,
    /// Look movement accumulated since the last snapshot
    look_delta: Vec2,
    /// Sprint currently held
    sprint_held: bool,
    /// Jump pressed and not yet consumed
    jump_pressed: bool,
    /// Whether the cursor is captured (invisible, locked)
    pub cursor_captured: bool,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock and hide the cursor; look input is only read while captured
    pub fn capture_cursor(&mut self) {
        self.cursor_captured = true;
    }

    /// Release the cursor and drop any pending look movement
    pub fn release_cursor(&mut self) {
        self.cursor_captured = false;
        self.look_delta = Vec2::ZERO;
    }

    /// Move axis callback
    pub fn on_move(&mut self, axis: Vec2) {
        self.move_axis = Vec2::new(clamp_axis(axis.x), clamp_axis(axis.y));
    }

    /// Look delta callback
    pub fn on_look(&mut self, delta: Vec2) {
        if self.cursor_captured && delta.is_finite() {
            self.look_delta += delta;
        }
    }

    /// Sprint button callback
    pub fn on_sprint(&mut self, pressed: bool) {
        self.sprint_held = pressed;
    }

    /// Jump button callback; a press stays latched until the next snapshot
    pub fn on_jump(&mut self, pressed: bool) {
        if pressed {
            self.jump_pressed = true;
        }
    }

    /// Take this tick's snapshot and clear the per-frame parts
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            move_axis: self.move_axis,
            look_axis: self.look_delta,
            sprint_held: self.sprint_held,
            jump_requested: self.jump_pressed,
        };
        self.look_delta = Vec2::ZERO;
        self.jump_pressed = false;
        frame
    }

    /// Clear all input state
    pub fn clear_all(&mut self) {
        self.move_axis = Vec2::ZERO;
        self.look_delta = Vec2::ZERO;
        self.sprint_held = false;
        self.jump_pressed = false;
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
