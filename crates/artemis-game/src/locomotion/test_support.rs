//! In-memory collaborators for locomotion tests

use artemis_core::{CharacterMover, CollisionFlags, GroundSensor, LensSink, OrientationSink};
use glam::Vec3;

/// Body with a fixed grounded state that records every requested move
#[derive(Debug, Default)]
pub struct ScriptedBody {
    pub grounded: bool,
    /// Flags returned from every move
    pub flags: CollisionFlags,
    pub moves: Vec<Vec3>,
}

impl ScriptedBody {
    pub fn grounded() -> Self {
        Self {
            grounded: true,
            flags: CollisionFlags {
                below: true,
                ..CollisionFlags::NONE
            },
            moves: Vec::new(),
        }
    }

    pub fn airborne() -> Self {
        Self::default()
    }
}

impl CharacterMover for ScriptedBody {
    fn move_by(&mut self, delta: Vec3) -> CollisionFlags {
        self.moves.push(delta);
        self.flags
    }
}

impl GroundSensor for ScriptedBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }
}

/// View that stores the last orientation and lens values it received
#[derive(Debug, Default)]
pub struct RecordingView {
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
}

impl OrientationSink for RecordingView {
    fn apply_yaw(&mut self, degrees: f32) {
        self.yaw += degrees;
    }

    fn set_pitch(&mut self, degrees: f32) {
        self.pitch = degrees;
    }
}

impl LensSink for RecordingView {
    fn set_field_of_view(&mut self, degrees: f32) {
        self.fov = degrees;
    }
}
