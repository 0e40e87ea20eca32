//! Artemis Core - Core types and utilities for the Artemis controller
//!
//! This crate provides the foundational types shared by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Transform and entity identity
//! - Frame timing with a fixed-timestep accumulator
//! - The collaborator contracts the locomotion core drives each tick

pub mod motion;
pub mod time;
pub mod types;

pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use motion::{
    CharacterBody, CharacterMover, CollisionFlags, GroundContact, GroundSensor, LensSink,
    OrientationSink, ViewRig, GRAVITY,
};
pub use time::{GameTime, TimeConfig, TimeConfigError};
pub use types::{EntityId, Transform};
