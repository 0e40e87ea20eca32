use rapier3d::prelude::ColliderHandle;

/// Errors raised when a character body is used without valid world state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    #[error("character has not been spawned into a physics world")]
    NotSpawned,

    #[error("character collider {0:?} is missing from the physics world")]
    ColliderMissing(ColliderHandle),
}
