use artemis_physics::PhysicsError;

/// A movement setting that cannot drive the controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// Errors surfaced while constructing or ticking a player controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error("invalid movement config: {0}")]
    Config(#[from] ConfigError),

    #[error("physics body unavailable: {0}")]
    Physics(#[from] PhysicsError),
}
