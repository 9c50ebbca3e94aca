//! Engine errors

use thiserror::Error;

/// Errors surfaced by the engine's public operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid direction vector ({dx}, {dy}): expected a cardinal unit vector")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: String, value: String },

    #[error("Engine task failed: {0}")]
    EngineTask(String),
}

/// Errors returned while receiving from a [`Subscription`](crate::broadcast::Subscription)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("Subscriber lagged behind by {0} snapshots")]
    Lagged(u64),

    #[error("Engine stopped")]
    Closed,
}
