//! Snake game engine
//!
//! A 16x16 toroidal snake game driven by a fixed-period tick loop. Input
//! handlers submit directions through [`Engine::submit_direction`]; observers
//! read [`Engine::current`] or follow every tick through [`Engine::subscribe`].

pub mod broadcast;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod protocol;
pub mod register;

pub use broadcast::{Broadcaster, InMemoryBroadcaster, Subscription};
pub use config::GameConfig;
pub use engine::Engine;
pub use error::{GameError, SubscriptionError};
pub use game::{Direction, Position, Snake, Snapshot, State};
pub use protocol::Command;
pub use register::DirectionRegister;
