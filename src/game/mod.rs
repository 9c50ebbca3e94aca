//! Game module

pub mod collision;
pub mod direction;
pub mod position;
pub mod snake;
pub mod state;
pub mod tick;

pub use direction::Direction;
pub use position::Position;
pub use snake::Snake;
pub use state::{Snapshot, State};
pub use tick::{next_state, Simulation, TickOutcome, Transition};
