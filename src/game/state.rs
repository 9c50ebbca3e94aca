//! Game state snapshots

use serde::Serialize;

use super::position::Position;
use super::snake::Snake;
use crate::config::{INITIAL_FOOD, INITIAL_HEAD};

/// Canonical game state. Replaced, never mutated, on every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    /// Where the food currently sits
    pub food: Position,
    /// Snake body, head first
    pub snake: Snake,
    /// Ten points per food since the last self collision
    pub score: u32,
}

impl State {
    /// The fixed state every engine starts from
    pub fn initial() -> Self {
        Self {
            food: INITIAL_FOOD.into(),
            snake: Snake::new(INITIAL_HEAD.into()),
            score: 0,
        }
    }

    /// The snake's head
    pub fn head(&self) -> Position {
        self.snake.head()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initial()
    }
}

/// A published state tagged with its position in the tick sequence.
///
/// `tick` is 0 for the initial state and grows by exactly one per transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub state: State,
}

impl Snapshot {
    /// Snapshot of the initial state
    pub fn initial() -> Self {
        Self {
            tick: 0,
            state: State::initial(),
        }
    }
}
