//! Position struct for grid cells

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::config::BOARD_SIZE;

/// A cell on the game grid, each coordinate in `[0, BOARD_SIZE)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the position adjacent to this one in the given direction.
    /// Wraps around the board edges.
    pub fn adjacent(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();

        Position::new(
            (self.x + dx + BOARD_SIZE) % BOARD_SIZE,
            (self.y + dy + BOARD_SIZE) % BOARD_SIZE,
        )
    }

    /// Whether both coordinates lie on the board
    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Pick a uniformly random cell on the board
    pub fn random(rng: &mut impl Rng) -> Self {
        Position::new(rng.gen_range(0..BOARD_SIZE), rng.gen_range(0..BOARD_SIZE))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}
