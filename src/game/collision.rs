//! Collision detection logic

use super::position::Position;
use super::state::State;

/// What the next head lands on, checked against the pre-tick state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// The head lands on the food cell
    pub food: bool,
    /// The head lands on a cell the snake occupied before the move
    pub body: bool,
}

/// Check `new_head` against the food and the snake of `state`.
///
/// Both checks use the same head and are independent: one cell can count
/// as food and body at once.
pub fn check_contact(state: &State, new_head: Position) -> Contact {
    Contact {
        food: state.food == new_head,
        body: state.snake.occupies(&new_head),
    }
}
