//! State transition applied once per tick

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::collision::check_contact;
use super::direction::Direction;
use super::position::Position;
use super::state::{Snapshot, State};
use crate::config::{INITIAL_SNAKE_LENGTH, SCORE_PER_FOOD};

/// Events of a single tick, used for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub hit_self: bool,
}

/// Result of [`next_state`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: State,
    pub target_length: usize,
    pub outcome: TickOutcome,
}

/// Compute the state that follows `current` when the head moves in `direction`.
///
/// Food and self contact are both checked against the same new head. The
/// self-collision reset is applied after the food bonus, so landing on a
/// cell that is both food and body ends with a reset. Relocated food is not
/// checked against the new body.
pub fn next_state(
    current: &State,
    direction: Direction,
    target_length: usize,
    rng: &mut impl Rng,
) -> Transition {
    let new_head = current.head().adjacent(direction);
    let contact = check_contact(current, new_head);

    let mut target_length = target_length;
    let mut score = current.score;

    if contact.food {
        target_length += 1;
        score = score.saturating_add(SCORE_PER_FOOD);
    }

    if contact.body {
        target_length = INITIAL_SNAKE_LENGTH;
        score = 0;
    }

    let food = if contact.food {
        Position::random(rng)
    } else {
        current.food
    };

    Transition {
        state: State {
            food,
            snake: current.snake.slither(new_head, target_length),
            score,
        },
        target_length,
        outcome: TickOutcome {
            ate_food: contact.food,
            hit_self: contact.body,
        },
    }
}

/// The running game: current state, target length and food RNG
#[derive(Debug)]
pub struct Simulation {
    state: State,
    tick: u64,
    target_length: usize,
    rng: StdRng,
}

impl Simulation {
    /// Start from the initial state
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_state(State::initial(), seed)
    }

    /// Start from an arbitrary state with the default target length
    pub fn from_state(state: State, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            state,
            tick: 0,
            target_length: INITIAL_SNAKE_LENGTH,
            rng,
        }
    }

    /// Advance one tick
    pub fn tick(&mut self, direction: Direction) -> TickOutcome {
        let transition = next_state(&self.state, direction, self.target_length, &mut self.rng);

        self.state = transition.state;
        self.target_length = transition.target_length;
        self.tick += 1;

        transition.outcome
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of transitions applied so far
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// The current state tagged with its tick number
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            state: self.state.clone(),
        }
    }
}
