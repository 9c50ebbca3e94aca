//! Game configuration constants

use std::time::Duration;

use crate::error::GameError;

/// Board width and height in cells (the grid is square)
pub const BOARD_SIZE: i32 = 16;

/// Game tick delay in milliseconds
pub const TICK_PERIOD_MS: u64 = 150;

/// Target length the snake grows to at start and after a self collision
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Points awarded per food eaten
pub const SCORE_PER_FOOD: u32 = 10;

/// Food cell of the initial state
pub const INITIAL_FOOD: (i32, i32) = (5, 5);

/// Head cell of the initial state
pub const INITIAL_HEAD: (i32, i32) = (7, 7);

/// Snapshots retained per subscriber before it is reported as lagging
pub const SNAPSHOT_CHANNEL_CAPACITY: usize = 64;

// =============================================================================
// Environment overrides
// =============================================================================

/// Overrides the tick period, in milliseconds
pub const ENV_TICK_MS: &str = "SNAKE_TICK_MS";

/// Seeds the food RNG for a reproducible run
pub const ENV_SEED: &str = "SNAKE_SEED";

/// Runtime settings for an engine instance.
///
/// The board size is fixed at [`BOARD_SIZE`]; only timing, seeding and
/// channel sizing can vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Delay between two consecutive ticks
    pub tick_period: Duration,
    /// Seed for food placement; `None` draws one from OS entropy
    pub seed: Option<u64>,
    /// Capacity of the per-tick snapshot channel
    pub channel_capacity: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(TICK_PERIOD_MS),
            seed: None,
            channel_capacity: SNAPSHOT_CHANNEL_CAPACITY,
        }
    }
}

impl GameConfig {
    /// Build a config from the defaults plus `SNAKE_TICK_MS` / `SNAKE_SEED`
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GameError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_TICK_MS) {
            let ms = parse_value::<u64>(ENV_TICK_MS, &raw)?;
            if ms == 0 {
                return Err(GameError::InvalidConfig {
                    key: ENV_TICK_MS.to_string(),
                    value: raw,
                });
            }
            config.tick_period = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(ENV_SEED) {
            config.seed = Some(parse_value::<u64>(ENV_SEED, &raw)?);
        }

        Ok(config)
    }

    /// Set a fixed seed for food placement
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tick period
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, GameError> {
    raw.trim().parse().map_err(|_| GameError::InvalidConfig {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
