//! Game loop - advances the simulation every tick and publishes snapshots

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

use crate::broadcast::{Broadcaster, InMemoryBroadcaster, Subscription};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{Direction, Simulation, Snapshot};
use crate::register::DirectionRegister;

/// Handle to a running game.
///
/// The tick loop runs on its own tokio task from [`Engine::start`] until
/// [`Engine::shutdown`] is awaited or the handle is dropped; either way it
/// stops between two ticks.
pub struct Engine {
    register: Arc<DirectionRegister>,
    broadcaster: Arc<dyn Broadcaster>,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<Snapshot>,
}

impl Engine {
    /// Spawn the game loop with an in-memory broadcaster.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(config: GameConfig) -> Self {
        let broadcaster =
            InMemoryBroadcaster::with_capacity(Snapshot::initial(), config.channel_capacity);
        Self::with_broadcaster(config, Arc::new(broadcaster))
    }

    /// Spawn the game loop publishing through a custom broadcaster
    pub fn with_broadcaster(config: GameConfig, broadcaster: Arc<dyn Broadcaster>) -> Self {
        let register = Arc::new(DirectionRegister::default());
        let simulation = Simulation::new(config.seed);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let task = tokio::spawn(run_loop(
            simulation,
            register.clone(),
            broadcaster.clone(),
            config.tick_period,
            shutdown_rx,
        ));

        info!(
            "Game loop started (tick every {}ms, seed {:?})",
            config.tick_period.as_millis(),
            config.seed
        );

        Self {
            register,
            broadcaster,
            shutdown_tx,
            task,
        }
    }

    /// Change the direction the next tick moves in.
    ///
    /// Reversals are accepted; with a body of two or more cells the next
    /// tick then runs into the neck and counts as a self collision.
    pub fn submit_direction(&self, direction: Direction) {
        let previous = self.register.set(direction);

        if previous != direction {
            debug!("Direction {:?} -> {:?}", previous, direction);
        }
        if previous.is_opposite(&direction) {
            debug!("Direction reversed to {:?}", direction);
        }
    }

    /// Validate a raw `(dx, dy)` vector and submit it.
    ///
    /// Anything but a cardinal unit vector is rejected without touching the
    /// current direction.
    pub fn submit_vector(&self, dx: i32, dy: i32) -> Result<(), GameError> {
        match Direction::try_from((dx, dy)) {
            Ok(direction) => {
                self.submit_direction(direction);
                Ok(())
            }
            Err(e) => {
                warn!("Ignoring direction command: {}", e);
                Err(e)
            }
        }
    }

    /// The direction the next tick will read
    pub fn direction(&self) -> Direction {
        self.register.get()
    }

    /// Subscribe to the latest snapshot and every snapshot after it
    pub fn subscribe(&self) -> Subscription {
        self.broadcaster.subscribe()
    }

    /// The most recently published snapshot
    pub fn current(&self) -> Arc<Snapshot> {
        self.broadcaster.latest()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.broadcaster.subscriber_count()
    }

    /// Stop the loop between ticks and wait for it to finish.
    ///
    /// Returns the last published snapshot. Subscriptions drain whatever is
    /// buffered and then report the stream as closed.
    pub async fn shutdown(self) -> Result<Snapshot, GameError> {
        // The loop may already be gone if it panicked
        let _ = self.shutdown_tx.send(());

        let last = self
            .task
            .await
            .map_err(|e| GameError::EngineTask(e.to_string()))?;

        info!("Game loop stopped at tick {} (score {})", last.tick, last.state.score);
        Ok(last)
    }
}

async fn run_loop(
    mut simulation: Simulation,
    register: Arc<DirectionRegister>,
    broadcaster: Arc<dyn Broadcaster>,
    tick_period: Duration,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> Snapshot {
    let mut ticker = interval_at(Instant::now() + tick_period, tick_period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // Shutdown wins over a due tick; a dropped sender counts as shutdown
        tokio::select! {
            biased;
            _ = &mut shutdown_rx => break,
            _ = ticker.tick() => {}
        }

        let direction = register.get();
        let outcome = simulation.tick(direction);
        let state = simulation.state();

        if outcome.ate_food {
            debug!(
                "Food eaten at {:?} (score {}, target length {})",
                state.head(),
                state.score,
                simulation.target_length()
            );
        }
        if outcome.hit_self {
            debug!("Self collision at {:?}, score reset", state.head());
        }
        trace!(
            "Tick {}: head {:?} heading {:?}, length {}",
            simulation.tick_count(),
            state.head(),
            direction,
            state.snake.len()
        );

        broadcaster.send(simulation.snapshot()).await;
    }

    simulation.snapshot()
}
