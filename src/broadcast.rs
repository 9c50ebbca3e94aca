//! Broadcaster abstraction for publishing game snapshots
//!
//! The in-memory implementation pairs a `watch` channel, which always holds
//! the latest snapshot for late subscribers and point reads, with a
//! `broadcast` channel that carries every snapshot in tick order.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tracing::trace;

use crate::config::SNAPSHOT_CHANNEL_CAPACITY;
use crate::error::SubscriptionError;
use crate::game::Snapshot;

/// Trait for publishing snapshots to observers
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Subscribe to the latest snapshot and every one after it
    fn subscribe(&self) -> Subscription;

    /// Publish a snapshot to all subscribers
    async fn send(&self, snapshot: Snapshot);

    /// The most recently published snapshot
    fn latest(&self) -> Arc<Snapshot>;

    /// Get the number of active subscribers
    fn subscriber_count(&self) -> usize;
}

/// In-memory broadcaster backed by tokio channels
pub struct InMemoryBroadcaster {
    latest: watch::Sender<Arc<Snapshot>>,
    tx: broadcast::Sender<Arc<Snapshot>>,
}

impl InMemoryBroadcaster {
    /// Create a broadcaster whose latest value starts as `initial`
    pub fn new(initial: Snapshot) -> Self {
        Self::with_capacity(initial, SNAPSHOT_CHANNEL_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(initial: Snapshot, capacity: usize) -> Self {
        let (latest, _) = watch::channel(Arc::new(initial));
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { latest, tx }
    }
}

#[async_trait]
impl Broadcaster for InMemoryBroadcaster {
    fn subscribe(&self) -> Subscription {
        // Join the stream before reading the latest value so nothing published
        // in between can fall through the gap; duplicates are filtered by tick.
        let rx = self.tx.subscribe();
        let first = self.latest.borrow().clone();
        Subscription::new(first, rx)
    }

    async fn send(&self, snapshot: Snapshot) {
        let snapshot = Arc::new(snapshot);
        self.latest.send_replace(snapshot.clone());

        // send() returns error if there are no receivers, which is fine
        if let Err(e) = self.tx.send(snapshot) {
            trace!("Snapshot {} published with no subscribers", e.0.tick);
        }
    }

    fn latest(&self) -> Arc<Snapshot> {
        self.latest.borrow().clone()
    }

    fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// An observer's view of the snapshot stream.
///
/// Yields the snapshot that was current at subscription time, then every
/// later snapshot in tick order, each exactly once.
#[derive(Debug)]
pub struct Subscription {
    first: Option<Arc<Snapshot>>,
    rx: broadcast::Receiver<Arc<Snapshot>>,
    last_tick: Option<u64>,
}

impl Subscription {
    fn new(first: Arc<Snapshot>, rx: broadcast::Receiver<Arc<Snapshot>>) -> Self {
        Self {
            first: Some(first),
            rx,
            last_tick: None,
        }
    }

    /// Wait for the next snapshot.
    ///
    /// Returns [`SubscriptionError::Lagged`] once if this subscriber fell
    /// behind the channel capacity; the following call resumes with the
    /// oldest snapshot still retained. Returns [`SubscriptionError::Closed`]
    /// after the publisher is gone and everything buffered was delivered.
    pub async fn recv(&mut self) -> Result<Arc<Snapshot>, SubscriptionError> {
        if let Some(first) = self.first.take() {
            self.last_tick = Some(first.tick);
            return Ok(first);
        }

        loop {
            match self.rx.recv().await {
                Ok(snapshot) => {
                    if self.last_tick.is_some_and(|last| snapshot.tick <= last) {
                        continue;
                    }
                    self.last_tick = Some(snapshot.tick);
                    return Ok(snapshot);
                }
                Err(RecvError::Lagged(n)) => return Err(SubscriptionError::Lagged(n)),
                Err(RecvError::Closed) => return Err(SubscriptionError::Closed),
            }
        }
    }

    /// Tick of the last snapshot handed out, if any
    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::State;

    fn snapshot(tick: u64) -> Snapshot {
        let mut state = State::initial();
        state.score = tick as u32 * 10;
        Snapshot { tick, state }
    }

    #[tokio::test]
    async fn test_first_item_is_latest() {
        let broadcaster = InMemoryBroadcaster::new(snapshot(0));
        broadcaster.send(snapshot(1)).await;
        broadcaster.send(snapshot(2)).await;

        let mut late = broadcaster.subscribe();
        assert_eq!(late.recv().await.unwrap().tick, 2);

        broadcaster.send(snapshot(3)).await;
        assert_eq!(late.recv().await.unwrap().tick, 3);
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_tick_order() {
        let broadcaster = InMemoryBroadcaster::new(snapshot(0));
        let mut rx1 = broadcaster.subscribe();
        let mut rx2 = broadcaster.subscribe();

        for tick in 1..=5 {
            broadcaster.send(snapshot(tick)).await;
        }

        for rx in [&mut rx1, &mut rx2] {
            for expected in 0..=5 {
                assert_eq!(rx.recv().await.unwrap().tick, expected);
            }
            assert_eq!(rx.last_tick(), Some(5));
        }
    }

    #[tokio::test]
    async fn test_duplicates_are_skipped() {
        let broadcaster = InMemoryBroadcaster::new(snapshot(0));
        let rx = broadcaster.tx.subscribe();
        // Simulate a publish that landed in both channels around subscription
        broadcaster.latest.send_replace(Arc::new(snapshot(1)));
        broadcaster.tx.send(Arc::new(snapshot(1))).unwrap();
        broadcaster.tx.send(Arc::new(snapshot(2))).unwrap();

        let mut sub = Subscription::new(broadcaster.latest(), rx);
        assert_eq!(sub.recv().await.unwrap().tick, 1);
        assert_eq!(sub.recv().await.unwrap().tick, 2);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_is_told() {
        let broadcaster = InMemoryBroadcaster::with_capacity(snapshot(0), 2);
        let mut sub = broadcaster.subscribe();
        assert_eq!(sub.recv().await.unwrap().tick, 0);

        for tick in 1..=5 {
            broadcaster.send(snapshot(tick)).await;
        }

        assert_eq!(sub.recv().await, Err(SubscriptionError::Lagged(3)));
        assert_eq!(sub.recv().await.unwrap().tick, 4);
        assert_eq!(sub.recv().await.unwrap().tick, 5);
    }

    #[tokio::test]
    async fn test_closed_after_publisher_dropped() {
        let broadcaster = InMemoryBroadcaster::new(snapshot(0));
        let mut sub = broadcaster.subscribe();
        broadcaster.send(snapshot(1)).await;
        drop(broadcaster);

        assert_eq!(sub.recv().await.unwrap().tick, 0);
        assert_eq!(sub.recv().await.unwrap().tick, 1);
        assert_eq!(sub.recv().await, Err(SubscriptionError::Closed));
    }

    #[tokio::test]
    async fn test_latest_without_subscribers() {
        let broadcaster = InMemoryBroadcaster::new(snapshot(0));
        broadcaster.send(snapshot(1)).await;
        assert_eq!(broadcaster.latest().tick, 1);
        assert_eq!(broadcaster.latest(), broadcaster.latest());
    }

    #[tokio::test]
    async fn test_subscriber_count() {
        let broadcaster = InMemoryBroadcaster::new(snapshot(0));
        assert_eq!(broadcaster.subscriber_count(), 0);

        let _rx1 = broadcaster.subscribe();
        assert_eq!(broadcaster.subscriber_count(), 1);

        let rx2 = broadcaster.subscribe();
        assert_eq!(broadcaster.subscriber_count(), 2);

        drop(rx2);
        assert_eq!(broadcaster.subscriber_count(), 1);
    }
}
