//! Single-writer, many-reader publication of cart snapshots.

use std::sync::Arc;

use futures_core::Stream;
use parking_lot::Mutex;
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use super::state::CartState;

/// Largest snapshot buffer a publisher will allocate.
pub const MAX_CHANNEL_CAPACITY: usize = 1 << 16;

/// Latest-value cell plus a broadcast of every snapshot.
///
/// `publish` and `subscribe` both take the `latest` lock, so a subscriber
/// sees the current snapshot exactly once and then every later one.
#[derive(Clone)]
pub struct StatePublisher {
    inner: Arc<PublisherInner>,
}

struct PublisherInner {
    latest: Mutex<Option<CartState>>,
    tx: broadcast::Sender<CartState>,
}

impl StatePublisher {
    /// `capacity` is how many snapshots a slow subscriber may fall behind
    /// before it starts skipping. Clamped to `1..=MAX_CHANNEL_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.clamp(1, MAX_CHANNEL_CAPACITY));
        Self {
            inner: Arc::new(PublisherInner {
                latest: Mutex::new(None),
                tx,
            }),
        }
    }

    pub fn publish(&self, state: CartState) {
        let mut latest = self.inner.latest.lock();
        // No receivers is fine: the snapshot is still kept as latest.
        let _ = self.inner.tx.send(state.clone());
        *latest = Some(state);
    }

    /// Most recently published snapshot, if any.
    pub fn latest(&self) -> Option<CartState> {
        self.inner.latest.lock().clone()
    }

    pub fn subscribe(&self) -> StateSubscription {
        let latest = self.inner.latest.lock();
        StateSubscription {
            pending: latest.clone(),
            rx: self.inner.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.tx.receiver_count()
    }
}

/// One observer's view of the published snapshots.
pub struct StateSubscription {
    pending: Option<CartState>,
    rx: broadcast::Receiver<CartState>,
}

impl StateSubscription {
    /// Wait for the next snapshot. Returns `None` once the publisher is gone
    /// and everything it sent has been received.
    pub async fn next(&mut self) -> Option<CartState> {
        if let Some(state) = self.pending.take() {
            return Some(state);
        }
        loop {
            match self.rx.recv().await {
                Ok(state) => return Some(state),
                Err(RecvError::Lagged(skipped)) => log_lag(skipped),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next snapshot if one is already available.
    pub fn try_next(&mut self) -> Option<CartState> {
        if let Some(state) = self.pending.take() {
            return Some(state);
        }
        loop {
            match self.rx.try_recv() {
                Ok(state) => return Some(state),
                Err(TryRecvError::Lagged(skipped)) => log_lag(skipped),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = CartState> + Send + Unpin {
        let Self { pending, rx } = self;
        let updates = BroadcastStream::new(rx).filter_map(|result| match result {
            Ok(state) => Some(state),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                log_lag(skipped);
                None
            }
        });
        tokio_stream::iter(pending).chain(updates)
    }
}

fn log_lag(skipped: u64) {
    tracing::warn!(skipped, "Cart state observer lagged, skipping to newer snapshots");
}
