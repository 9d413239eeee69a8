use std::sync::Arc;

use tokio::sync::mpsc;

use crate::cart::CartDataSource;
use crate::config::Config;

use super::engine::{CartEngine, EngineOptions};
use super::intent::CartIntent;
use super::publisher::{StatePublisher, StateSubscription};
use super::state::CartState;

/// Caller-facing handle to a cart engine running on its own task.
///
/// Cloning is cheap; the worker stops once every handle is dropped and the
/// queued intents have been handled.
#[derive(Clone)]
pub struct CartViewModel {
    tx: mpsc::UnboundedSender<CartIntent>,
    publisher: StatePublisher,
}

impl CartViewModel {
    /// Spawn `engine` onto the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(engine: CartEngine) -> Self {
        let publisher = engine.publisher().clone();
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(engine, rx));
        Self { tx, publisher }
    }

    /// Build an engine for `source` from `config` and spawn it.
    pub fn with_config(source: Arc<dyn CartDataSource>, config: &Config) -> Self {
        let publisher = StatePublisher::new(config.state.channel_capacity);
        Self::spawn(CartEngine::new(source, publisher, EngineOptions::from(config)))
    }

    /// Queue `intent`. Returns immediately; the outcome shows up as
    /// published snapshots.
    pub fn dispatch(&self, intent: CartIntent) {
        if let Err(err) = self.tx.send(intent) {
            tracing::warn!(intent = err.0.kind(), "Cart worker stopped, intent dropped");
        }
    }

    /// Subscribe to snapshots, starting with the latest one if any.
    pub fn observe_state(&self) -> StateSubscription {
        self.publisher.subscribe()
    }

    /// Latest published snapshot; `None` until the first intent is handled.
    pub fn current(&self) -> Option<CartState> {
        self.publisher.latest()
    }
}

async fn run_worker(mut engine: CartEngine, mut rx: mpsc::UnboundedReceiver<CartIntent>) {
    while let Some(intent) = rx.recv().await {
        engine.handle(intent).await;
    }
    tracing::debug!("Cart worker stopped");
}
