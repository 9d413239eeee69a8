//! Runs cart intents to completion, one at a time.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cart::{self, CartDataSource, CartItem, DataSourceError};
use crate::config::Config;
use crate::mvi::{Reduced, Reducer};

use super::intent::CartIntent;
use super::publisher::StatePublisher;
use super::reducer::{CartAction, CartReducer};
use super::state::CartState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// Mirror accepted mutations to the data source after publishing them.
    pub sync_mutations: bool,
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        Self {
            sync_mutations: config.sync_mutations,
        }
    }
}

/// Write-through operation issued after a mutation was applied.
enum Persist {
    Insert(CartItem),
    Delete(String),
    Replace(CartItem),
    /// Every line sharing one id; stored as delete-then-reinsert.
    ReplaceAll { id: String, items: Vec<CartItem> },
}

/// Owner of the cart state.
///
/// Performs the side effects of each intent and feeds their outcome to
/// [`CartReducer`]. Every applied action is published; ignored ones are not.
pub struct CartEngine {
    source: Arc<dyn CartDataSource>,
    publisher: StatePublisher,
    state: CartState,
    options: EngineOptions,
}

impl CartEngine {
    pub fn new(
        source: Arc<dyn CartDataSource>,
        publisher: StatePublisher,
        options: EngineOptions,
    ) -> Self {
        Self {
            source,
            publisher,
            state: CartState::Idle,
            options,
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn publisher(&self) -> &StatePublisher {
        &self.publisher
    }

    pub async fn handle(&mut self, intent: CartIntent) {
        debug!(intent = intent.kind(), "Handling cart intent");
        match intent {
            CartIntent::LoadCart => self.load().await,
            CartIntent::AddItem(item) => {
                let persist = Persist::Insert(item.clone());
                if self.apply(CartAction::AddItem { item }) {
                    self.persist(persist).await;
                }
            }
            CartIntent::RemoveItem { id } => {
                let persist = Persist::Delete(id.clone());
                if self.apply(CartAction::RemoveItem { id }) {
                    self.persist(persist).await;
                }
            }
            CartIntent::UpdateQuantity { id, quantity } => {
                if self.apply(CartAction::UpdateQuantity {
                    id: id.clone(),
                    quantity,
                }) {
                    let mut updated: Vec<CartItem> = self
                        .state
                        .items()
                        .iter()
                        .filter(|item| item.id == id)
                        .cloned()
                        .collect();
                    // Nothing to write back when the id was not in the cart.
                    match updated.len() {
                        0 => {}
                        1 => {
                            let item = updated.remove(0);
                            self.persist(Persist::Replace(item)).await;
                        }
                        _ => self.persist(Persist::ReplaceAll { id, items: updated }).await,
                    }
                }
            }
        }
    }

    async fn load(&mut self) {
        self.apply(CartAction::FetchStarted);
        info!("Fetching cart");
        match cart::fetch(self.source.as_ref()).await {
            Ok(items) => {
                info!(count = items.len(), "Cart fetched");
                self.apply(CartAction::FetchSucceeded { items });
            }
            Err(err) => {
                warn!(error = %err, "Cart fetch failed");
                self.apply(CartAction::FetchFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    async fn persist(&mut self, op: Persist) {
        if !self.options.sync_mutations {
            return;
        }
        let result: Result<(), DataSourceError> = match op {
            Persist::Insert(item) => self.source.insert_item(item).await,
            Persist::Delete(id) => self.source.delete_item(&id).await,
            Persist::Replace(item) => self.source.replace_item(item).await,
            Persist::ReplaceAll { id, items } => self.replace_all(&id, items).await,
        };
        if let Err(err) = result {
            warn!(error = %err, "Cart write-through failed");
            self.apply(CartAction::PersistFailed {
                message: err.to_string(),
            });
        }
    }

    async fn replace_all(&self, id: &str, items: Vec<CartItem>) -> Result<(), DataSourceError> {
        self.source.delete_item(id).await?;
        for item in items {
            self.source.insert_item(item).await?;
        }
        Ok(())
    }

    /// Reduce `action` against the current state. Returns whether it applied.
    fn apply(&mut self, action: CartAction) -> bool {
        let state = std::mem::take(&mut self.state);
        match CartReducer::reduce(state, action) {
            Reduced::Applied(next) => {
                self.publisher.publish(next.clone());
                self.state = next;
                true
            }
            Reduced::Ignored(state) => {
                debug!(state = ?state, "Cart is not ready, mutation ignored");
                self.state = state;
                false
            }
        }
    }
}
