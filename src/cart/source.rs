//! Data-source collaborator behind the cart.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::error::DataSourceError;
use super::item::CartItem;

/// Backing collection of cart items.
///
/// The view-model only reads through [`get_items`](Self::get_items); the
/// write methods are used when write-through persistence is enabled.
#[async_trait]
pub trait CartDataSource: Send + Sync {
    /// Returns the full item list in display order.
    async fn get_items(&self) -> Result<Vec<CartItem>, DataSourceError>;

    async fn insert_item(&self, item: CartItem) -> Result<(), DataSourceError>;

    async fn delete_item(&self, item_id: &str) -> Result<(), DataSourceError>;

    /// Replace the stored item that has the same id.
    ///
    /// Default implementation deletes then re-inserts, which moves the item
    /// to the end for sources that append on insert.
    async fn replace_item(&self, item: CartItem) -> Result<(), DataSourceError> {
        self.delete_item(&item.id).await?;
        self.insert_item(item).await
    }
}

/// In-memory cart items with an optional simulated latency per call.
///
/// When `fail_with` is set, every call fails with
/// [`DataSourceError::Unavailable`] carrying that message.
#[derive(Clone, Default)]
pub struct InMemoryCartSource {
    items: Arc<RwLock<Vec<CartItem>>>,
    latency: Duration,
    fail_with: Option<String>,
}

impl InMemoryCartSource {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            latency: Duration::ZERO,
            fail_with: None,
        }
    }

    /// Source seeded with a T-Shirt and a pair of Pants.
    pub fn with_default_items() -> Self {
        Self::new(default_items())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    async fn simulate_io(&self) -> Result<(), DataSourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.fail_with {
            Some(message) => Err(DataSourceError::unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CartDataSource for InMemoryCartSource {
    async fn get_items(&self) -> Result<Vec<CartItem>, DataSourceError> {
        self.simulate_io().await?;
        Ok(self.items.read().await.clone())
    }

    async fn insert_item(&self, item: CartItem) -> Result<(), DataSourceError> {
        self.simulate_io().await?;
        self.items.write().await.push(item);
        Ok(())
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), DataSourceError> {
        self.simulate_io().await?;
        self.items.write().await.retain(|item| item.id != item_id);
        Ok(())
    }

    async fn replace_item(&self, item: CartItem) -> Result<(), DataSourceError> {
        self.simulate_io().await?;
        let mut items = self.items.write().await;
        let slot = items
            .iter_mut()
            .find(|existing| existing.id == item.id)
            .ok_or_else(|| DataSourceError::ItemNotFound {
                id: item.id.clone(),
            })?;
        *slot = item;
        Ok(())
    }
}

/// The two items the demo cart starts with.
pub fn default_items() -> Vec<CartItem> {
    vec![
        CartItem {
            id: "1".to_string(),
            name: "T-Shirt".to_string(),
            price: Decimal::new(7999, 2),
            quantity: 2,
        },
        CartItem {
            id: "2".to_string(),
            name: "Pants".to_string(),
            price: Decimal::new(9999, 2),
            quantity: 1,
        },
    ]
}
