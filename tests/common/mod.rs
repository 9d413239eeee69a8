//! Shared test utilities and mock data sources.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shopcart::cart::{CartDataSource, CartItem, DataSourceError};
use shopcart::viewmodel::{
    CartEngine, CartState, CartViewModel, EngineOptions, StatePublisher, StateSubscription,
};
use tempfile::TempDir;

/// Build an item priced in cents.
pub fn item(id: &str, name: &str, cents: i64, quantity: u32) -> CartItem {
    CartItem::new(id, name, Decimal::new(cents, 2), quantity).expect("valid test item")
}

pub fn t_shirt() -> CartItem {
    item("1", "T-Shirt", 7999, 2)
}

pub fn pants() -> CartItem {
    item("2", "Pants", 9999, 1)
}

/// Wait for the next snapshot, failing the test after one second.
pub async fn next_state(states: &mut StateSubscription) -> CartState {
    tokio::time::timeout(Duration::from_secs(1), states.next())
        .await
        .expect("timed out waiting for a cart snapshot")
        .expect("publisher closed")
}

/// Assert no further snapshot arrives within a short window.
pub async fn assert_quiet(states: &mut StateSubscription) {
    let extra = tokio::time::timeout(Duration::from_millis(50), states.next()).await;
    assert!(extra.is_err(), "unexpected snapshot: {:?}", extra);
}

/// Spawn a view-model over `source` with default options.
pub fn spawn_view_model(source: impl CartDataSource + 'static) -> CartViewModel {
    spawn_with_options(source, EngineOptions::default())
}

pub fn spawn_with_options(
    source: impl CartDataSource + 'static,
    options: EngineOptions,
) -> CartViewModel {
    CartViewModel::spawn(CartEngine::new(
        Arc::new(source),
        StatePublisher::new(16),
        options,
    ))
}

/// Data source that serves fixed items, fails writes on demand, and
/// records every write it receives.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    items: Vec<CartItem>,
    read_error: Option<String>,
    write_error: Option<String>,
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    pub fn returning(items: Vec<CartItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            read_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_writes(mut self, message: &str) -> Self {
        self.write_error = Some(message.to_string());
        self
    }

    fn write(&self, op: String) -> Result<(), DataSourceError> {
        self.writes.lock().push(op);
        match &self.write_error {
            Some(message) => Err(DataSourceError::unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CartDataSource for ScriptedSource {
    async fn get_items(&self) -> Result<Vec<CartItem>, DataSourceError> {
        match &self.read_error {
            Some(message) => Err(DataSourceError::unavailable(message.clone())),
            None => Ok(self.items.clone()),
        }
    }

    async fn insert_item(&self, item: CartItem) -> Result<(), DataSourceError> {
        self.write(format!("insert {}", item.id))
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), DataSourceError> {
        self.write(format!("delete {}", item_id))
    }
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
