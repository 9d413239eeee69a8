use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cart::{default_items, CartItem, InMemoryCartSource};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Mirror add/remove/update intents to the data source (default: false).
    #[serde(default)]
    pub sync_mutations: bool,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// In-memory data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Simulated latency per data-source call in milliseconds (default: 250).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// When set, every data-source call fails with this message.
    #[serde(default)]
    pub fail_with: Option<String>,
    /// Items the cart starts with.
    #[serde(default = "default_items")]
    pub items: Vec<CartItem>,
}

/// State publication settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Snapshots a slow observer may fall behind before skipping (default: 64).
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_latency_ms() -> u64 {
    250
}

fn default_channel_capacity() -> usize {
    64
}

impl SourceConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Build the in-memory source described by this section.
    pub fn build(&self) -> InMemoryCartSource {
        let source = InMemoryCartSource::new(self.items.clone()).with_latency(self.latency());
        match &self.fail_with {
            Some(message) => source.failing(message.clone()),
            None => source,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_mutations: false,
            source: SourceConfig::default(),
            state: StateConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            fail_with: None,
            items: default_items(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}
