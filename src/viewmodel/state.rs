use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::mvi::ViewState;

/// Snapshot of the cart as observers see it.
///
/// `Loading`, `Ready` and `Failed` are mutually exclusive phases.
/// `Idle` only exists inside the engine before the first intent and is
/// never published.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartState {
    #[default]
    Idle,
    Loading,
    Ready {
        /// Display order is insertion order.
        items: Vec<CartItem>,
    },
    Failed {
        message: String,
    },
}

impl ViewState for CartState {}

impl CartState {
    pub fn ready(items: Vec<CartItem>) -> Self {
        Self::Ready { items }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Error message when the cart failed to load.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Items in display order; empty unless `Ready`.
    pub fn items(&self) -> &[CartItem] {
        match self {
            Self::Ready { items } => items,
            _ => &[],
        }
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items().iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of line totals, or `None` if any step overflows a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.items()
            .iter()
            .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.line_total()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::default_items;

    #[test]
    fn idle_is_default() {
        assert_eq!(CartState::default(), CartState::Idle);
    }

    #[test]
    fn phases_are_exclusive() {
        let loading = CartState::Loading;
        assert!(loading.is_loading());
        assert!(loading.error().is_none());
        assert!(loading.items().is_empty());

        let failed = CartState::failed("network down");
        assert!(!failed.is_loading());
        assert_eq!(failed.error(), Some("network down"));
        assert!(failed.items().is_empty());

        let ready = CartState::ready(default_items());
        assert!(ready.is_ready());
        assert!(ready.error().is_none());
        assert_eq!(ready.items().len(), 2);
    }

    #[test]
    fn totals_over_ready_items() {
        let ready = CartState::ready(default_items());
        assert_eq!(ready.item_count(), 3);
        // 2 x 79.99 + 1 x 99.99
        assert_eq!(ready.subtotal(), Some(Decimal::new(25997, 2)));
        assert_eq!(CartState::Loading.subtotal(), Some(Decimal::ZERO));
    }

    #[test]
    fn subtotal_overflow_is_none() {
        let yacht = CartItem::new(
            "1",
            "Yacht",
            Decimal::from_i128_with_scale(10i128.pow(20), 0),
            4_000_000_000,
        )
        .unwrap();
        assert_eq!(CartState::ready(vec![yacht]).subtotal(), None);

        // Each line fits, the sum does not.
        let half = CartItem::new("2", "Hull", Decimal::MAX, 1).unwrap();
        assert_eq!(CartState::ready(vec![half.clone(), half]).subtotal(), None);
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(CartState::Loading).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "loading" }));

        let json = serde_json::to_value(CartState::failed("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "failed", "message": "boom" }));
    }
}
