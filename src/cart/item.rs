use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CartItemError;

/// One line of a shopping cart.
///
/// Values are never edited in place: transforms build a replacement with
/// [`CartItem::with_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique within a cart.
    pub id: String,
    /// Display name (e.g., "T-Shirt").
    pub name: String,
    /// Unit price, serialized as a decimal string.
    pub price: Decimal,
    pub quantity: u32,
}

impl CartItem {
    /// Build a cart item, rejecting negative prices.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Result<Self, CartItemError> {
        let id = id.into();
        if price < Decimal::ZERO {
            return Err(CartItemError::NegativePrice { id, price });
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            quantity,
        })
    }

    /// Copy of this item with a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Price times quantity, or `None` if it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}
