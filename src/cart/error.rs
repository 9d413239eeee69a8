use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by a [`CartDataSource`](super::CartDataSource).
///
/// The `Display` text is what a failed cart shows to the user, so
/// `Unavailable` renders its message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceError {
    #[error("{message}")]
    Unavailable { message: String },

    #[error("Cart item '{id}' not found")]
    ItemNotFound { id: String },
}

impl DataSourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Errors raised when building a [`CartItem`](super::CartItem).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartItemError {
    #[error("Cart item '{id}' has negative price {price}")]
    NegativePrice { id: String, price: Decimal },
}
