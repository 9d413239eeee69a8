//! Cart line items, the pure transforms over them, and the data source
//! they are fetched from.

mod error;
mod item;
mod source;
mod store;

pub use error::{CartItemError, DataSourceError};
pub use item::CartItem;
pub use source::{default_items, CartDataSource, InMemoryCartSource};
pub use store::{append, fetch, remove, update_quantity};
