use crate::cart::CartItem;
use crate::mvi::Intent;

/// Intents a caller can dispatch to the cart view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Fetch the cart from the data source, replacing whatever is shown.
    LoadCart,
    AddItem(CartItem),
    RemoveItem { id: String },
    UpdateQuantity { id: String, quantity: u32 },
}

impl Intent for CartIntent {}

impl CartIntent {
    /// Short name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoadCart => "load_cart",
            Self::AddItem(_) => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::UpdateQuantity { .. } => "update_quantity",
        }
    }
}
