use crate::cart::{self, CartItem};
use crate::mvi::{Intent, Reduced, Reducer};

use super::state::CartState;

/// Inputs of [`CartReducer`].
///
/// Caller intents that need I/O are split by the engine into an action
/// before the side effect and one carrying its outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    FetchStarted,
    FetchSucceeded { items: Vec<CartItem> },
    FetchFailed { message: String },
    AddItem { item: CartItem },
    RemoveItem { id: String },
    UpdateQuantity { id: String, quantity: u32 },
    /// Write-through to the data source failed after a mutation.
    PersistFailed { message: String },
}

impl Intent for CartAction {}

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Reduced<Self::State> {
        match intent {
            CartAction::FetchStarted => Reduced::Applied(CartState::Loading),

            CartAction::FetchSucceeded { items } => Reduced::Applied(CartState::Ready { items }),

            CartAction::FetchFailed { message } | CartAction::PersistFailed { message } => {
                Reduced::Applied(CartState::Failed { message })
            }

            CartAction::AddItem { item } => match state {
                CartState::Ready { items } => Reduced::Applied(CartState::Ready {
                    items: cart::append(&items, item),
                }),
                other => Reduced::Ignored(other),
            },

            CartAction::RemoveItem { id } => match state {
                CartState::Ready { items } => Reduced::Applied(CartState::Ready {
                    items: cart::remove(&items, &id),
                }),
                other => Reduced::Ignored(other),
            },

            CartAction::UpdateQuantity { id, quantity } => match state {
                CartState::Ready { items } => Reduced::Applied(CartState::Ready {
                    items: cart::update_quantity(&items, &id, quantity),
                }),
                other => Reduced::Ignored(other),
            },
        }
    }
}
