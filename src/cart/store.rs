//! Pure transforms over an ordered list of cart items.
//!
//! None of these functions fail: removing or updating an id that is not
//! in the list returns the list unchanged.

use super::error::DataSourceError;
use super::item::CartItem;
use super::source::CartDataSource;

/// `items` with `new_item` appended at the end. Ids are not checked for
/// collisions.
pub fn append(items: &[CartItem], new_item: CartItem) -> Vec<CartItem> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(new_item);
    next
}

/// `items` without any entry whose id equals `target_id`.
pub fn remove(items: &[CartItem], target_id: &str) -> Vec<CartItem> {
    items
        .iter()
        .filter(|item| item.id != target_id)
        .cloned()
        .collect()
}

/// `items` with the quantity of every entry matching `target_id` replaced.
pub fn update_quantity(items: &[CartItem], target_id: &str, new_quantity: u32) -> Vec<CartItem> {
    items
        .iter()
        .map(|item| {
            if item.id == target_id {
                item.with_quantity(new_quantity)
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Read the full current item list from `source`.
pub async fn fetch<S>(source: &S) -> Result<Vec<CartItem>, DataSourceError>
where
    S: CartDataSource + ?Sized,
{
    source.get_items().await
}
