//! Development Backend Helpers
//!
//! Pure functions used by the handlers: cart merging, totals and code
//! generation. Summaries reuse `crate::cart::helpers`.

use super::models::{CartItem, DISCOUNT_CODE_PREFIX};
use uuid::Uuid;

/// Merges `incoming` into `cart_items`, aggregating the quantity of an
/// existing line with the same `item_id` or appending a new line.
///
/// Name and price of an existing line are left as first recorded. The
/// quantity saturates at `u32::MAX`.
pub fn merge_item(cart_items: &mut Vec<CartItem>, incoming: CartItem) {
    if let Some(existing) = cart_items
        .iter_mut()
        .find(|i| i.item_id == incoming.item_id)
    {
        existing.quantity = existing.quantity.saturating_add(incoming.quantity);
    } else {
        cart_items.push(incoming);
    }
}

pub fn subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// A fresh discount code: the prefix plus eight uppercase hex characters.
pub fn new_discount_code() -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(8)
        .collect();
    format!("{DISCOUNT_CODE_PREFIX}{}", suffix.to_uppercase())
}
