//! Development Backend State
//!
//! In-memory carts, issued discount codes and running order totals.

use super::error::BackendError;
use super::helpers::{merge_item, new_discount_code, subtotal};
use super::models::{CartItem, CheckoutResponse, GENERATED_DISCOUNT_PERCENT};
use crate::cart::helpers::{format_item_summary, total_units};
use crate::commerce::{AdminStats, DiscountCode};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<BackendState>;

/// Core backend state: carts per user plus the order ledger
#[derive(Debug, Default)]
pub struct BackendState {
    /// In-memory storage for carts, keyed by user id.
    pub carts: DashMap<String, Vec<CartItem>>,

    /// Totals and discount codes; checkout touches both atomically.
    ledger: Mutex<AdminStats>,
}

impl BackendState {
    pub fn new() -> Self {
        Self::default()
    }

    fn ledger(&self) -> MutexGuard<'_, AdminStats> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validates and merges one item into the user's cart, returning the
    /// cart afterwards.
    pub fn add_item(&self, user_id: &str, item: CartItem) -> Result<Vec<CartItem>, BackendError> {
        if item.name.trim().is_empty() {
            return Err(BackendError::InvalidItem("name is required".into()));
        }
        if item.price.is_nan() || item.price < 0.0 {
            return Err(BackendError::InvalidItem("price must not be negative".into()));
        }
        if item.quantity == 0 {
            return Err(BackendError::InvalidItem("quantity must be at least 1".into()));
        }

        let mut cart = self.carts.entry(user_id.to_string()).or_default();
        merge_item(&mut cart, item);
        Ok(cart.clone())
    }

    pub fn cart(&self, user_id: &str) -> Vec<CartItem> {
        self.carts
            .get(user_id)
            .map(|c| c.value().clone())
            .unwrap_or_default()
    }

    /// Places the order for `user_id`'s cart.
    ///
    /// A non-empty `discount_code` must name an unused code; it is consumed
    /// only if the order goes through. The cart leaves the map before it is
    /// validated and is merged back if the order is refused.
    pub fn checkout(
        &self,
        user_id: &str,
        discount_code: &str,
    ) -> Result<CheckoutResponse, BackendError> {
        let discount_code = discount_code.trim();
        let mut ledger = self.ledger();

        let items = match self.carts.remove(user_id) {
            Some((_, items)) if !items.is_empty() => items,
            _ => return Err(BackendError::EmptyCart),
        };

        let percent = if discount_code.is_empty() {
            None
        } else {
            match ledger.discount_codes.iter().find(|c| c.code == discount_code) {
                None => {
                    self.restore_cart(user_id, items);
                    return Err(BackendError::InvalidDiscountCode);
                }
                Some(code) if code.used => {
                    self.restore_cart(user_id, items);
                    return Err(BackendError::DiscountCodeUsed);
                }
                Some(code) => Some(code.discount_percent),
            }
        };

        let subtotal = subtotal(&items);
        let discount_amount = percent.map_or(0.0, |p| subtotal * p / 100.0);
        let total = subtotal - discount_amount;

        if percent.is_some() {
            if let Some(code) = ledger
                .discount_codes
                .iter_mut()
                .find(|c| c.code == discount_code)
            {
                code.used = true;
            }
        }
        ledger.total_items_purchased += total_units(&items);
        ledger.total_purchase_amount += total;
        ledger.total_discount_amount += discount_amount;

        info!(
            user_id,
            items = %format_item_summary(&items),
            subtotal,
            discount_amount,
            "Order placed"
        );

        Ok(CheckoutResponse {
            status: "checked_out".to_string(),
            subtotal,
            discount_applied: percent.is_some(),
            discount_amount,
            total,
        })
    }

    /// Puts a cart taken by a failed checkout back, ahead of anything added
    /// while it was out.
    fn restore_cart(&self, user_id: &str, mut items: Vec<CartItem>) {
        let mut cart = self.carts.entry(user_id.to_string()).or_default();
        for added in cart.drain(..) {
            merge_item(&mut items, added);
        }
        *cart = items;
    }

    pub fn stats(&self) -> AdminStats {
        self.ledger().clone()
    }

    /// Issues a new, unused discount code
    pub fn generate_discount_code(&self) -> DiscountCode {
        let code = DiscountCode {
            code: new_discount_code(),
            discount_percent: GENERATED_DISCOUNT_PERCENT,
            used: false,
        };
        self.ledger().discount_codes.push(code.clone());
        info!(code = %code.code, "Discount code issued");
        code
    }
}
