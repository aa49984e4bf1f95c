//! Development Backend Models
//!
//! Server-side records and response bodies. Request bodies and the admin
//! stats payload are shared with the client (`crate::commerce::models`).

use crate::cart::LineItem;
use serde::{Deserialize, Serialize};

/// Percentage granted by every generated discount code
pub const GENERATED_DISCOUNT_PERCENT: f64 = 10.0;

/// Prefix of generated discount codes
pub const DISCOUNT_CODE_PREFIX: &str = "SAVE";

/// A line of a backend cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product id as sent by the client
    pub item_id: String,

    pub name: String,

    pub price: f64,

    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Response for `POST /cart/{user_id}/items`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Status of the operation
    pub status: String,

    pub user_id: String,

    pub items: Vec<CartItem>,
}

/// Response for `POST /cart/{user_id}/checkout`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: String,
    pub subtotal: f64,
    pub discount_applied: bool,
    pub discount_amount: f64,
    pub total: f64,
}

impl LineItem for CartItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
