//! Commerce API wire models
//!
//! Request and response bodies of the commerce backend. Field names follow
//! the backend's JSON exactly; unknown response fields are kept in `extra`.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// =============================================================================
// Requests
// =============================================================================

/// Body of `POST /cart/{user_id}/items`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddItemRequest {
    /// Product id, sent as a string
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl AddItemRequest {
    /// A single-unit add request for `product`
    pub fn for_product(product: &Product) -> Self {
        Self {
            item_id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}

/// Body of `POST /cart/{user_id}/checkout`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    /// Trimmed discount code; empty when none was entered
    #[serde(default)]
    pub discount_code: String,
}

impl CheckoutRequest {
    pub fn new(discount_code: &str) -> Self {
        Self {
            discount_code: discount_code.trim().to_string(),
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Acknowledgement of an add-item request. Its content is not interpreted.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AddItemConfirmation {
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Result of a successful checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    #[serde(default)]
    pub discount_applied: bool,

    #[serde(default)]
    pub discount_amount: Option<f64>,

    /// Everything else the backend reported (totals, order ids, ...)
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A backend-issued, single-use percentage discount
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub discount_percent: f64,

    #[serde(default)]
    pub used: bool,
}

/// Aggregate totals across all completed orders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_items_purchased: u64,

    #[serde(default)]
    pub total_purchase_amount: f64,

    #[serde(default)]
    pub total_discount_amount: f64,

    #[serde(default)]
    pub discount_codes: Vec<DiscountCode>,
}

/// Body of a successful `POST /admin/discount-codes`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDiscount {
    #[serde(default)]
    pub discount_code: Option<DiscountCode>,
}

impl GeneratedDiscount {
    /// The issued code, if the backend included a non-empty one
    pub fn code(&self) -> Option<&str> {
        self.discount_code
            .as_ref()
            .map(|d| d.code.as_str())
            .filter(|c| !c.is_empty())
    }
}

/// Error body returned alongside non-success statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            message: None,
        }
    }

    /// `error`, falling back to `message`; blank strings count as absent
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|e| !e.trim().is_empty())
            .or(self.message.filter(|m| !m.trim().is_empty()))
    }
}
