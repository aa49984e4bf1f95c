//! Shopping Cart Domain Models
//!
//! This module contains the data structures held by the session cart.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A cart row as seen by summaries: a name and a unit count
pub trait LineItem {
    fn name(&self) -> &str;
    fn quantity(&self) -> u32;
}

/// One row of the shopping cart, keyed by product id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Catalog id of the product
    pub product_id: u32,

    /// Product name at the time it was added
    pub name: String,

    /// Unit price at the time it was added
    pub price: f64,

    /// Always at least 1; a line reaching 0 is removed
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line holding a single unit of `product`
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

impl LineItem for CartLine {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}
