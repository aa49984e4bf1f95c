//! Shopping Cart State
//!
//! [`Cart`] is the plain data structure behind the session cart. It knows
//! nothing about the backend: callers decide when a mutation is allowed
//! (see `session::Storefront`).

use super::models::CartLine;
use crate::catalog::Product;

/// Ordered collection of cart lines, at most one per product id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Records one more unit of `product`, aggregating into an existing line.
    /// The quantity saturates at `u32::MAX`.
    ///
    /// Only call this once the backend has acknowledged the addition.
    pub fn add_one(&mut self, product: &Product) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::from_product(product));
        }
    }

    /// Deletes the line for `product_id`, returning whether one existed
    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    /// Overwrites the quantity of an existing line; zero removes it.
    ///
    /// Absent ids are ignored. Returns whether a line was touched.
    pub fn set_quantity(&mut self, product_id: u32, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over every line, computed fresh on each call
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
