//! Product Catalog
//!
//! The storefront sells from a fixed list of products. There is no mutation
//! path: the catalog is built once and only read afterwards.

use serde::{Deserialize, Serialize};

/// A purchasable item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog identifier, unique within the catalog
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unit price, never negative
    pub price: f64,

    /// Short marketing description
    pub description: String,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// Read-only list of products offered by the storefront
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::demo()
    }
}

impl Catalog {
    /// Builds a catalog from an explicit product list.
    ///
    /// Products with a negative price are dropped, and only the first product
    /// seen for a given id is kept.
    pub fn new(products: Vec<Product>) -> Self {
        let mut accepted: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if product.price < 0.0 || accepted.iter().any(|p| p.id == product.id) {
                continue;
            }
            accepted.push(product);
        }
        Self { products: accepted }
    }

    /// The six-item electronics catalog the storefront ships with
    pub fn demo() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop", 999.99, "High-performance laptop"),
            Product::new(2, "Smartphone", 699.99, "Latest smartphone"),
            Product::new(3, "Headphones", 199.99, "Wireless headphones"),
            Product::new(4, "Tablet", 449.99, "10-inch tablet"),
            Product::new(5, "Smart Watch", 299.99, "Fitness tracking watch"),
            Product::new(6, "Camera", 799.99, "Digital camera"),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by its catalog id
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
