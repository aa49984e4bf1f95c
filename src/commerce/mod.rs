//! Remote Commerce Module
//!
//! The storefront's only channel to the commerce backend:
//! - Wire models (requests, receipts, admin stats)
//! - Error taxonomy (network, rejected, malformed)
//! - The `CommerceApi` trait and its `reqwest` implementation

pub mod client;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use client::{CommerceApi, HttpCommerceClient};
pub use error::CommerceError;
pub use models::{
    AddItemConfirmation, AddItemRequest, AdminStats, CheckoutReceipt, CheckoutRequest,
    DiscountCode, ErrorBody, GeneratedDiscount,
};
