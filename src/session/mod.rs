//! Session State Module
//!
//! The cart state manager and the data it renders from:
//! - `Storefront`: owns the session and mediates every mutation
//! - View models (`SessionView`, `CheckoutOutcome`)

pub mod manager;
pub mod models;

// Re-export commonly used types for convenience
pub use manager::Storefront;
pub use models::{CheckoutOutcome, SessionView, NETWORK_ERROR_MESSAGE};
