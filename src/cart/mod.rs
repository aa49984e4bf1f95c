//! Shopping Cart Domain Module
//!
//! This module contains the session cart, including:
//! - Domain models (CartLine, the LineItem summary trait)
//! - Cart state (line bookkeeping and totals)
//! - Formatting helpers (summaries, prices)

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartLine, LineItem};
pub use state::Cart;
