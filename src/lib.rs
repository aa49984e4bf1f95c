//! Storefront Cart Library
//!
//! Client side of a small storefront: a fixed product catalog, a session
//! cart kept in step with a remote commerce backend, transient notifications
//! and an admin statistics view. A development backend implementing the
//! same HTTP contract is included for local runs and tests.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod commerce;
pub mod notification;
pub mod session;

// Presentation
pub mod shell;
pub mod view;

// Infrastructure
pub mod backend;
pub mod clock;
pub mod config;
pub mod error;
pub mod router;

pub use catalog::{Catalog, Product};
pub use commerce::{CommerceApi, CommerceError, HttpCommerceClient};
pub use session::{CheckoutOutcome, SessionView, Storefront};
