//! Development Commerce Backend
//!
//! An in-memory implementation of the commerce API the storefront consumes,
//! for local development and integration tests:
//! - Domain models (backend cart items, checkout responses)
//! - Business logic helpers (merging, totals, code generation)
//! - Application state (carts, discount codes, order totals)
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Re-export commonly used types for convenience
pub use error::BackendError;
pub use state::{BackendState, SharedState};

/// Binds `addr` and serves the development backend until the task is
/// cancelled.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let state = Arc::new(BackendState::new());
    let app = crate::router::create_backend_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Development backend listening");
    axum::serve(listener, app).await
}
