//! REST API handlers for the development commerce backend
//!
//! This module implements the cart, checkout and admin endpoints the
//! storefront client talks to.

use super::{error::BackendError, models::*, state::SharedState};
use crate::commerce::{AddItemRequest, AdminStats, CheckoutRequest, GeneratedDiscount};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn cart_routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/:user_id/items", post(add_item))
        .route("/cart/:user_id/checkout", post(checkout))
}

/// Creates routes for admin operations
pub fn admin_routes() -> Router<SharedState> {
    Router::new()
        .route("/admin/stats", get(stats))
        .route("/admin/discount-codes", post(generate_discount_code))
}

/// Endpoint: POST /cart/{user_id}/items
/// Merges one item into the user's cart.
async fn add_item(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
    body: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, BackendError> {
    let Json(payload) = body.map_err(|e| BackendError::InvalidItem(e.body_text()))?;

    let items = state.add_item(
        &user_id,
        CartItem {
            item_id: payload.item_id,
            name: payload.name,
            price: payload.price,
            quantity: payload.quantity,
        },
    )?;

    Ok(Json(CartResponse {
        status: "added".to_string(),
        user_id,
        items,
    }))
}

/// Endpoint: POST /cart/{user_id}/checkout
/// Places the order for the user's cart, applying a discount code if given.
async fn checkout(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
    body: Option<Json<CheckoutRequest>>,
) -> Result<Json<CheckoutResponse>, BackendError> {
    let payload = body.map(|Json(p)| p).unwrap_or_default();
    state.checkout(&user_id, &payload.discount_code).map(Json)
}

/// Endpoint: GET /admin/stats
async fn stats(State(state): State<SharedState>) -> Json<AdminStats> {
    Json(state.stats())
}

/// Endpoint: POST /admin/discount-codes
async fn generate_discount_code(State(state): State<SharedState>) -> Json<GeneratedDiscount> {
    Json(GeneratedDiscount {
        discount_code: Some(state.generate_discount_code()),
    })
}
