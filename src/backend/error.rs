//! Development backend errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::commerce::ErrorBody;

/// Reasons the development backend refuses a request.
///
/// Rendered as `400 Bad Request` with an `{ "error": ... }` body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid discount code")]
    InvalidDiscountCode,

    #[error("Discount code has already been used")]
    DiscountCodeUsed,

    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request rejected");
        (StatusCode::BAD_REQUEST, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
