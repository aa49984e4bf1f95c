//! Commerce backend HTTP client.
//!
//! Every exchange is a single JSON request: no retries, no timeout
//! override, no idempotency key. Any non-2xx status is a failure whatever
//! the body says.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::{debug, instrument, warn};

use super::error::CommerceError;
use super::models::{
    AddItemConfirmation, AddItemRequest, AdminStats, CheckoutReceipt, CheckoutRequest, ErrorBody,
    GeneratedDiscount,
};

/// The four exchanges the storefront performs against its backend.
///
/// `HttpCommerceClient` is the production implementation; tests swap in
/// scripted fakes.
pub trait CommerceApi: Send + Sync {
    /// Adds a line to the backend cart.
    fn add_item(
        &self,
        request: &AddItemRequest,
    ) -> impl Future<Output = Result<AddItemConfirmation, CommerceError>> + Send;

    /// Places the order for the backend cart.
    fn checkout(
        &self,
        request: &CheckoutRequest,
    ) -> impl Future<Output = Result<CheckoutReceipt, CommerceError>> + Send;

    /// Fetches the aggregate admin statistics.
    fn fetch_admin_stats(&self) -> impl Future<Output = Result<AdminStats, CommerceError>> + Send;

    /// Asks the backend to issue a new discount code.
    fn generate_discount_code(
        &self,
    ) -> impl Future<Output = Result<GeneratedDiscount, CommerceError>> + Send;
}

/// `reqwest`-backed commerce client bound to one user's cart.
#[derive(Debug, Clone)]
pub struct HttpCommerceClient {
    /// HTTP client.
    client: Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Cart owner, used in the cart routes.
    user_id: String,
}

impl HttpCommerceClient {
    /// Create a new client for `user_id` against `base_url`.
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, user_id)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            user_id: user_id.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    fn cart_url(&self, action: &str) -> String {
        format!("{}/cart/{}/{action}", self.base_url, self.user_id)
    }

    fn admin_url(&self, action: &str) -> String {
        format!("{}/admin/{action}", self.base_url)
    }

    /// Sends `request` and decodes a success body into `T`.
    async fn exchange<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CommerceError> {
        let response = request
            .send()
            .await
            .map_err(|e| CommerceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The error body is best effort: a non-JSON body just loses its text.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message);
            warn!(status = status.as_u16(), error = ?message, "Commerce backend rejected request");
            return Err(CommerceError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CommerceError::Malformed(e.to_string()))
    }
}

impl CommerceApi for HttpCommerceClient {
    #[instrument(skip(self, request), fields(user_id = %self.user_id, item_id = %request.item_id))]
    async fn add_item(
        &self,
        request: &AddItemRequest,
    ) -> Result<AddItemConfirmation, CommerceError> {
        let confirmation =
            Self::exchange(self.client.post(self.cart_url("items")).json(request)).await?;
        debug!("Item accepted by backend");
        Ok(confirmation)
    }

    #[instrument(skip(self, request), fields(user_id = %self.user_id))]
    async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutReceipt, CommerceError> {
        let receipt: CheckoutReceipt =
            Self::exchange(self.client.post(self.cart_url("checkout")).json(request)).await?;
        debug!(
            discount_applied = receipt.discount_applied,
            discount_amount = ?receipt.discount_amount,
            "Checkout accepted by backend"
        );
        Ok(receipt)
    }

    #[instrument(skip(self))]
    async fn fetch_admin_stats(&self) -> Result<AdminStats, CommerceError> {
        Self::exchange(self.client.get(self.admin_url("stats"))).await
    }

    #[instrument(skip(self))]
    async fn generate_discount_code(&self) -> Result<GeneratedDiscount, CommerceError> {
        Self::exchange(self.client.post(self.admin_url("discount-codes"))).await
    }
}
